// file_path: src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WiimError {
    /// 请求失败：非200状态码、超时或底层传输错误
    #[error("Cannot connect to device ({url}){}", describe_status(.status))]
    Connection {
        url: String,
        status: Option<StatusCode>,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Integer parse error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("UTF-8 decode error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Unknown value: {0}")]
    UnknownValue(String),
}

impl WiimError {
    /// 是否为连接错误
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    /// 设备返回的HTTP状态码（仅当设备有响应且非200时存在）
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Connection { status, .. } => *status,
            _ => None,
        }
    }
}

fn describe_status(status: &Option<StatusCode>) -> String {
    match status {
        Some(status) => format!(": HTTP {}", status),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, WiimError>;

mod control_client;
mod status_client;

use std::sync::{Mutex, PoisonError};

use log::{debug, warn};
use reqwest::{Client, ClientBuilder, StatusCode};

use crate::dto::request::Command;
use crate::error::{Result, WiimError};
use crate::types::ClientConfig;

/// HTTP 会话状态
enum Session {
    /// 尚未创建会话（或自建会话已关闭）
    Empty,
    /// 客户端自行创建的会话，关闭时释放
    Owned(Client),
    /// 调用方传入的会话，由调用方负责释放
    Shared(Client),
}

/// HTTP 客户端 - 负责与设备的单次请求
pub struct HttpClient {
    config: ClientConfig,
    session: Mutex<Session>,
}

impl HttpClient {
    /// 创建新的 HTTP 客户端，session 为 None 时在首次请求时创建
    pub fn new(config: ClientConfig, session: Option<Client>) -> Self {
        let session = match session {
            Some(client) => Session::Shared(client),
            None => Session::Empty,
        };

        Self {
            config,
            session: Mutex::new(session),
        }
    }

    pub fn host(&self) -> &str {
        &self.config.host
    }

    /// 是否持有会话
    pub fn has_session(&self) -> bool {
        !matches!(*self.lock_session(), Session::Empty)
    }

    /// 会话是否由客户端自行创建
    pub fn owns_session(&self) -> bool {
        matches!(*self.lock_session(), Session::Owned(_))
    }

    /// 释放自建会话，重复调用无副作用；调用方传入的会话不受影响
    pub async fn close(&self) {
        let mut session = self.lock_session();
        if let Session::Owned(_) = *session {
            *session = Session::Empty;
            debug!("已释放设备 {} 的 HTTP 会话", self.config.host);
        }
    }

    fn lock_session(&self) -> std::sync::MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 获取会话，不存在时创建并标记为自有
    fn session(&self, url: &str) -> Result<Client> {
        let mut session = self.lock_session();
        if let Session::Owned(client) | Session::Shared(client) = &*session {
            return Ok(client.clone());
        }

        let client = self.build_client().map_err(|e| WiimError::Connection {
            url: url.to_string(),
            status: None,
            source: Some(e),
        })?;
        debug!("为设备 {} 创建 HTTP 会话", self.config.host);
        *session = Session::Owned(client.clone());

        Ok(client)
    }

    fn build_client(&self) -> std::result::Result<Client, reqwest::Error> {
        // 设备使用无效证书，必须关闭证书校验
        let mut builder = ClientBuilder::new().danger_accept_invalid_certs(true);

        if let Some(timeout) = self.config.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        builder.build()
    }

    /// 发送命令并返回响应文本，只尝试一次
    pub(crate) async fn execute(&self, command: &Command) -> Result<String> {
        let url = command.url(&self.config.host);
        let client = self.session(&url)?;

        debug!("发送命令: {}", command);

        let response = match client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("命令 {} 请求失败: {}", command, e);
                return Err(WiimError::Connection {
                    url,
                    status: None,
                    source: Some(e),
                });
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!("命令 {} 失败，状态码: {}", command, status);
            return Err(WiimError::Connection {
                url,
                status: Some(status),
                source: None,
            });
        }

        response.text().await.map_err(|e| {
            warn!("读取命令 {} 的响应失败: {}", command, e);
            WiimError::Connection {
                url,
                status: Some(status),
                source: Some(e),
            }
        })
    }
}

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::WiimError;

/// 设备返回的键值对（播放状态、设备信息、EQ状态）
///
/// 设备字段集合随固件版本变化，这里不做结构校验
pub type StatusMap = HashMap<String, String>;

/// 客户端配置
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 设备地址（主机名或IP，可带端口）
    pub host: String,
    /// 单次请求超时时间，None 表示使用传输层默认值
    pub request_timeout: Option<Duration>,
    /// 建立连接超时时间
    pub connect_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            request_timeout: None,
            connect_timeout: None,
        }
    }
}

/// 循环/随机播放模式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopMode {
    Sequence,       // 顺序播放
    LoopAll,        // 列表循环
    LoopOne,        // 单曲循环
    LoopAllShuffle, // 列表循环 + 随机
    Shuffle,        // 随机
    LoopOneShuffle, // 单曲循环 + 随机
}

impl LoopMode {
    /// 命令中使用的模式代码
    pub fn code(&self) -> &'static str {
        match self {
            LoopMode::Sequence => "4",
            LoopMode::LoopAll => "0",
            LoopMode::LoopOne => "1",
            LoopMode::LoopAllShuffle => "2",
            LoopMode::Shuffle => "3",
            LoopMode::LoopOneShuffle => "5",
        }
    }
}

impl fmt::Display for LoopMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 输入源
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    LineIn,
    Bluetooth,
    Optical,
    UDisk,
    Wifi,
}

impl Source {
    pub fn code(&self) -> &'static str {
        match self {
            Source::LineIn => "line-in",
            Source::Bluetooth => "bluetooth",
            Source::Optical => "optical",
            Source::UDisk => "udisk",
            Source::Wifi => "wifi",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 当前播放模式 - 播放状态中 "mode" 字段的取值
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackMode {
    None,
    AirPlay,
    Dlna,
    Default,
    UDiskPlaylist,
    TfPlaylist,
    Spotify,
    Tidal,
    LineIn,
    Bluetooth,
    ExternalStorage,
    Optical,
    Mirror,
    Voicemail,
    Slave,
    /// 未收录的模式代码，原样保留
    Other(String),
}

impl PlaybackMode {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "0" => PlaybackMode::None,
            "1" => PlaybackMode::AirPlay,
            "2" => PlaybackMode::Dlna,
            "10" => PlaybackMode::Default,
            "11" => PlaybackMode::UDiskPlaylist,
            "16" => PlaybackMode::TfPlaylist,
            "31" => PlaybackMode::Spotify,
            "32" => PlaybackMode::Tidal,
            "40" => PlaybackMode::LineIn,
            "41" => PlaybackMode::Bluetooth,
            "42" => PlaybackMode::ExternalStorage,
            "43" => PlaybackMode::Optical,
            "50" => PlaybackMode::Mirror,
            "60" => PlaybackMode::Voicemail,
            "99" => PlaybackMode::Slave,
            other => PlaybackMode::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            PlaybackMode::None => "0",
            PlaybackMode::AirPlay => "1",
            PlaybackMode::Dlna => "2",
            PlaybackMode::Default => "10",
            PlaybackMode::UDiskPlaylist => "11",
            PlaybackMode::TfPlaylist => "16",
            PlaybackMode::Spotify => "31",
            PlaybackMode::Tidal => "32",
            PlaybackMode::LineIn => "40",
            PlaybackMode::Bluetooth => "41",
            PlaybackMode::ExternalStorage => "42",
            PlaybackMode::Optical => "43",
            PlaybackMode::Mirror => "50",
            PlaybackMode::Voicemail => "60",
            PlaybackMode::Slave => "99",
            PlaybackMode::Other(code) => code,
        }
    }
}

/// WiFi 连接状态 - wlanGetConnectState 的返回值
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    InProgress, // PROCESS
    PairFail,   // PAIRFAIL，密码错误
    Fail,       // FAIL
    Connected,  // OK
}

impl FromStr for ConnectionState {
    type Err = WiimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "PROCESS" => Ok(ConnectionState::InProgress),
            "PAIRFAIL" => Ok(ConnectionState::PairFail),
            "FAIL" => Ok(ConnectionState::Fail),
            "OK" => Ok(ConnectionState::Connected),
            other => Err(WiimError::UnknownValue(other.to_string())),
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::InProgress => write!(f, "PROCESS"),
            ConnectionState::PairFail => write!(f, "PAIRFAIL"),
            ConnectionState::Fail => write!(f, "FAIL"),
            ConnectionState::Connected => write!(f, "OK"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_mode_codes() {
        assert_eq!(LoopMode::Sequence.code(), "4");
        assert_eq!(LoopMode::LoopAll.code(), "0");
        assert_eq!(LoopMode::LoopOneShuffle.to_string(), "5");
    }

    #[test]
    fn playback_mode_keeps_unknown_codes() {
        assert_eq!(PlaybackMode::from_code("31"), PlaybackMode::Spotify);
        assert_eq!(PlaybackMode::from_code(" 43 "), PlaybackMode::Optical);

        let mode = PlaybackMode::from_code("77");
        assert_eq!(mode, PlaybackMode::Other("77".to_string()));
        assert_eq!(mode.code(), "77");
    }

    #[test]
    fn connection_state_parsing() {
        assert_eq!("OK".parse::<ConnectionState>().unwrap(), ConnectionState::Connected);
        assert_eq!(
            "PAIRFAIL\n".parse::<ConnectionState>().unwrap(),
            ConnectionState::PairFail
        );
        assert!(matches!(
            "BUSY".parse::<ConnectionState>(),
            Err(WiimError::UnknownValue(v)) if v == "BUSY"
        ));
    }

    #[test]
    fn default_config_has_no_timeouts() {
        let config = ClientConfig::new("192.168.1.20");
        assert_eq!(config.host, "192.168.1.20");
        assert!(config.request_timeout.is_none());
        assert!(config.connect_timeout.is_none());
    }
}

use std::fmt;

use crate::types::{LoopMode, Source};

/// API 地址协议部分
pub const API_SCHEME: &str = "https://";
/// API 地址路径部分，命令直接拼接在其后
pub const API_PATH: &str = "/httpapi.asp?command=";

const MUTE_ON: &str = "1";
const MUTE_OFF: &str = "0";

/// 设备命令 - 每个变体对应一个设备操作
///
/// 带参数的命令将参数直接拼接在命令前缀之后，不做任何转义和范围检查
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// 获取设备信息
    GetDeviceInfo,
    /// 获取WiFi连接状态
    GetConnectionState,
    /// 获取播放状态
    GetPlayerStatus,
    /// 获取EQ状态
    GetEqStatus,
    /// 获取EQ预设列表
    GetEqList,
    /// 获取关机定时器剩余秒数
    GetShutdown,
    Pause,
    Play,
    /// 播放/暂停切换
    Toggle,
    Previous,
    Next,
    /// 跳转到指定秒数
    Seek(i64),
    Stop,
    /// 设置音量（0-100，此处不做限制）
    SetVolume(i32),
    Mute,
    Unmute,
    SetLoopMode(LoopMode),
    EqOn,
    EqOff,
    /// 加载EQ预设
    LoadEq(String),
    Reboot,
    /// 定时关机：0 立即关机，-1 取消定时
    SetShutdown(i64),
    SetSource(Source),
    /// 播放音频URL（原样拼接，不转义）
    PlayUrl(String),
}

impl Command {
    /// 生成发送给设备的命令字符串
    pub fn token(&self) -> String {
        match self {
            Command::GetDeviceInfo => "getStatusEx".to_string(),
            Command::GetConnectionState => "wlanGetConnectState".to_string(),
            Command::GetPlayerStatus => "getPlayerStatus".to_string(),
            Command::GetEqStatus => "EQGetStat".to_string(),
            Command::GetEqList => "EQGetList".to_string(),
            Command::GetShutdown => "getShutdown".to_string(),
            Command::Pause => "setPlayerCmd:pause".to_string(),
            Command::Play => "setPlayerCmd:play".to_string(),
            Command::Toggle => "setPlayerCmd:onepause".to_string(),
            Command::Previous => "setPlayerCmd:prev".to_string(),
            Command::Next => "setPlayerCmd:next".to_string(),
            Command::Seek(seconds) => format!("setPlayerCmd:seek:{}", seconds),
            Command::Stop => "setPlayerCmd:stop".to_string(),
            Command::SetVolume(volume) => format!("setPlayerCmd:vol:{}", volume),
            Command::Mute => format!("setPlayerCmd:mute:{}", MUTE_ON),
            Command::Unmute => format!("setPlayerCmd:mute:{}", MUTE_OFF),
            Command::SetLoopMode(mode) => format!("setPlayerCmd:loopmode:{}", mode.code()),
            Command::EqOn => "EQOn".to_string(),
            Command::EqOff => "EQOff".to_string(),
            Command::LoadEq(name) => format!("EQLoad:{}", name),
            Command::Reboot => "reboot".to_string(),
            Command::SetShutdown(delay) => format!("setShutdown:{}", delay),
            Command::SetSource(source) => format!("setPlayerCmd:switchmode:{}", source.code()),
            Command::PlayUrl(url) => format!("setPlayerCmd:play:{}", url),
        }
    }

    /// 生成完整请求地址
    pub fn url(&self, host: &str) -> String {
        format!("{}{}{}{}", API_SCHEME, host, API_PATH, self.token())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_tokens() {
        let cases = [
            (Command::GetDeviceInfo, "getStatusEx"),
            (Command::GetConnectionState, "wlanGetConnectState"),
            (Command::GetPlayerStatus, "getPlayerStatus"),
            (Command::GetEqStatus, "EQGetStat"),
            (Command::GetEqList, "EQGetList"),
            (Command::GetShutdown, "getShutdown"),
            (Command::Pause, "setPlayerCmd:pause"),
            (Command::Play, "setPlayerCmd:play"),
            (Command::Toggle, "setPlayerCmd:onepause"),
            (Command::Previous, "setPlayerCmd:prev"),
            (Command::Next, "setPlayerCmd:next"),
            (Command::Stop, "setPlayerCmd:stop"),
            (Command::Mute, "setPlayerCmd:mute:1"),
            (Command::Unmute, "setPlayerCmd:mute:0"),
            (Command::EqOn, "EQOn"),
            (Command::EqOff, "EQOff"),
            (Command::Reboot, "reboot"),
        ];

        for (command, token) in cases {
            assert_eq!(command.token(), token);
        }
    }

    #[test]
    fn volume_is_forwarded_unclamped() {
        for volume in [-10, 0, 50, 100, 150] {
            assert_eq!(
                Command::SetVolume(volume).token(),
                format!("setPlayerCmd:vol:{}", volume)
            );
        }
    }

    #[test]
    fn argument_tokens() {
        assert_eq!(Command::Seek(95).token(), "setPlayerCmd:seek:95");
        assert_eq!(Command::SetShutdown(-1).token(), "setShutdown:-1");
        assert_eq!(Command::SetShutdown(0).token(), "setShutdown:0");
        assert_eq!(
            Command::SetLoopMode(LoopMode::Shuffle).token(),
            "setPlayerCmd:loopmode:3"
        );
        assert_eq!(
            Command::SetSource(Source::LineIn).token(),
            "setPlayerCmd:switchmode:line-in"
        );
        assert_eq!(Command::LoadEq("Rock".to_string()).token(), "EQLoad:Rock");
    }

    #[test]
    fn play_url_is_not_escaped() {
        let command = Command::PlayUrl("https://hd1.wamu.org/wamu-1".to_string());
        assert_eq!(command.token(), "setPlayerCmd:play:https://hd1.wamu.org/wamu-1");
        assert_eq!(
            command.url("10.0.0.5"),
            "https://10.0.0.5/httpapi.asp?command=setPlayerCmd:play:https://hd1.wamu.org/wamu-1"
        );
    }
}

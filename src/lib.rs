pub mod dto;
pub mod error;
pub mod http;
pub mod types;

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
pub use crate::http::WiimDevice;
use crate::types::*;

pub use crate::dto::request::Command;
pub use crate::error::WiimError;

/// 设备控制服务特性 - 定义音频设备命令接口
///
/// 每个方法对应一条设备命令，只发送一次请求（`set_volume_relative`
/// 与元数据方法除外，它们会先查询播放状态）
#[async_trait]
pub trait DeviceService: Sync + Send {
    /// 获取设备信息（固件、网络、硬件等）
    ///
    /// # 返回
    /// * `Result<StatusMap>` - 设备信息键值对或错误
    async fn get_device_information(&self) -> Result<StatusMap>;

    /// 获取WiFi连接状态
    ///
    /// # 返回
    /// * `Result<String>` - PROCESS（连接中）、PAIRFAIL（密码错误）、FAIL（连接失败）或 OK（已连接）
    async fn get_connection_status(&self) -> Result<String>;

    /// 获取播放状态（输入源、曲目信息、进度、音量等）
    ///
    /// # 返回
    /// * `Result<StatusMap>` - 播放状态键值对或错误
    async fn get_playback_status(&self) -> Result<StatusMap>;

    /// 获取EQ状态
    async fn get_eq_status(&self) -> Result<StatusMap>;

    /// 获取EQ预设列表，返回未解析的原始文本
    async fn get_eq_presets(&self) -> Result<String>;

    /// 获取关机定时器剩余时间（秒）
    async fn get_shutdown_timer(&self) -> Result<i64>;

    async fn pause(&self) -> Result<()>;

    async fn play(&self) -> Result<()>;

    /// 播放/暂停切换
    async fn toggle(&self) -> Result<()>;

    /// 上一曲
    async fn previous(&self) -> Result<()>;

    /// 下一曲
    async fn next(&self) -> Result<()>;

    /// 跳转播放位置
    ///
    /// # 参数
    /// * `seconds` - 目标位置（秒）
    async fn seek(&self, seconds: i64) -> Result<()>;

    async fn stop(&self) -> Result<()>;

    /// 设置音量
    ///
    /// # 参数
    /// * `volume` - 音量，0 到 100；超出范围的值原样发送给设备
    async fn set_volume(&self, volume: i32) -> Result<()>;

    async fn mute(&self) -> Result<()>;

    async fn unmute(&self) -> Result<()>;

    /// 设置循环/随机播放模式
    async fn set_loop_mode(&self, mode: LoopMode) -> Result<()>;

    async fn enable_eq(&self) -> Result<()>;

    async fn disable_eq(&self) -> Result<()>;

    /// 加载EQ预设
    ///
    /// # 参数
    /// * `preset` - 预设名称
    async fn load_eq(&self, preset: &str) -> Result<()>;

    async fn reboot(&self) -> Result<()>;

    /// 定时关机
    ///
    /// # 参数
    /// * `delay` - 延迟秒数；0 立即关机，-1 取消已有定时
    async fn schedule_shutdown(&self, delay: i64) -> Result<()>;

    /// 切换输入源
    async fn set_source(&self, source: Source) -> Result<()>;

    /// 播放音频URL
    ///
    /// # 参数
    /// * `url` - 音频地址，原样拼接到命令中，不做转义
    async fn play_audio_url(&self, url: &str) -> Result<()>;

    /// 在当前音量基础上调整音量，结果限制在 0 到 100
    ///
    /// 先查询播放状态再设置音量，两次请求之间不加锁，
    /// 并发调用或外部修改音量时结果可能互相覆盖
    ///
    /// # 参数
    /// * `offset` - 音量偏移量（可为负）
    async fn set_volume_relative(&self, offset: i32) -> Result<()>;

    /// 获取当前曲目名
    async fn get_track(&self) -> Result<String>;

    /// 获取当前专辑名
    async fn get_album(&self) -> Result<String>;

    /// 获取当前艺术家
    async fn get_artist(&self) -> Result<String>;

    /// 获取当前播放模式
    async fn get_playback_mode(&self) -> Result<PlaybackMode>;

    /// 释放客户端自行创建的会话
    async fn close(&self);
}

/// 创建设备控制服务实例
///
/// # 参数
/// * `config` - 客户端配置
/// * `session` - 可选的共享 HTTP 会话；为 None 时由客户端自行创建并在 `close` 时释放
///
/// # 返回
/// * `Arc<dyn DeviceService>` - 设备控制服务实例
pub fn create_device_service(
    config: ClientConfig,
    session: Option<reqwest::Client>,
) -> Arc<dyn DeviceService> {
    Arc::new(WiimDevice::from_config(config, session))
}

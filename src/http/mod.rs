pub mod client;

use async_trait::async_trait;
use log::debug;

use crate::DeviceService;
use crate::dto::request::Command;
use crate::dto::response::{
    FIELD_ALBUM, FIELD_ARTIST, FIELD_TITLE, decode_hex_field, offset_volume, playback_mode,
};
use crate::error::Result;
use crate::types::*;

use client::HttpClient;

/// 通过 HTTP 命令接口控制的设备
pub struct WiimDevice {
    client: HttpClient,
}

impl WiimDevice {
    /// 创建设备客户端，首次请求时自行创建 HTTP 会话
    pub fn new(host: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(host), None)
    }

    /// 使用调用方提供的 HTTP 会话创建设备客户端
    pub fn with_session(host: impl Into<String>, session: reqwest::Client) -> Self {
        Self::from_config(ClientConfig::new(host), Some(session))
    }

    pub fn from_config(config: ClientConfig, session: Option<reqwest::Client>) -> Self {
        Self {
            client: HttpClient::new(config, session),
        }
    }

    /// 设备地址
    pub fn host(&self) -> &str {
        self.client.host()
    }

    pub fn has_session(&self) -> bool {
        self.client.has_session()
    }

    pub fn owns_session(&self) -> bool {
        self.client.owns_session()
    }
}

#[async_trait]
impl DeviceService for WiimDevice {
    async fn get_device_information(&self) -> Result<StatusMap> {
        self.client.query_status(Command::GetDeviceInfo).await
    }

    async fn get_connection_status(&self) -> Result<String> {
        self.client.query_text(Command::GetConnectionState).await
    }

    async fn get_playback_status(&self) -> Result<StatusMap> {
        self.client.query_status(Command::GetPlayerStatus).await
    }

    async fn get_eq_status(&self) -> Result<StatusMap> {
        self.client.query_status(Command::GetEqStatus).await
    }

    // TODO: 解析 EQGetList 的返回格式，目前尚未确认设备返回的结构
    async fn get_eq_presets(&self) -> Result<String> {
        self.client.query_text(Command::GetEqList).await
    }

    async fn get_shutdown_timer(&self) -> Result<i64> {
        self.client.query_shutdown_timer().await
    }

    async fn pause(&self) -> Result<()> {
        self.client.send_command(Command::Pause).await
    }

    async fn play(&self) -> Result<()> {
        self.client.send_command(Command::Play).await
    }

    async fn toggle(&self) -> Result<()> {
        self.client.send_command(Command::Toggle).await
    }

    async fn previous(&self) -> Result<()> {
        self.client.send_command(Command::Previous).await
    }

    async fn next(&self) -> Result<()> {
        self.client.send_command(Command::Next).await
    }

    async fn seek(&self, seconds: i64) -> Result<()> {
        self.client.send_command(Command::Seek(seconds)).await
    }

    async fn stop(&self) -> Result<()> {
        self.client.send_command(Command::Stop).await
    }

    async fn set_volume(&self, volume: i32) -> Result<()> {
        self.client.send_command(Command::SetVolume(volume)).await
    }

    async fn mute(&self) -> Result<()> {
        self.client.send_command(Command::Mute).await
    }

    async fn unmute(&self) -> Result<()> {
        self.client.send_command(Command::Unmute).await
    }

    async fn set_loop_mode(&self, mode: LoopMode) -> Result<()> {
        self.client.send_command(Command::SetLoopMode(mode)).await
    }

    async fn enable_eq(&self) -> Result<()> {
        self.client.send_command(Command::EqOn).await
    }

    async fn disable_eq(&self) -> Result<()> {
        self.client.send_command(Command::EqOff).await
    }

    async fn load_eq(&self, preset: &str) -> Result<()> {
        self.client
            .send_command(Command::LoadEq(preset.to_string()))
            .await
    }

    async fn reboot(&self) -> Result<()> {
        self.client.send_command(Command::Reboot).await
    }

    async fn schedule_shutdown(&self, delay: i64) -> Result<()> {
        self.client.send_command(Command::SetShutdown(delay)).await
    }

    async fn set_source(&self, source: Source) -> Result<()> {
        self.client.send_command(Command::SetSource(source)).await
    }

    async fn play_audio_url(&self, url: &str) -> Result<()> {
        self.client
            .send_command(Command::PlayUrl(url.to_string()))
            .await
    }

    async fn set_volume_relative(&self, offset: i32) -> Result<()> {
        let status = self.get_playback_status().await?;
        let volume = offset_volume(&status, offset)?;
        debug!("相对调整音量: 偏移 {} -> {}", offset, volume);

        self.set_volume(volume).await
    }

    async fn get_track(&self) -> Result<String> {
        let status = self.get_playback_status().await?;
        decode_hex_field(&status, FIELD_TITLE)
    }

    async fn get_album(&self) -> Result<String> {
        let status = self.get_playback_status().await?;
        decode_hex_field(&status, FIELD_ALBUM)
    }

    async fn get_artist(&self) -> Result<String> {
        let status = self.get_playback_status().await?;
        decode_hex_field(&status, FIELD_ARTIST)
    }

    async fn get_playback_mode(&self) -> Result<PlaybackMode> {
        let status = self.get_playback_status().await?;
        playback_mode(&status)
    }

    async fn close(&self) {
        self.client.close().await;
    }
}

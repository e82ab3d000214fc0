use crate::dto::request::Command;
use crate::error::Result;
use crate::http::client::HttpClient;

impl HttpClient {
    /// 发送控制命令，等待设备返回200后丢弃响应内容
    pub async fn send_command(&self, command: Command) -> Result<()> {
        self.execute(&command).await?;
        Ok(())
    }
}

use crate::dto::request::Command;
use crate::dto::response::{parse_shutdown_timer, parse_status_map};
use crate::error::Result;
use crate::http::client::HttpClient;
use crate::types::StatusMap;

impl HttpClient {
    /// 查询命令，返回原始文本
    pub async fn query_text(&self, command: Command) -> Result<String> {
        self.execute(&command).await
    }

    /// 查询命令，响应解析为 JSON 对象
    pub async fn query_status(&self, command: Command) -> Result<StatusMap> {
        let body = self.execute(&command).await?;
        parse_status_map(&body)
    }

    /// 查询关机定时器剩余秒数
    pub async fn query_shutdown_timer(&self) -> Result<i64> {
        let body = self.execute(&Command::GetShutdown).await?;
        parse_shutdown_timer(&body)
    }
}

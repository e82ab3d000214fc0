use serde_json::{Map, Value};

use crate::error::{Result, WiimError};
use crate::types::{PlaybackMode, StatusMap};

/// 播放状态中的音量字段
pub const FIELD_VOLUME: &str = "vol";
/// 播放状态中的播放模式字段
pub const FIELD_MODE: &str = "mode";
/// 曲目名（十六进制编码）
pub const FIELD_TITLE: &str = "Title";
/// 专辑名（十六进制编码）
pub const FIELD_ALBUM: &str = "Album";
/// 艺术家（十六进制编码）
pub const FIELD_ARTIST: &str = "Artist";

/// 将设备返回的 JSON 对象解析为键值对
///
/// 字符串值原样保留，其他类型的值保存为其 JSON 文本
pub fn parse_status_map(body: &str) -> Result<StatusMap> {
    let object: Map<String, Value> = serde_json::from_str(body)?;

    Ok(object
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => (key, s),
            other => (key, other.to_string()),
        })
        .collect())
}

/// 解析关机定时器剩余秒数
pub fn parse_shutdown_timer(body: &str) -> Result<i64> {
    Ok(body.trim().parse::<i64>()?)
}

/// 读取指定字段，不存在时返回 MissingField
pub fn field<'a>(status: &'a StatusMap, key: &str) -> Result<&'a str> {
    status
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| WiimError::MissingField(key.to_string()))
}

/// 解码十六进制编码的元数据字段（曲目名、专辑名、艺术家）
pub fn decode_hex_field(status: &StatusMap, key: &str) -> Result<String> {
    let bytes = hex::decode(field(status, key)?)?;
    Ok(String::from_utf8(bytes)?)
}

/// 在当前音量基础上偏移，结果限制在 0..=100
pub fn offset_volume(status: &StatusMap, offset: i32) -> Result<i32> {
    let current = field(status, FIELD_VOLUME)?.trim().parse::<i32>()?;
    Ok(current.saturating_add(offset).clamp(0, 100))
}

pub fn playback_mode(status: &StatusMap) -> Result<PlaybackMode> {
    Ok(PlaybackMode::from_code(field(status, FIELD_MODE)?))
}

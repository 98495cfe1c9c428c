use serde::Deserialize;

use crate::domain::{SendResult, StatusCode};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendResultJson {
    result: bool,
    status_code: i32,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    info: serde_json::Value,
}

pub fn decode_send_result_json(json: &str) -> Result<SendResult, serde_json::Error> {
    let parsed: SendResultJson = serde_json::from_str(json)?;
    Ok(SendResult {
        result: parsed.result,
        status_code: StatusCode::new(parsed.status_code),
        message: parsed.message.unwrap_or_default(),
        info: parsed.info,
    })
}

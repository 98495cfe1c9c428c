use crate::domain::value::StatusCode;

#[derive(Debug, Clone, PartialEq)]
/// Outcome reported by SendCloud for a send call.
pub struct SendResult {
    pub result: bool,
    pub status_code: StatusCode,
    pub message: String,
    /// Endpoint-specific payload, kept as raw JSON.
    pub info: serde_json::Value,
}

impl SendResult {
    pub fn is_success(&self) -> bool {
        self.result
    }
}

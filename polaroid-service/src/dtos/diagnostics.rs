use serde::{Deserialize, Serialize};

pub const SET: &str = "✅ Set";
pub const NOT_SET: &str = "❌ Not Set";

/// Longest store error excerpt echoed by the diagnostic endpoint.
pub const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DiagnosticsResponse {
    fn default() -> Self {
        Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: NOT_SET.to_string(),
            database_name: NOT_SET.to_string(),
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}

pub fn presence(is_set: bool) -> String {
    let label = if is_set { SET } else { NOT_SET };
    label.to_string()
}

pub fn truncate_error(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundaries() {
        let long = "é".repeat(80);
        let short = truncate_error(&long);
        assert_eq!(short.chars().count(), MAX_ERROR_CHARS);
        assert_eq!(truncate_error("timeout"), "timeout");
    }

    #[test]
    fn presence_never_echoes_values() {
        assert_eq!(presence(true), SET);
        assert_eq!(presence(false), NOT_SET);
    }
}

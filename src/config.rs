use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

// Default endpoints: a chat server running on the local machine.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TRANSPORT_URL: &str = "ws://127.0.0.1:5000/socket";

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Settings {
    /// HTTP base for message submission.
    pub server_url: String,
    /// WebSocket URL of the live message channel.
    pub transport_url: String,
    pub theme: String,
    /// Previously submitted input lines, for arrow-key recall.
    #[serde(default)]
    pub history: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            transport_url: DEFAULT_TRANSPORT_URL.to_string(),
            theme: "dark".to_string(),
            history: Vec::new(),
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "papo", "papo-client") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            log::warn!("failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings).expect("settings serialize");
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
        assert_eq!(settings.transport_url, DEFAULT_TRANSPORT_URL);
        assert_eq!(settings.theme, "dark");
        assert!(settings.history.is_empty());
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = Settings {
            server_url: "http://chat.example:8080".into(),
            transport_url: "ws://chat.example:8080/socket".into(),
            theme: "light".into(),
            history: vec!["hello".into()],
        };
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.server_url, settings.server_url);
        assert_eq!(parsed.history, settings.history);
    }

    #[test]
    fn test_history_field_is_optional() {
        let parsed: Settings = serde_json::from_str(
            r#"{"server_url":"http://x","transport_url":"ws://x","theme":"dark"}"#,
        )
        .unwrap();
        assert!(parsed.history.is_empty());
    }
}

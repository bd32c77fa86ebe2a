use anyhow::{ Context, Result };
use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Node HTTP endpoints; the first entry is used.
    pub node_urls: Vec<String>,
    #[serde(default)]
    pub trade_privkey: String,
    pub mm_contract: String,
    #[serde(default = "default_trade_action")]
    pub trade_action: String,
    pub fee_payer: String,
    pub bot_group_contract: String,
    #[serde(default = "default_trade_permission")]
    pub trade_permission: String,
    pub pairs: Vec<String>,
    pub min_interval_seconds: u64,
    pub max_interval_seconds: u64,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_trade_action() -> String {
    "exectrade".to_string()
}

fn default_trade_permission() -> String {
    "trade".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_urls: vec!["http://127.0.0.1:8888".to_string()],
            trade_privkey: String::new(),
            mm_contract: "tokenx.mm".to_string(),
            trade_action: default_trade_action(),
            fee_payer: "tokenx.mm".to_string(),
            bot_group_contract: "tokenx.mm".to_string(),
            trade_permission: default_trade_permission(),
            pairs: vec![],
            min_interval_seconds: 30,
            max_interval_seconds: 120,
            verbose: false,
            log_dir: default_log_dir(),
        }
    }
}

impl Config {
    /// Load config from a JSON file, writing a default template if the file
    /// does not exist yet. Presence of pairs and the signing key is checked
    /// at service start, not here.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            let default_config = Self::default();
            default_config.save(path)?;
            return Ok(default_config);
        }

        let content = fs
            ::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = serde_json
            ::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = serde_json
            ::to_string_pretty(self)
            .with_context(|| "Failed to serialize config")?;

        fs::write(path, content).with_context(|| format!("Failed to write config file: {}", path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_creates_default_template_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let path_str = path.to_str().unwrap();

        let config = Config::load(path_str).unwrap();
        assert!(path.exists());
        assert_eq!(config.trade_action, "exectrade");
        assert_eq!(config.trade_permission, "trade");
        assert!(config.pairs.is_empty());

        // Reloading parses the written template back unchanged
        let reloaded = Config::load(path_str).unwrap();
        assert_eq!(reloaded.mm_contract, config.mm_contract);
        assert_eq!(reloaded.min_interval_seconds, config.min_interval_seconds);
    }

    #[test]
    fn optional_fields_take_defaults() {
        let raw = r#"{
            "node_urls": ["http://node.example:8888"],
            "mm_contract": "tokenx.mm",
            "fee_payer": "mm.admin",
            "bot_group_contract": "tokenx.mm",
            "pairs": ["flon.usdt"],
            "min_interval_seconds": 5,
            "max_interval_seconds": 10
        }"#;
        let config: Config = serde_json::from_str(raw).unwrap();
        assert_eq!(config.trade_action, "exectrade");
        assert_eq!(config.trade_permission, "trade");
        assert_eq!(config.log_dir, "logs");
        assert!(config.trade_privkey.is_empty());
        assert!(!config.verbose);
    }
}

use crate::error::{StoryboardError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIキーを探す環境変数（優先順）
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    /// 解析用（Vision）モデル
    pub vision_model: String,
    /// ストーリーボード画像生成モデル
    pub image_model: String,
    pub base_url: String,
    /// 送信前に縮小する長辺の上限(px)
    pub max_image_size: u32,
    /// 未設定ならHTTPクライアントの既定値に任せる
    pub timeout_seconds: Option<u64>,
    pub aspect_ratio: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            vision_model: "gemini-3-flash-preview".into(),
            image_model: "gemini-2.5-flash-image".into(),
            base_url: DEFAULT_BASE_URL.into(),
            max_image_size: 3072,
            timeout_seconds: None,
            aspect_ratio: "1:1".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| StoryboardError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("storyboard-ai").join("config.json"))
    }

    /// APIキーを取得（環境変数を優先）
    pub fn get_api_key(&self) -> Result<String> {
        self.api_key_with(|name| std::env::var(name).ok())
    }

    /// 環境変数の参照方法を差し替え可能な版
    pub fn api_key_with<F>(&self, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .chain(self.api_key.clone())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
            .ok_or(StoryboardError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_models() {
        let config = Config::default();
        assert_eq!(config.vision_model, "gemini-3-flash-preview");
        assert_eq!(config.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.aspect_ratio, "1:1");
        assert!(config.timeout_seconds.is_none());
    }

    #[test]
    fn test_missing_api_key() {
        let config = Config::default();
        let err = config.api_key_with(no_env).unwrap_err();
        assert!(matches!(err, StoryboardError::MissingApiKey));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_api_key_from_config() {
        let config = Config {
            api_key: Some("from-file".into()),
            ..Default::default()
        };
        assert_eq!(config.api_key_with(no_env).unwrap(), "from-file");
    }

    #[test]
    fn test_env_takes_priority() {
        let config = Config {
            api_key: Some("from-file".into()),
            ..Default::default()
        };
        let key = config
            .api_key_with(|name| (name == "API_KEY").then(|| "from-env".to_string()))
            .unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn test_gemini_env_before_generic_env() {
        let config = Config::default();
        let key = config
            .api_key_with(|name| Some(format!("{}-value", name)))
            .unwrap();
        assert_eq!(key, "GEMINI_API_KEY-value");
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = Config {
            api_key: Some("   ".into()),
            ..Default::default()
        };
        let err = config.api_key_with(|_| Some(String::new())).unwrap_err();
        assert!(matches!(err, StoryboardError::MissingApiKey));
    }

    #[test]
    fn test_save_and_load_roundtrip_partial_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        // 一部のキーだけのファイルでも既定値で補完される
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"image_model": "custom-image"}"#).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.image_model, "custom-image");
        assert_eq!(loaded.vision_model, "gemini-3-flash-preview");

        let config = Config {
            timeout_seconds: Some(30),
            ..loaded
        };
        config.save_to(&path).unwrap();
        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.timeout_seconds, Some(30));
        assert_eq!(reloaded.image_model, "custom-image");
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}

use crate::error::{Result, TableOrderError};
use serde::{Deserialize, Serialize};

/// クライアント設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// QRもストレージもない場合のモックセッション用
    pub fallback_business_id: String,
    pub fallback_table_id: String,
    /// 注文確定までの擬似待ち時間
    pub order_delay_ms: u32,
    /// 注文状況表示までの擬似待ち時間
    pub tracking_delay_ms: u32,
    pub currency_symbol: String,
    /// 生成するセッショントークンの長さ
    pub token_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fallback_business_id: "1".into(),
            fallback_table_id: "1".into(),
            order_delay_ms: 1500,
            tracking_delay_ms: 1000,
            currency_symbol: "¥".into(),
            token_length: 9,
        }
    }
}

impl AppConfig {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 読み込みに失敗したらデフォルト設定
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("設定の読み込みに失敗、デフォルトを使用します: {}", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.fallback_business_id.is_empty() || self.fallback_table_id.is_empty() {
            return Err(TableOrderError::Config(
                "fallbackBusinessId / fallbackTableId は空にできません".into(),
            ));
        }
        if self.fallback_business_id.contains('_') || self.fallback_table_id.contains('_') {
            return Err(TableOrderError::Config(
                "fallbackBusinessId / fallbackTableId に '_' は使えません".into(),
            ));
        }
        if self.token_length == 0 || self.token_length > 32 {
            return Err(TableOrderError::Config(format!(
                "tokenLength は 1〜32 の範囲で指定してください: {}",
                self.token_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.fallback_table_id, "1");
        assert_eq!(config.order_delay_ms, 1500);
        assert_eq!(config.token_length, 9);
    }

    #[test]
    fn test_from_json_partial() {
        let config = AppConfig::from_json(r#"{"fallbackTableId": "7", "orderDelayMs": 500}"#)
            .expect("設定の読み込み失敗");
        assert_eq!(config.fallback_table_id, "7");
        assert_eq!(config.order_delay_ms, 500);
        // 未指定はデフォルト値
        assert_eq!(config.tracking_delay_ms, 1000);
        assert_eq!(config.currency_symbol, "¥");
    }

    #[test]
    fn test_from_json_invalid() {
        let err = AppConfig::from_json("{").unwrap_err();
        assert!(matches!(err, TableOrderError::JsonParse(_)));

        let err = AppConfig::from_json(r#"{"tokenLength": 0}"#).unwrap_err();
        assert!(matches!(err, TableOrderError::Config(_)));

        let err = AppConfig::from_json(r#"{"fallbackTableId": "a_b"}"#).unwrap_err();
        assert!(matches!(err, TableOrderError::Config(_)));
    }

    #[test]
    fn test_from_json_or_default() {
        let config = AppConfig::from_json_or_default("not json");
        assert_eq!(config, AppConfig::default());
    }
}

//! # Product Service 設定
//!
//! 環境変数から Product Service サーバーの設定を読み込む。

use std::env;

use thiserror::Error;

/// デフォルトのバインドアドレス
const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
const DEFAULT_PORT: u16 = 8000;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PRODUCT_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidPort(String),
}

/// Product Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductServiceConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl ProductServiceConfig {
    /// 環境変数から設定を読み込む
    ///
    /// | 変数名 | デフォルト |
    /// |--------|-----------|
    /// | `PRODUCT_HOST` | `0.0.0.0` |
    /// | `PRODUCT_PORT` | `8000` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を読み込む
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("PRODUCT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PRODUCT_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// `host:port` 形式のアドレス
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_未設定ならデフォルト値を使う() {
        let config = ProductServiceConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(
            config,
            ProductServiceConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            }
        );
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_環境変数の値を使う() {
        let config = ProductServiceConfig::from_lookup(lookup_from(&[
            ("PRODUCT_HOST", "127.0.0.1"),
            ("PRODUCT_PORT", "3100"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:3100");
    }

    #[test]
    fn test_不正なポート番号はエラー() {
        let result = ProductServiceConfig::from_lookup(lookup_from(&[("PRODUCT_PORT", "abc")]));

        assert_eq!(result, Err(ConfigError::InvalidPort("abc".to_string())));
    }
}

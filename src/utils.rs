use crate::config::CheckoutConfig;
use crate::errors::CheckoutError;
use rand::Rng;
use std::fs;
use std::path::Path;
use time::OffsetDateTime;
use tracing::debug;

pub fn gen_nonce(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let n = rng.gen_range(0..36);
            std::char::from_digit(n as u32, 36).unwrap()
        })
        .collect()
}
pub fn now_ts() -> String {
    OffsetDateTime::now_utc().unix_timestamp().to_string()
}

/// 从 JSON 文件加载配置
pub fn load_config(path: impl AsRef<Path>) -> Result<CheckoutConfig, CheckoutError> {
    debug!("config path: {}", path.as_ref().display());
    let data = fs::read_to_string(path.as_ref())?;
    let cfg: CheckoutConfig = serde_json::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonce_has_requested_length_and_charset() {
        let n = gen_nonce(32);
        assert_eq!(n.len(), 32);
        assert!(n.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn timestamp_parses_as_seconds() {
        let ts: i64 = now_ts().parse().unwrap();
        assert!(ts > 1_600_000_000);
    }

    #[test]
    fn load_config_reads_json_file() {
        let path = std::env::temp_dir().join("rust_checkout_wf_cfg_ok.json");
        fs::write(
            &path,
            r#"{ "environment": "live", "wechat": { "app_id": "wx_app_appid" } }"#,
        )
        .unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.environment, crate::config::Environment::Live);
        assert_eq!(cfg.wechat.unwrap().app_id, "wx_app_appid");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let err = load_config("/nonexistent/checkout.json").unwrap_err();
        assert!(matches!(err, CheckoutError::Io(_)));
    }

    #[test]
    fn load_config_malformed_json_is_json_error() {
        let path = std::env::temp_dir().join("rust_checkout_wf_cfg_bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, CheckoutError::Json(_)));
        let _ = fs::remove_file(&path);
    }
}

use crate::config::WechatPayConfig;
use crate::errors::CheckoutError;
use crate::method::{PaymentMethod, TYPE_WECHAT_PAY_SDK};
use crate::utils::{gen_nonce, now_ts};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// 微信支付组件：注册表持有，生命周期跟随所在作用域
#[derive(Debug)]
pub struct WechatPayComponent {
    method: PaymentMethod,
    cfg: Arc<WechatPayConfig>,
}

impl WechatPayComponent {
    /// factory 入口：method/config 无法绑定到本组件类型时报 Configuration
    pub(crate) fn bind(
        method: PaymentMethod,
        cfg: Arc<WechatPayConfig>,
    ) -> Result<Self, CheckoutError> {
        if let Some(t) = method.method_type.as_deref() {
            if t != TYPE_WECHAT_PAY_SDK {
                return Err(CheckoutError::Configuration(format!(
                    "payment method type {} cannot bind to WechatPayComponent",
                    t
                )));
            }
        }
        if cfg.app_id.is_empty() {
            return Err(CheckoutError::Configuration(
                "wechat config app_id empty".to_string(),
            ));
        }
        Ok(Self { method, cfg })
    }

    pub fn payment_method(&self) -> &PaymentMethod {
        &self.method
    }

    pub fn config(&self) -> &Arc<WechatPayConfig> {
        &self.cfg
    }

    /// 微信支付跳转外部 App 完成，组件本身不渲染视图
    pub fn requires_view(&self) -> bool {
        false
    }

    /// 把后端下发的 sdkData 组装成 OpenSDK PayReq 载荷，
    /// noncestr/timestamp 缺失时本地补齐
    pub fn build_pay_request(&self, sdk_data: &Value) -> Result<Value, CheckoutError> {
        let required = |key: &str| -> Result<&str, CheckoutError> {
            sdk_data
                .get(key)
                .and_then(|v| v.as_str())
                .ok_or_else(|| CheckoutError::Configuration(format!("sdkData missing {}", key)))
        };
        let appid = required("appid")?;
        if appid != self.cfg.app_id {
            return Err(CheckoutError::Configuration(format!(
                "sdkData appid {} does not match configured app_id",
                appid
            )));
        }
        let partnerid = required("partnerid")?;
        let prepayid = required("prepayid")?;
        let sign = required("sign")?;
        let noncestr = sdk_data
            .get("noncestr")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| gen_nonce(32));
        let timestamp = sdk_data
            .get("timestamp")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(now_ts);
        let package_value = sdk_data
            .get("packageValue")
            .and_then(|v| v.as_str())
            .unwrap_or("Sign=WXPay");
        debug!("build pay request: prepayid={}", prepayid);
        Ok(json!({
            "appid": appid,
            "partnerid": partnerid,
            "prepayid": prepayid,
            "packageValue": package_value,
            "noncestr": noncestr,
            "timestamp": timestamp,
            "sign": sign,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    fn cfg() -> Arc<WechatPayConfig> {
        Arc::new(WechatPayConfig {
            app_id: "wx_app_appid".to_string(),
            environment: Environment::Test,
            min_api_level: None,
        })
    }

    #[test]
    fn binds_typed_and_untyped_methods() {
        assert!(WechatPayComponent::bind(PaymentMethod::of_type(TYPE_WECHAT_PAY_SDK), cfg()).is_ok());
        assert!(WechatPayComponent::bind(PaymentMethod::default(), cfg()).is_ok());
    }

    #[test]
    fn rejects_foreign_method_type() {
        let err = WechatPayComponent::bind(PaymentMethod::of_type("scheme"), cfg()).unwrap_err();
        assert!(matches!(err, CheckoutError::Configuration(_)));
    }

    #[test]
    fn rejects_empty_app_id() {
        let bad = Arc::new(WechatPayConfig {
            app_id: String::new(),
            environment: Environment::Test,
            min_api_level: None,
        });
        let err = WechatPayComponent::bind(PaymentMethod::default(), bad).unwrap_err();
        assert!(matches!(err, CheckoutError::Configuration(_)));
    }

    #[test]
    fn builds_pay_request_from_full_sdk_data() {
        let component =
            WechatPayComponent::bind(PaymentMethod::of_type(TYPE_WECHAT_PAY_SDK), cfg()).unwrap();
        let sdk_data = json!({
            "appid": "wx_app_appid",
            "partnerid": "1900000109",
            "prepayid": "wx201410272009395522657a690389285100",
            "packageValue": "Sign=WXPay",
            "noncestr": "1add1a30ac87aa2db72f57a2375d8fec",
            "timestamp": "1414561699",
            "sign": "0CB01533B8C1EF103065174F50BCA001",
        });
        let req = component.build_pay_request(&sdk_data).unwrap();
        assert_eq!(req["appid"], "wx_app_appid");
        assert_eq!(req["noncestr"], "1add1a30ac87aa2db72f57a2375d8fec");
        assert_eq!(req["timestamp"], "1414561699");
        assert_eq!(req["packageValue"], "Sign=WXPay");
    }

    #[test]
    fn fills_noncestr_and_timestamp_when_absent() {
        let component = WechatPayComponent::bind(PaymentMethod::default(), cfg()).unwrap();
        let sdk_data = json!({
            "appid": "wx_app_appid",
            "partnerid": "1900000109",
            "prepayid": "wx20141027",
            "sign": "ABC",
        });
        let req = component.build_pay_request(&sdk_data).unwrap();
        assert_eq!(req["noncestr"].as_str().unwrap().len(), 32);
        let ts: i64 = req["timestamp"].as_str().unwrap().parse().unwrap();
        assert!(ts > 0);
        assert_eq!(req["packageValue"], "Sign=WXPay");
    }

    #[test]
    fn missing_prepayid_fails() {
        let component = WechatPayComponent::bind(PaymentMethod::default(), cfg()).unwrap();
        let sdk_data = json!({ "appid": "wx_app_appid", "partnerid": "p", "sign": "s" });
        let err = component.build_pay_request(&sdk_data).unwrap_err();
        match err {
            CheckoutError::Configuration(msg) => assert!(msg.contains("prepayid")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn mismatched_appid_fails() {
        let component = WechatPayComponent::bind(PaymentMethod::default(), cfg()).unwrap();
        let sdk_data = json!({
            "appid": "wx_other",
            "partnerid": "p",
            "prepayid": "pp",
            "sign": "s",
        });
        assert!(component.build_pay_request(&sdk_data).is_err());
    }
}

use crate::config::CheckoutConfig;
use crate::errors::CheckoutError;
use crate::method::{PaymentMethod, PaymentMethodsResponse, TYPE_WECHAT_PAY_SDK};
use crate::provider::{AppContext, PaymentComponentProvider};
use crate::registry::ComponentRegistry;
use crate::wechat::provider::WechatPayProvider;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::debug;

static CONFIG: OnceCell<Arc<CheckoutConfig>> = OnceCell::new();
static REGISTRY: OnceCell<Arc<ComponentRegistry>> = OnceCell::new();

pub struct Checkout;

impl Checkout {
    pub fn config(cfg: CheckoutConfig) {
        let _ = CONFIG.set(Arc::new(cfg));
    }

    fn cfg() -> Result<Arc<CheckoutConfig>, CheckoutError> {
        CONFIG
            .get()
            .cloned()
            .ok_or_else(|| CheckoutError::Configuration("checkout config not initialized".to_string()))
    }

    /// 全局组件注册表，所有 Provider 共用
    pub fn registry() -> Arc<ComponentRegistry> {
        REGISTRY
            .get_or_init(|| Arc::new(ComponentRegistry::new()))
            .clone()
    }

    pub fn wechat() -> Result<WechatPayProvider, CheckoutError> {
        let cfg = Self::cfg()?;
        let wx = cfg
            .wechat
            .clone()
            .ok_or_else(|| CheckoutError::Configuration("wechat config missing".to_string()))?;
        Ok(WechatPayProvider::new(Self::registry(), wx))
    }

    /// 过滤后端返回的支付方式列表，只留当前设备可用的
    pub fn available_methods(
        ctx: &AppContext,
        response: &PaymentMethodsResponse,
    ) -> Vec<PaymentMethod> {
        let mut usable = Vec::new();
        for method in &response.payment_methods {
            if method.is_type(TYPE_WECHAT_PAY_SDK) {
                let provider = match Self::wechat() {
                    Ok(p) => p,
                    Err(e) => {
                        debug!("skip {}: {}", TYPE_WECHAT_PAY_SDK, e);
                        continue;
                    }
                };
                let cfg = provider.config().clone();
                provider.is_available(ctx, method, &cfg, |res| {
                    if res.available {
                        usable.push(res.method.clone());
                    }
                });
            }
        }
        debug!(
            "available methods: {}/{}",
            usable.len(),
            response.payment_methods.len()
        );
        usable
    }
}

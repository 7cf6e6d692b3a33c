use crate::config::WechatPayConfig;
use crate::errors::CheckoutError;
use crate::method::PaymentMethod;
use crate::provider::{AppContext, AvailabilityResult, PaymentComponentProvider};
use crate::registry::{ComponentRegistry, ComponentScope};
use crate::wechat::component::WechatPayComponent;
use crate::wechat::utils::{is_available_with_min, PAY_SUPPORTED_API_LEVEL};
use std::sync::Arc;
use tracing::debug;

pub struct WechatPayProvider {
    registry: Arc<ComponentRegistry>,
    cfg: Arc<WechatPayConfig>,
}

impl WechatPayProvider {
    pub fn new(registry: Arc<ComponentRegistry>, cfg: Arc<WechatPayConfig>) -> Self {
        Self { registry, cfg }
    }

    /// Checkout 配置里的微信段，调用方没有自备 config 时直接用它
    pub fn config(&self) -> &Arc<WechatPayConfig> {
        &self.cfg
    }
}

impl PaymentComponentProvider for WechatPayProvider {
    type Component = WechatPayComponent;
    type Configuration = WechatPayConfig;

    fn get(
        &self,
        scope: &ComponentScope,
        method: PaymentMethod,
        config: Arc<WechatPayConfig>,
    ) -> Result<Arc<WechatPayComponent>, CheckoutError> {
        // scope 校验在前：挂空的子容器直接拒绝，不进注册表
        let scope_id = scope.validate()?;
        debug!("wechat get: scope={}", scope_id);
        self.registry
            .get_or_create(scope_id, || WechatPayComponent::bind(method, config))
    }

    fn is_available<F>(
        &self,
        ctx: &AppContext,
        method: &PaymentMethod,
        config: &Arc<WechatPayConfig>,
        callback: F,
    ) where
        F: FnOnce(AvailabilityResult<'_, WechatPayConfig>),
    {
        let min = config.min_api_level.unwrap_or(PAY_SUPPORTED_API_LEVEL);
        let available = is_available_with_min(ctx, min);
        debug!("wechat is_available: {}", available);
        callback(AvailabilityResult {
            available,
            method,
            config,
        });
    }
}

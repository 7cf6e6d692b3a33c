use crate::errors::CheckoutError;
use crate::method::PaymentMethod;
use crate::registry::ComponentScope;
use std::sync::Arc;

/// 宿主应用运行环境描述（设备能力检测的输入）
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    pub wechat: Option<WechatRuntime>,
}

/// 微信 OpenSDK 在当前设备上报的状态
#[derive(Clone, Debug)]
pub struct WechatRuntime {
    pub installed: bool,
    pub api_level: u32,
}

/// 一次可用性检测的结果，连同调用方传入的 (method, config) 原样回传
pub struct AvailabilityResult<'a, C> {
    pub available: bool,
    pub method: &'a PaymentMethod,
    pub config: &'a Arc<C>,
}

/// 支付组件 Provider 契约：按作用域装配组件 + 设备可用性检测
pub trait PaymentComponentProvider {
    type Component;
    type Configuration;

    /// 同一 scope 重复调用返回同一实例；scope 非法或 factory 失败时显式报错，
    /// 永远不会返回空组件
    fn get(
        &self,
        scope: &ComponentScope,
        method: PaymentMethod,
        config: Arc<Self::Configuration>,
    ) -> Result<Arc<Self::Component>, CheckoutError>;

    /// 同步检测，callback 在返回前恰好执行一次
    fn is_available<F>(
        &self,
        ctx: &AppContext,
        method: &PaymentMethod,
        config: &Arc<Self::Configuration>,
        callback: F,
    ) where
        F: FnOnce(AvailabilityResult<'_, Self::Configuration>);
}

use crate::provider::AppContext;

/// OpenSDK Build.PAY_SUPPORTED_SDK_INT，低于此 api level 的微信客户端不支持支付
pub const PAY_SUPPORTED_API_LEVEL: u32 = 570_425_345;

pub fn is_available(ctx: &AppContext) -> bool {
    is_available_with_min(ctx, PAY_SUPPORTED_API_LEVEL)
}

/// 装了微信且 api level 达标才算可用；运行环境没有上报微信状态按不可用处理
pub fn is_available_with_min(ctx: &AppContext, min_api_level: u32) -> bool {
    match &ctx.wechat {
        Some(rt) => rt.installed && rt.api_level >= min_api_level,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::WechatRuntime;

    fn ctx(installed: bool, api_level: u32) -> AppContext {
        AppContext {
            wechat: Some(WechatRuntime {
                installed,
                api_level,
            }),
        }
    }

    #[test]
    fn installed_and_supported_is_available() {
        assert!(is_available(&ctx(true, PAY_SUPPORTED_API_LEVEL)));
        assert!(is_available(&ctx(true, PAY_SUPPORTED_API_LEVEL + 1)));
    }

    #[test]
    fn not_installed_is_unavailable() {
        assert!(!is_available(&ctx(false, PAY_SUPPORTED_API_LEVEL)));
    }

    #[test]
    fn old_api_level_is_unavailable() {
        assert!(!is_available(&ctx(true, PAY_SUPPORTED_API_LEVEL - 1)));
    }

    #[test]
    fn missing_runtime_is_unavailable() {
        assert!(!is_available(&AppContext::default()));
    }

    #[test]
    fn min_level_override_is_honored() {
        assert!(is_available_with_min(&ctx(true, 10), 10));
        assert!(!is_available_with_min(&ctx(true, 9), 10));
    }
}

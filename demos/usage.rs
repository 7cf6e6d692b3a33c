use rust_checkout_wf::config::{CheckoutConfig, Environment, WechatPayConfig};
use rust_checkout_wf::provider::PaymentComponentProvider;
use rust_checkout_wf::wechat::utils::PAY_SUPPORTED_API_LEVEL;
use rust_checkout_wf::{AppContext, Checkout, ComponentScope, PaymentMethod, ScopeId, WechatRuntime};
use serde_json::json;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let wx = Arc::new(WechatPayConfig {
        app_id: "wx_app_appid".into(),
        environment: Environment::Test,
        min_api_level: None,
    });
    let cfg = CheckoutConfig {
        environment: Environment::Test,
        wechat: Some(wx),
    };
    Checkout::config(cfg);

    let ctx = AppContext {
        wechat: Some(WechatRuntime {
            installed: true,
            api_level: PAY_SUPPORTED_API_LEVEL,
        }),
    };

    let body = r#"{ "paymentMethods": [
        { "type": "wechatpaySDK", "name": "WeChat Pay" },
        { "type": "scheme", "name": "Cards" }
    ] }"#;
    let response = rust_checkout_wf::PaymentMethodsResponse::from_json(body)?;
    let usable = Checkout::available_methods(&ctx, &response);
    println!("usable methods: {:?}", usable);

    let provider = Checkout::wechat()?;
    let method = PaymentMethod::of_type("wechatpaySDK");

    provider.is_available(&ctx, &method, &provider.config().clone(), |res| {
        println!("wechat available: {}", res.available);
    });

    let scope = ComponentScope::Standalone(ScopeId::new("main-activity"));
    let component = provider.get(&scope, method.clone(), provider.config().clone())?;

    let sdk_data = json!({
        "appid": "wx_app_appid",
        "partnerid": "1900000109",
        "prepayid": "wx201410272009395522657a690389285100",
        "noncestr": "1add1a30ac87aa2db72f57a2375d8fec",
        "timestamp": "1414561699",
        "sign": "0CB01533B8C1EF103065174F50BCA001",
    });
    let pay_req = component.build_pay_request(&sdk_data)?;
    println!("wechat pay request: {}", pay_req);

    // 容器销毁，释放作用域下的组件
    let removed = Checkout::registry().drop_scope(scope.id());
    println!("released {} component(s)", removed);

    Ok(())
}

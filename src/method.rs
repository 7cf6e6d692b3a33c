use crate::errors::CheckoutError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TYPE_WECHAT_PAY_SDK: &str = "wechatpaySDK";

/// /paymentMethods 返回的支付方式描述（对 Provider 透明，不做校验）
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub method_type: Option<String>,
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl PaymentMethod {
    pub fn of_type(method_type: impl Into<String>) -> Self {
        Self {
            method_type: Some(method_type.into()),
            ..Default::default()
        }
    }

    pub fn is_type(&self, method_type: &str) -> bool {
        self.method_type.as_deref() == Some(method_type)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PaymentMethodsResponse {
    #[serde(rename = "paymentMethods", default)]
    pub payment_methods: Vec<PaymentMethod>,
}

impl PaymentMethodsResponse {
    /// 解析 /paymentMethods 响应体
    pub fn from_json(body: &str) -> Result<Self, CheckoutError> {
        Ok(serde_json::from_str(body)?)
    }
}

use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Live,
    Test,
}
impl Default for Environment {
    fn default() -> Self {
        Environment::Test
    }
}
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WechatPayConfig {
    pub app_id: String,
    #[serde(default)]
    pub environment: Environment,
    /// 覆盖 OpenSDK 支付所需的最低 api level（缺省用内置常量）
    #[serde(default)]
    pub min_api_level: Option<u32>,
}
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub wechat: Option<Arc<WechatPayConfig>>,
}

pub mod client;
pub mod config;
pub mod errors;
pub mod method;
pub mod provider;
pub mod registry;
pub mod utils;
pub mod wechat;

pub use client::Checkout;
pub use errors::CheckoutError;
pub use method::{PaymentMethod, PaymentMethodsResponse};
pub use provider::{AppContext, AvailabilityResult, PaymentComponentProvider, WechatRuntime};
pub use registry::{ComponentRegistry, ComponentScope, ScopeId};

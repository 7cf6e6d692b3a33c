pub mod component;
pub mod provider;
pub mod utils;

pub use component::WechatPayComponent;
pub use provider::WechatPayProvider;

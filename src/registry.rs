use crate::errors::CheckoutError;
use crate::utils::gen_nonce;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// 作用域标识（对应宿主容器的生命周期）
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ScopeId(String);

impl ScopeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
    pub fn random() -> Self {
        Self(gen_nonce(16))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Standalone 对应独立容器，Nested 对应挂在父容器下的子容器
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComponentScope {
    Standalone(ScopeId),
    Nested {
        id: ScopeId,
        parent: Option<ScopeId>,
    },
}

impl ComponentScope {
    pub fn id(&self) -> &ScopeId {
        match self {
            ComponentScope::Standalone(id) => id,
            ComponentScope::Nested { id, .. } => id,
        }
    }

    /// Nested 且无父容器时组件无法解析作用域，提前报错
    pub fn validate(&self) -> Result<&ScopeId, CheckoutError> {
        match self {
            ComponentScope::Standalone(id) => Ok(id),
            ComponentScope::Nested { id, parent: Some(_) } => Ok(id),
            ComponentScope::Nested { parent: None, .. } => Err(CheckoutError::IllegalUsage(
                "component must be initiated on a container attached to a parent".to_string(),
            )),
        }
    }
}

/// 按 (scope, 组件类型) 保存单例组件，注册表持有组件生命周期
pub struct ComponentRegistry {
    entries: Mutex<HashMap<(ScopeId, TypeId), Arc<dyn Any + Send + Sync>>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// 命中直接复用，未命中才执行 factory；factory 失败不留残留条目
    pub fn get_or_create<C, F>(&self, scope: &ScopeId, factory: F) -> Result<Arc<C>, CheckoutError>
    where
        C: Send + Sync + 'static,
        F: FnOnce() -> Result<C, CheckoutError>,
    {
        let key = (scope.clone(), TypeId::of::<C>());
        let mut entries = self.entries.lock().unwrap();
        if let Some(existing) = entries.get(&key) {
            debug!("registry reuse: scope={} type={}", scope, type_name::<C>());
            let component = existing
                .clone()
                .downcast::<C>()
                .unwrap_or_else(|_| unreachable!("entry keyed by TypeId"));
            return Ok(component);
        }
        let component = Arc::new(factory()?);
        entries.insert(key, component.clone());
        debug!("registry create: scope={} type={}", scope, type_name::<C>());
        Ok(component)
    }

    /// 宿主容器销毁时调用，释放该作用域下全部组件，返回移除数量
    pub fn drop_scope(&self, scope: &ScopeId) -> usize {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|(id, _), _| id != scope);
        let removed = before - entries.len();
        debug!("registry drop: scope={} removed={}", scope, removed);
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

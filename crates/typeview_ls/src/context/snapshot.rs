use std::sync::Arc;

use tokio::sync::RwLock;
use typeview_code_analysis::SymbolIndex;

use crate::config::TypeViewConfig;
use crate::handlers::{Navigator, ScopeId};

#[derive(Clone)]
pub struct ServerContextSnapshot {
    inner: Arc<ServerContextInner>,
}

impl ServerContextSnapshot {
    pub fn new(inner: Arc<ServerContextInner>) -> Self {
        Self { inner }
    }

    pub fn index(&self) -> &RwLock<Box<dyn SymbolIndex>> {
        &self.inner.index
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.inner.navigator.as_ref()
    }

    /// Candidate navigation scopes in their stable attempt order.
    pub fn scopes(&self) -> &RwLock<Vec<ScopeId>> {
        &self.inner.scopes
    }

    pub fn config(&self) -> &RwLock<TypeViewConfig> {
        &self.inner.config
    }
}

pub struct ServerContextInner {
    pub index: Arc<RwLock<Box<dyn SymbolIndex>>>,
    pub navigator: Arc<dyn Navigator>,
    pub scopes: Arc<RwLock<Vec<ScopeId>>>,
    pub config: Arc<RwLock<TypeViewConfig>>,
}

use std::sync::Arc;

use async_trait::async_trait;
use googletest::prelude::*;
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;
use typeview_code_analysis::{TypeIdentity, VirtualTypeGraph};

use crate::config::TypeViewConfig;
use crate::context::{ServerContextInner, ServerContextSnapshot};
use crate::handlers::navigation::{Navigator, ScopeId};
use crate::handlers::type_hierarchy::{TypeNodeInfo, type_hierarchy};

/// Calling this macro on a [`Result`] is equivalent to `result?`,
/// but adds info about current location to the error message.
macro_rules! check {
    ($e:expr $(,)?) => {
        googletest::prelude::OrFail::or_fail($e)?
    };
    ($e:expr, $($t:tt)+) => {
        googletest::prelude::OrFail::or_fail($e).with_failure_message(|| format!($($t)+))?
    };
}
pub(crate) use check;

/// A virtual workspace for testing.
#[allow(unused)]
#[derive(Debug, Default)]
pub struct ProviderVirtualWorkspace {
    pub graph: VirtualTypeGraph,
}

/// Simplified expectation for one rendered hierarchy node.
#[derive(Debug, PartialEq, Eq)]
pub struct VirtualTypeNode {
    pub name: String,
    pub queried: bool,
    pub children: Vec<VirtualTypeNode>,
}

#[allow(unused)]
impl VirtualTypeNode {
    pub fn leaf(name: &str) -> Self {
        Self {
            name: name.to_string(),
            queried: false,
            children: Vec::new(),
        }
    }

    pub fn node(name: &str, queried: bool, children: Vec<VirtualTypeNode>) -> Self {
        Self {
            name: name.to_string(),
            queried,
            children,
        }
    }
}

#[allow(unused)]
impl ProviderVirtualWorkspace {
    pub fn new() -> Self {
        Self {
            graph: VirtualTypeGraph::new(),
        }
    }

    pub async fn check_type_hierarchy(
        &self,
        type_name: &str,
        expected: Vec<VirtualTypeNode>,
    ) -> Result<()> {
        let response = type_hierarchy(&self.graph, type_name, CancellationToken::new())
            .await
            .or_fail()?;
        let actual: Vec<VirtualTypeNode> = response.roots.iter().map(to_virtual).collect();
        verify_that!(actual, eq(&expected))
    }
}

fn to_virtual(info: &TypeNodeInfo) -> VirtualTypeNode {
    VirtualTypeNode {
        name: info.full_name.clone(),
        queried: info.is_queried_type,
        children: info.children.iter().map(to_virtual).collect(),
    }
}

/// Builds a context snapshot over a finished virtual graph.
pub fn make_context(
    graph: VirtualTypeGraph,
    navigator: Arc<dyn Navigator>,
    scopes: Vec<ScopeId>,
    config: TypeViewConfig,
) -> ServerContextSnapshot {
    ServerContextSnapshot::new(Arc::new(ServerContextInner {
        index: Arc::new(RwLock::new(Box::new(graph))),
        navigator,
        scopes: Arc::new(RwLock::new(scopes)),
        config: Arc::new(RwLock::new(config)),
    }))
}

/// Records every attempt and succeeds only in the configured scope.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub succeed_in: Option<ScopeId>,
    pub attempts: Mutex<Vec<ScopeId>>,
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate_in_scope(&self, _symbol: &TypeIdentity, scope: ScopeId) -> bool {
        self.attempts.lock().await.push(scope);
        self.succeed_in == Some(scope)
    }
}

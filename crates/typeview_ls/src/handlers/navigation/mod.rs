mod goto_type_request;

use async_trait::async_trait;
pub use goto_type_request::*;
use log::error;
use tokio_util::sync::CancellationToken;
use typeview_code_analysis::TypeIdentity;

use crate::context::ServerContextSnapshot;

/// Handle to one candidate navigation scope, typically a project of the
/// host solution.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct ScopeId {
    pub id: u32,
}

impl ScopeId {
    pub fn new(id: u32) -> Self {
        ScopeId { id }
    }
}

/// Editor-side navigation. One call is one attempt to open the symbol's
/// definition within the given scope.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate_in_scope(&self, symbol: &TypeIdentity, scope: ScopeId) -> bool;
}

pub async fn on_goto_type_handler(
    context: ServerContextSnapshot,
    params: GotoTypeParams,
    _: CancellationToken,
) -> Option<GotoTypeResponse> {
    if !context.config().read().await.navigation.enable {
        return None;
    }

    let symbol = {
        let index = context.index().read().await;
        match index.resolve_type(&params.type_name).await {
            Ok(symbol) => symbol?,
            Err(err) => {
                error!("type resolution failed: {}", err);
                return None;
            }
        }
    };

    let scopes = context.scopes().read().await.clone();
    let navigated = try_navigate(context.navigator(), &symbol, &scopes).await;
    Some(GotoTypeResponse { navigated })
}

/// Attempts each scope in order and stops at the first success. Returns
/// whether any attempt succeeded.
pub async fn try_navigate(
    navigator: &dyn Navigator,
    symbol: &TypeIdentity,
    scopes: &[ScopeId],
) -> bool {
    for scope in scopes {
        if navigator.navigate_in_scope(symbol, *scope).await {
            return true;
        }
    }

    false
}

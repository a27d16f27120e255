mod type_hierarchy_request;

use log::{debug, error};
use lsp_types::SymbolKind;
use tokio_util::sync::CancellationToken;
pub use type_hierarchy_request::*;
use typeview_code_analysis::{
    HierarchyError, SymbolIndex, TypeDeclKind, TypeNode, build_type_hierarchy,
};

use crate::context::ServerContextSnapshot;

pub async fn on_type_hierarchy_handler(
    context: ServerContextSnapshot,
    params: TypeHierarchyParams,
    cancel_token: CancellationToken,
) -> Option<TypeHierarchyResponse> {
    if !context.config().read().await.hierarchy.enable {
        return None;
    }

    let index = context.index().read().await;
    type_hierarchy(index.as_ref(), &params.type_name, cancel_token).await
}

pub async fn type_hierarchy(
    index: &dyn SymbolIndex,
    type_name: &str,
    cancel_token: CancellationToken,
) -> Option<TypeHierarchyResponse> {
    let target = match index.resolve_type(type_name).await {
        Ok(target) => target,
        Err(err) => {
            error!("type hierarchy resolution failed: {}", err);
            return None;
        }
    };

    match build_type_hierarchy(target, index, cancel_token).await {
        Ok(roots) => Some(TypeHierarchyResponse {
            roots: roots.iter().map(to_node_info).collect(),
        }),
        Err(HierarchyError::Cancelled) => {
            debug!("type hierarchy build cancelled");
            None
        }
        Err(err) => {
            error!("type hierarchy build failed: {}", err);
            None
        }
    }
}

fn to_node_info(node: &TypeNode) -> TypeNodeInfo {
    let symbol = node.get_symbol();

    TypeNodeInfo {
        name: symbol.get_simple_name().to_string(),
        full_name: symbol.get_name().to_string(),
        kind: get_kind(symbol.get_kind()),
        is_queried_type: node.is_queried_type(),
        children: node.get_children().iter().map(to_node_info).collect(),
    }
}

fn get_kind(kind: TypeDeclKind) -> SymbolKind {
    match kind {
        TypeDeclKind::Class => SymbolKind::CLASS,
        TypeDeclKind::Struct => SymbolKind::STRUCT,
        TypeDeclKind::Interface => SymbolKind::INTERFACE,
        TypeDeclKind::Enum => SymbolKind::ENUM,
    }
}

use lsp_types::{SymbolKind, request::Request};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum TypeViewHierarchyRequest {}

impl Request for TypeViewHierarchyRequest {
    type Params = TypeHierarchyParams;
    type Result = Option<TypeHierarchyResponse>;
    const METHOD: &'static str = "typeView/typeHierarchy";
}

#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
pub struct TypeHierarchyParams {
    /// Fully qualified name of the type to show the hierarchy for.
    pub type_name: String,
}

#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
pub struct TypeHierarchyResponse {
    pub roots: Vec<TypeNodeInfo>,
}

/// Rendered hierarchy node. `full_name` lets the client re-request the
/// hierarchy with this node as the new target.
#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
pub struct TypeNodeInfo {
    pub name: String,
    pub full_name: String,
    pub kind: SymbolKind,
    pub is_queried_type: bool,
    pub children: Vec<TypeNodeInfo>,
}

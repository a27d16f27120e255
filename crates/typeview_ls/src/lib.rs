mod config;
mod context;
mod handlers;

pub use config::{TypeViewConfig, TypeViewHierarchyConfig, TypeViewNavigationConfig};
pub use context::{ServerContextInner, ServerContextSnapshot};
pub use handlers::{
    GotoTypeParams, GotoTypeResponse, Navigator, ScopeId, TypeHierarchyParams,
    TypeHierarchyResponse, TypeNodeInfo, TypeViewGotoTypeRequest, TypeViewHierarchyRequest,
    on_goto_type_handler, on_type_hierarchy_handler, try_navigate,
};

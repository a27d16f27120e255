mod navigation;
mod type_hierarchy;

#[cfg(test)]
mod test;
#[cfg(test)]
mod test_lib;

pub use navigation::{
    GotoTypeParams, GotoTypeResponse, Navigator, ScopeId, TypeViewGotoTypeRequest,
    on_goto_type_handler, try_navigate,
};
pub use type_hierarchy::{
    TypeHierarchyParams, TypeHierarchyResponse, TypeNodeInfo, TypeViewHierarchyRequest,
    on_type_hierarchy_handler, type_hierarchy,
};

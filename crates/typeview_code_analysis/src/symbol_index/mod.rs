mod file_id;
mod test;
mod type_decl;

use async_trait::async_trait;
pub use file_id::FileId;
use thiserror::Error;
pub use type_decl::{DeclLocation, TypeDecl, TypeDeclId, TypeDeclKind, TypeIdentity};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("symbol graph unavailable: {0}")]
    GraphUnavailable(String),
    #[error("index query failed: {0}")]
    QueryFailed(String),
}

/// Read-only view over the host's type graph.
///
/// Every query is idempotent and side-effect free but may be expensive
/// (whole-solution scans), so callers hold a cancellation signal and the
/// hierarchy builder checks it before each call. The view is whatever
/// snapshot the host currently has; the builder takes no lock over it.
#[async_trait]
pub trait SymbolIndex: Send + Sync {
    /// Resolves a fully qualified name to a declared type, if any.
    async fn resolve_type(&self, full_name: &str) -> Result<Option<TypeIdentity>, IndexError>;

    /// The declared base type, or `None` for the universal root type.
    async fn get_base_type(&self, typ: &TypeIdentity)
    -> Result<Option<TypeIdentity>, IndexError>;

    /// Interfaces the type declares directly.
    async fn get_direct_interfaces(
        &self,
        typ: &TypeIdentity,
    ) -> Result<Vec<TypeIdentity>, IndexError>;

    /// The full set of interfaces the type implements, directly or via
    /// inherited implementation.
    async fn get_transitive_interfaces(
        &self,
        typ: &TypeIdentity,
    ) -> Result<Vec<TypeIdentity>, IndexError>;

    /// Types deriving from the given type, filtered to those with a
    /// source-visible declaration.
    async fn get_direct_subtypes_in_source(
        &self,
        typ: &TypeIdentity,
    ) -> Result<Vec<TypeIdentity>, IndexError>;

    /// Types implementing the given interface, filtered to those with a
    /// source-visible declaration.
    async fn get_implementors_in_source(
        &self,
        typ: &TypeIdentity,
    ) -> Result<Vec<TypeIdentity>, IndexError>;
}

mod type_node;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
pub use type_node::TypeNode;

use crate::{IndexError, SymbolIndex, TypeDeclKind, TypeIdentity};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HierarchyError {
    /// The build was superseded or abandoned. Distinct from an empty
    /// hierarchy.
    #[error("hierarchy build cancelled")]
    Cancelled,
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Builds the hierarchy view for `target`: one ancestry/derivation root
/// followed by one leaf entry per distinct interface in the target's
/// transitive interface closure.
///
/// A `None` target is "no selection" and yields an empty result. Any index
/// failure aborts the whole build; no partial tree is ever returned.
pub async fn build_type_hierarchy(
    target: Option<TypeIdentity>,
    index: &dyn SymbolIndex,
    cancel_token: CancellationToken,
) -> Result<Vec<TypeNode>, HierarchyError> {
    let Some(target) = target else {
        return Ok(Vec::new());
    };

    let top_node = match target.get_kind() {
        TypeDeclKind::Interface => build_interface_top_node(&target, index, &cancel_token).await?,
        _ => build_class_top_node(&target, index, &cancel_token).await?,
    };

    check_cancelled(&cancel_token)?;
    let interfaces = index.get_transitive_interfaces(&target).await?;

    let mut result = vec![top_node];
    result.extend(sorted_distinct_nodes(interfaces));
    Ok(result)
}

/// Top node for an interface target: the interface itself with its
/// source-visible implementors as leaf children.
async fn build_interface_top_node(
    target: &TypeIdentity,
    index: &dyn SymbolIndex,
    cancel_token: &CancellationToken,
) -> Result<TypeNode, HierarchyError> {
    check_cancelled(cancel_token)?;
    let implementors = index.get_implementors_in_source(target).await?;

    let mut top_node = TypeNode::new_queried(target.clone());
    top_node.set_children(sorted_distinct_nodes(implementors));
    Ok(top_node)
}

/// Top node for a class or struct target: the linear base-type chain from
/// the most distant ancestor down to the target, with the target's
/// source-visible derived types as leaf children of the target node.
async fn build_class_top_node(
    target: &TypeIdentity,
    index: &dyn SymbolIndex,
    cancel_token: &CancellationToken,
) -> Result<TypeNode, HierarchyError> {
    let ancestors = collect_ancestor_chain(target, index, cancel_token).await?;

    check_cancelled(cancel_token)?;
    let derived = index.get_direct_subtypes_in_source(target).await?;

    let mut node = TypeNode::new_queried(target.clone());
    node.set_children(sorted_distinct_nodes(derived));

    // wrap the queried node ancestor by ancestor; the most distant one
    // ends up as the chain root. With no ancestors the target is the root.
    for ancestor in ancestors {
        let mut parent = TypeNode::new(ancestor);
        parent.set_children(vec![node]);
        node = parent;
    }

    Ok(node)
}

/// Ancestors of `target` by following base-type links, nearest first.
/// The universal root type has no base and terminates the walk.
async fn collect_ancestor_chain(
    target: &TypeIdentity,
    index: &dyn SymbolIndex,
    cancel_token: &CancellationToken,
) -> Result<Vec<TypeIdentity>, HierarchyError> {
    let mut ancestors = Vec::new();

    check_cancelled(cancel_token)?;
    let mut current = index.get_base_type(target).await?;
    while let Some(base) = current {
        check_cancelled(cancel_token)?;
        current = index.get_base_type(&base).await?;
        ancestors.push(base);
    }

    Ok(ancestors)
}

/// Wraps a fan-out set in leaf nodes with a deterministic total order:
/// lexicographic by fully qualified name, duplicates removed.
fn sorted_distinct_nodes(mut types: Vec<TypeIdentity>) -> Vec<TypeNode> {
    types.sort_by(|a, b| a.get_name().cmp(b.get_name()));
    types.dedup();
    types.into_iter().map(TypeNode::new).collect()
}

fn check_cancelled(cancel_token: &CancellationToken) -> Result<(), HierarchyError> {
    if cancel_token.is_cancelled() {
        return Err(HierarchyError::Cancelled);
    }

    Ok(())
}

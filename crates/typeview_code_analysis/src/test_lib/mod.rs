use std::collections::{HashMap, HashSet, VecDeque};

use async_trait::async_trait;
use lsp_types::{Position, Range};

use crate::{
    DeclLocation, FileId, IndexError, SymbolIndex, TypeDecl, TypeDeclId, TypeDeclKind,
    TypeIdentity,
};

/// An in-memory type graph for testing.
///
/// Types are registered declaratively by fully qualified name; the graph
/// then answers the `SymbolIndex` queries over the registered relations.
#[allow(unused)]
#[derive(Debug, Default)]
pub struct VirtualTypeGraph {
    decls: HashMap<TypeDeclId, TypeDecl>,
    file_counter: u32,
    unavailable: bool,
}

#[allow(unused)]
impl VirtualTypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn def_class(
        &mut self,
        name: &str,
        base: Option<&str>,
        interfaces: &[&str],
    ) -> TypeIdentity {
        self.def_type(name, TypeDeclKind::Class, base, interfaces, true)
    }

    pub fn def_struct(&mut self, name: &str, interfaces: &[&str]) -> TypeIdentity {
        self.def_type(name, TypeDeclKind::Struct, None, interfaces, true)
    }

    pub fn def_enum(&mut self, name: &str) -> TypeIdentity {
        self.def_type(name, TypeDeclKind::Enum, None, &[], true)
    }

    pub fn def_interface(&mut self, name: &str, extends: &[&str]) -> TypeIdentity {
        self.def_type(name, TypeDeclKind::Interface, None, extends, true)
    }

    /// A class visible only through a compiled reference, i.e. excluded
    /// from every `*_in_source` query.
    pub fn def_binary_class(
        &mut self,
        name: &str,
        base: Option<&str>,
        interfaces: &[&str],
    ) -> TypeIdentity {
        self.def_type(name, TypeDeclKind::Class, base, interfaces, false)
    }

    pub fn def_type(
        &mut self,
        name: &str,
        kind: TypeDeclKind,
        base: Option<&str>,
        interfaces: &[&str],
        in_source: bool,
    ) -> TypeIdentity {
        let location = if in_source {
            self.file_counter += 1;
            DeclLocation {
                file_id: FileId::new(self.file_counter),
                range: Range::new(Position::new(0, 0), Position::new(0, name.len() as u32)),
                in_source: true,
            }
        } else {
            DeclLocation {
                file_id: FileId::VIRTUAL,
                range: Range::default(),
                in_source: false,
            }
        };

        let id = TypeDeclId::new(name);
        let decl = self
            .decls
            .entry(id.clone())
            .or_insert_with(|| TypeDecl::new(id, kind));
        if let Some(base) = base {
            decl.set_base_id(TypeDeclId::new(base));
        }
        for interface in interfaces {
            decl.add_interface_id(TypeDeclId::new(interface));
        }
        decl.add_location(location);
        decl.get_identity()
    }

    pub fn find_type(&self, name: &str) -> Option<TypeIdentity> {
        self.identity_of(&TypeDeclId::new(name))
    }

    pub fn expect_type(&self, name: &str) -> TypeIdentity {
        self.find_type(name).expect("type must be declared")
    }

    /// Makes every subsequent query fail, simulating a host whose type
    /// graph has gone away mid-request.
    pub fn set_graph_unavailable(&mut self) {
        self.unavailable = true;
    }

    fn check_available(&self) -> Result<(), IndexError> {
        if self.unavailable {
            return Err(IndexError::GraphUnavailable(
                "virtual graph marked unavailable".to_string(),
            ));
        }

        Ok(())
    }

    fn identity_of(&self, id: &TypeDeclId) -> Option<TypeIdentity> {
        self.decls.get(id).map(TypeDecl::get_identity)
    }
}

#[async_trait]
impl SymbolIndex for VirtualTypeGraph {
    async fn resolve_type(&self, full_name: &str) -> Result<Option<TypeIdentity>, IndexError> {
        self.check_available()?;
        Ok(self.identity_of(&TypeDeclId::new(full_name)))
    }

    async fn get_base_type(
        &self,
        typ: &TypeIdentity,
    ) -> Result<Option<TypeIdentity>, IndexError> {
        self.check_available()?;
        Ok(self
            .decls
            .get(&typ.get_id())
            .and_then(|decl| decl.get_base_id())
            .and_then(|base| self.identity_of(base)))
    }

    async fn get_direct_interfaces(
        &self,
        typ: &TypeIdentity,
    ) -> Result<Vec<TypeIdentity>, IndexError> {
        self.check_available()?;
        let Some(decl) = self.decls.get(&typ.get_id()) else {
            return Ok(Vec::new());
        };

        Ok(decl
            .get_interface_ids()
            .iter()
            .filter_map(|id| self.identity_of(id))
            .collect())
    }

    async fn get_transitive_interfaces(
        &self,
        typ: &TypeIdentity,
    ) -> Result<Vec<TypeIdentity>, IndexError> {
        self.check_available()?;

        // seed with the direct interfaces of the type and of each ancestor
        let mut queue = VecDeque::new();
        let mut current = Some(typ.get_id());
        while let Some(id) = current {
            let Some(decl) = self.decls.get(&id) else {
                break;
            };
            queue.extend(decl.get_interface_ids().iter().cloned());
            current = decl.get_base_id().cloned();
        }

        // breadth first over interface extension
        let mut visited = HashSet::new();
        let mut result = Vec::new();
        while let Some(id) = queue.pop_front() {
            if !visited.insert(id.clone()) {
                continue;
            }
            let Some(decl) = self.decls.get(&id) else {
                continue;
            };
            result.push(decl.get_identity());
            queue.extend(decl.get_interface_ids().iter().cloned());
        }

        Ok(result)
    }

    async fn get_direct_subtypes_in_source(
        &self,
        typ: &TypeIdentity,
    ) -> Result<Vec<TypeIdentity>, IndexError> {
        self.check_available()?;
        let target = typ.get_id();

        Ok(self
            .decls
            .values()
            .filter(|decl| decl.get_base_id() == Some(&target) && decl.is_in_source())
            .map(TypeDecl::get_identity)
            .collect())
    }

    async fn get_implementors_in_source(
        &self,
        typ: &TypeIdentity,
    ) -> Result<Vec<TypeIdentity>, IndexError> {
        self.check_available()?;
        let target = typ.get_id();

        Ok(self
            .decls
            .values()
            .filter(|decl| decl.get_interface_ids().contains(&target) && decl.is_in_source())
            .map(TypeDecl::get_identity)
            .collect())
    }
}

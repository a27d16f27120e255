use internment::ArcIntern;
use lsp_types::Range;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;

use crate::FileId;

/// Kind of a declared type. The builder branches on this explicitly
/// instead of inspecting symbols at run time.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum TypeDeclKind {
    Class,
    Struct,
    Interface,
    Enum,
}

/// Interned fully qualified type name. Cheap to clone and compare.
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct TypeDeclId {
    id: ArcIntern<SmolStr>,
}

impl TypeDeclId {
    pub fn new_by_id(id: ArcIntern<SmolStr>) -> Self {
        Self { id }
    }

    pub fn new(str: &str) -> Self {
        Self {
            id: ArcIntern::new(SmolStr::new(str)),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.id
    }

    pub fn get_simple_name(&self) -> &str {
        let basic_name = self.get_name();

        (if let Some(i) = basic_name.rfind('.') {
            &basic_name[i + 1..]
        } else {
            basic_name
        }) as _
    }
}

impl Serialize for TypeDeclId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.id)
    }
}

impl<'de> Deserialize<'de> for TypeDeclId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TypeDeclId {
            id: ArcIntern::new(SmolStr::new(s)),
        })
    }
}

/// A resolved handle to one declared type. Two identities are equal iff
/// they denote the same declared symbol.
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct TypeIdentity {
    id: TypeDeclId,
    kind: TypeDeclKind,
}

impl TypeIdentity {
    pub fn new(id: TypeDeclId, kind: TypeDeclKind) -> Self {
        Self { id, kind }
    }

    pub fn get_id(&self) -> TypeDeclId {
        self.id.clone()
    }

    pub fn get_kind(&self) -> TypeDeclKind {
        self.kind
    }

    pub fn get_name(&self) -> &str {
        self.id.get_name()
    }

    pub fn get_simple_name(&self) -> &str {
        self.id.get_simple_name()
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.kind, TypeDeclKind::Interface)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclLocation {
    pub file_id: FileId,
    pub range: Range,
    /// False for declarations resolved only from a compiled reference.
    pub in_source: bool,
}

/// A declared type as recorded by a symbol index: its identity, declared
/// base type, declared interfaces and every declaration site. Partial
/// declarations of the same type share one record with multiple locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    id: TypeDeclId,
    kind: TypeDeclKind,
    base: Option<TypeDeclId>,
    interfaces: Vec<TypeDeclId>,
    locations: Vec<DeclLocation>,
}

impl TypeDecl {
    pub fn new(id: TypeDeclId, kind: TypeDeclKind) -> Self {
        Self {
            id,
            kind,
            base: None,
            interfaces: Vec::new(),
            locations: Vec::new(),
        }
    }

    pub fn get_id(&self) -> TypeDeclId {
        self.id.clone()
    }

    pub fn get_kind(&self) -> TypeDeclKind {
        self.kind
    }

    pub fn get_identity(&self) -> TypeIdentity {
        TypeIdentity::new(self.id.clone(), self.kind)
    }

    pub fn get_name(&self) -> &str {
        self.id.get_name()
    }

    pub fn set_base_id(&mut self, base: TypeDeclId) {
        self.base = Some(base);
    }

    pub fn get_base_id(&self) -> Option<&TypeDeclId> {
        self.base.as_ref()
    }

    pub fn add_interface_id(&mut self, interface: TypeDeclId) {
        if !self.interfaces.contains(&interface) {
            self.interfaces.push(interface);
        }
    }

    pub fn get_interface_ids(&self) -> &[TypeDeclId] {
        &self.interfaces
    }

    pub fn add_location(&mut self, location: DeclLocation) {
        self.locations.push(location);
    }

    pub fn get_locations(&self) -> &[DeclLocation] {
        &self.locations
    }

    /// Whether any declaration site is navigable editable source.
    pub fn is_in_source(&self) -> bool {
        self.locations.iter().any(|l| l.in_source)
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.kind, TypeDeclKind::Interface)
    }
}

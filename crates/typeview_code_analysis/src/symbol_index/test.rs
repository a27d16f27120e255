#[cfg(test)]
mod test {
    use lsp_types::{Position, Range};

    use crate::{DeclLocation, FileId, TypeDecl, TypeDeclId, TypeDeclKind};

    fn location(file_id: u32, in_source: bool) -> DeclLocation {
        DeclLocation {
            file_id: FileId::new(file_id),
            range: Range::new(Position::new(0, 0), Position::new(0, 4)),
            in_source,
        }
    }

    #[test]
    fn test_simple_name() {
        let id = TypeDeclId::new("App.Views.TreePanel");
        assert_eq!(id.get_name(), "App.Views.TreePanel");
        assert_eq!(id.get_simple_name(), "TreePanel");

        let bare = TypeDeclId::new("TreePanel");
        assert_eq!(bare.get_simple_name(), "TreePanel");
    }

    #[test]
    fn test_decl_id_serialization() {
        let id = TypeDeclId::new("App.Node");
        let serialized = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized, "\"App.Node\"");
        let deserialized: TypeDeclId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn test_identity_equality() {
        let decl = TypeDecl::new(TypeDeclId::new("App.Node"), TypeDeclKind::Class);
        assert_eq!(decl.get_identity(), decl.get_identity());
        let other = TypeDecl::new(TypeDeclId::new("App.Other"), TypeDeclKind::Class);
        assert_ne!(decl.get_identity(), other.get_identity());
    }

    #[test]
    fn test_source_visibility() {
        let mut decl = TypeDecl::new(TypeDeclId::new("App.Node"), TypeDeclKind::Class);
        assert!(!decl.is_in_source());

        decl.add_location(location(1, false));
        assert!(!decl.is_in_source());

        // a partial declaration in editable source makes the type navigable
        decl.add_location(location(2, true));
        assert!(decl.is_in_source());
        assert_eq!(decl.get_locations().len(), 2);
    }

    #[test]
    fn test_declared_relations() {
        let mut decl = TypeDecl::new(TypeDeclId::new("App.Node"), TypeDeclKind::Class);
        decl.set_base_id(TypeDeclId::new("App.Element"));
        decl.add_interface_id(TypeDeclId::new("App.IRender"));
        decl.add_interface_id(TypeDeclId::new("App.IRender"));

        assert_eq!(decl.get_base_id(), Some(&TypeDeclId::new("App.Element")));
        assert_eq!(decl.get_interface_ids().len(), 1);
        assert!(!decl.is_interface());
    }
}

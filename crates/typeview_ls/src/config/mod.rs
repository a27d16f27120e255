use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, JsonSchema, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TypeViewConfig {
    #[serde(rename = "$schema")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub hierarchy: TypeViewHierarchyConfig,
    #[serde(default)]
    pub navigation: TypeViewNavigationConfig,
}

#[derive(Serialize, Deserialize, Debug, JsonSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TypeViewHierarchyConfig {
    /// Enable the type hierarchy view.
    #[serde(default = "default_true")]
    #[schemars(extend("x-vscode-setting" = true))]
    pub enable: bool,
}

impl Default for TypeViewHierarchyConfig {
    fn default() -> Self {
        Self {
            enable: default_true(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, JsonSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TypeViewNavigationConfig {
    /// Enable go to definition from hierarchy nodes.
    #[serde(default = "default_true")]
    #[schemars(extend("x-vscode-setting" = true))]
    pub enable: bool,
}

impl Default for TypeViewNavigationConfig {
    fn default() -> Self {
        Self {
            enable: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TypeViewConfig::default();
        assert!(config.hierarchy.enable);
        assert!(config.navigation.enable);
    }

    #[test]
    fn test_partial_config() {
        let config: TypeViewConfig =
            serde_json::from_str(r#"{"hierarchy": {"enable": false}}"#).unwrap();
        assert!(!config.hierarchy.enable);
        assert!(config.navigation.enable);
    }
}

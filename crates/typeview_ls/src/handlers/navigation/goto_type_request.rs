use lsp_types::request::Request;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum TypeViewGotoTypeRequest {}

impl Request for TypeViewGotoTypeRequest {
    type Params = GotoTypeParams;
    type Result = Option<GotoTypeResponse>;
    const METHOD: &'static str = "typeView/gotoType";
}

#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
pub struct GotoTypeParams {
    /// Fully qualified name of the type to open.
    pub type_name: String,
}

#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
pub struct GotoTypeResponse {
    /// False when the symbol has no discoverable source in any candidate
    /// scope. A normal outcome, not a fault.
    pub navigated: bool,
}

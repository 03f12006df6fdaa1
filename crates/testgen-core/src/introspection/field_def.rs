use crate::introspection::InputValueDef;
use crate::introspection::TypeRef;

/// A field defined on an OBJECT or INTERFACE type.
///
/// Deprecation metadata is carried through from the introspection response
/// but has no effect on generation.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: String,
    #[serde(default)]
    pub args: Vec<InputValueDef>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

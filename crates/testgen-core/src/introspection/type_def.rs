use crate::introspection::EnumValueDef;
use crate::introspection::FieldDef;
use crate::introspection::InputValueDef;
use crate::introspection::TypeKind;
use crate::introspection::TypeRef;

/// One named type from the introspected schema.
///
/// `fields` is present only for OBJECT/INTERFACE kinds, `input_fields` only
/// for INPUT_OBJECT, `enum_values` only for ENUM; everything else is `None`
/// on the wire.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDef {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub fields: Option<Vec<FieldDef>>,
    pub input_fields: Option<Vec<InputValueDef>>,
    pub interfaces: Option<Vec<TypeRef>>,
    pub enum_values: Option<Vec<EnumValueDef>>,
    pub possible_types: Option<Vec<TypeRef>>,
}
impl TypeDef {
    /// The type's fields in schema-declared order; empty for kinds that
    /// define none.
    pub fn field_defs(&self) -> &[FieldDef] {
        self.fields.as_deref().unwrap_or_default()
    }
}

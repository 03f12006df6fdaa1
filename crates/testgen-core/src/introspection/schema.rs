use crate::introspection::SchemaFetchError;
use crate::introspection::TypeDef;
use crate::introspection::TypeKind;
use indexmap::IndexMap;

/// A fully introspected, immutable GraphQL schema.
///
/// Named types live in a single name-keyed store that preserves the
/// server's declaration order. The type graph is cyclic (a type may
/// reference itself through a field), so anything that points at another
/// type does so by name and resolves through [`Schema::type_def`]; there
/// are no ownership edges between types.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    query_type_name: String,
    mutation_type_name: Option<String>,
    types: IndexMap<String, TypeDef>,
}

/// Wire shape of the `__schema` payload.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaPayload {
    query_type: Option<RootTypeName>,
    mutation_type: Option<RootTypeName>,
    #[serde(default)]
    types: Vec<TypeDef>,
}

#[derive(Debug, serde::Deserialize)]
struct RootTypeName {
    name: String,
}

impl Schema {
    /// Build a [`Schema`] from the JSON value of a `__schema` introspection
    /// payload (the object *inside* `data.__schema`).
    ///
    /// Entries without a name cannot be looked up and are dropped; a
    /// conforming server never returns any at the top level.
    pub fn from_schema_json(value: serde_json::Value) -> Result<Self, SchemaFetchError> {
        let payload: SchemaPayload = serde_json::from_value(value)?;
        let query_type_name = payload
            .query_type
            .map(|root| root.name)
            .ok_or(SchemaFetchError::MissingQueryType)?;
        let mutation_type_name = payload.mutation_type.map(|root| root.name);

        let mut types = IndexMap::with_capacity(payload.types.len());
        for type_def in payload.types {
            if let Some(name) = type_def.name.clone() {
                types.insert(name, type_def);
            }
        }

        Ok(Schema {
            query_type_name,
            mutation_type_name,
            types,
        })
    }

    /// Look up a type definition by name.
    pub fn type_def(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// Look up a type by name, returning it only if it is an OBJECT type.
    pub fn object_type(&self, name: &str) -> Option<&TypeDef> {
        self.type_def(name)
            .filter(|type_def| type_def.kind == TypeKind::Object)
    }

    /// The name of the Query root type.
    pub fn query_type_name(&self) -> &str {
        &self.query_type_name
    }

    /// The name of the Mutation root type, if the schema declares one.
    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type_name.as_deref()
    }

    /// All named types, in the order the server declared them.
    pub fn types(&self) -> &IndexMap<String, TypeDef> {
        &self.types
    }
}

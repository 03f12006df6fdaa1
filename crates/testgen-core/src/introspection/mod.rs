mod enum_value_def;
mod fetch;
mod fetch_error;
mod field_def;
mod input_value_def;
pub(crate) mod query;
mod schema;
mod transport;
mod type_def;
mod type_kind;
mod type_ref;
mod type_shape;

pub use enum_value_def::EnumValueDef;
pub use fetch::fetch_schema;
pub use fetch_error::SchemaFetchError;
pub use fetch_error::TransportError;
pub use field_def::FieldDef;
pub use input_value_def::InputValueDef;
pub use schema::Schema;
pub use transport::GraphqlTransport;
pub use transport::HttpTransport;
pub use transport::TransportResponse;
pub use type_def::TypeDef;
pub use type_kind::TypeKind;
pub use type_ref::TypeRef;
pub use type_shape::TypeShape;

#[cfg(test)]
mod tests;

//! Scaffolds a GraphQL test suite from a live endpoint's introspected schema.
//!
//! The pipeline has three stages: [`introspection::fetch_schema`] retrieves
//! the full type schema over a [`introspection::GraphqlTransport`],
//! [`generate::synthesize_operations`] produces one
//! [`generate::OperationCase`] per query/mutation root field, and
//! [`emit::write_test_file`] renders those cases into a runnable Rust test
//! file meant to be hand-edited afterwards.
//!
//! Everything between the fetch and the final write is a pure transformation
//! over an immutable [`introspection::Schema`].

pub mod emit;
pub mod generate;
pub mod introspection;

#[cfg(test)]
pub(crate) mod test_helpers;

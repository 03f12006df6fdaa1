use crate::generate::OperationKind;
use indexmap::IndexMap;

/// One generated operation: a complete GraphQL document plus the variable
/// values to post alongside it.
///
/// `expected_output` is always `None` when synthesized; filling it in is
/// deliberately left to whoever edits the generated file.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationCase {
    /// The root field's name; also names the generated test function
    /// together with [`OperationCase::kind`].
    pub name: String,
    pub kind: OperationKind,
    /// The full operation document, ready to POST as the `query` payload.
    pub query_text: String,
    /// Argument name to value, in argument declaration order.
    pub variables: IndexMap<String, serde_json::Value>,
    pub expected_output: Option<serde_json::Value>,
}

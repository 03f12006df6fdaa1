mod operation_case;
mod operation_kind;
mod selection_set;
mod synthesize;
mod values;

pub use operation_case::OperationCase;
pub use operation_kind::OperationKind;
pub use selection_set::build_selection_set;
pub use synthesize::synthesize_operations;
pub use values::ArgumentValueProvider;
pub use values::PLACEHOLDER_VALUE;
pub use values::PlaceholderValues;
pub use values::RandomValues;

#[cfg(test)]
mod tests;

/// The fully-owned structure of a [`TypeRef`](crate::introspection::TypeRef)
/// chain, modeled as a closed sum so that wrapper handling is exhaustive
/// instead of branching on kind strings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeShape {
    Named(String),
    ListOf(Box<TypeShape>),
    NonNullOf(Box<TypeShape>),
}
impl TypeShape {
    /// Recursively strip `ListOf`/`NonNullOf` wrappers and return the
    /// innermost type name.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::Named(name) => name.as_str(),
            Self::ListOf(inner) | Self::NonNullOf(inner) => inner.innermost_name(),
        }
    }
}
impl std::fmt::Display for TypeShape {
    /// Renders GraphQL type syntax: `T` for a named type, `[T]` for a list,
    /// `T!` for a non-null, and any nesting thereof. Exactly inverts the
    /// wrapping structure of the chain the shape was built from.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::ListOf(inner) => write!(f, "[{inner}]"),
            Self::NonNullOf(inner) => write!(f, "{inner}!"),
        }
    }
}

use crate::introspection::TypeKind;
use crate::introspection::TypeShape;

/// A possibly-wrapped reference to a named type, exactly as it appears on
/// the wire.
///
/// The introspection document requests `ofType` chains four levels deep, so
/// every chain a conforming server returns terminates in a named type
/// within that bound.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub of_type: Option<Box<TypeRef>>,
}
impl TypeRef {
    /// Convert the wire chain into an owned [`TypeShape`].
    ///
    /// Returns `None` for a malformed chain: a wrapper kind whose `ofType`
    /// is absent (only possible when the server truncated a chain nested
    /// more deeply than the introspection document requests) or a named
    /// kind carrying no name.
    pub fn shape(&self) -> Option<TypeShape> {
        match self.kind {
            TypeKind::List => {
                let inner = self.of_type.as_ref()?.shape()?;
                Some(TypeShape::ListOf(Box::new(inner)))
            },
            TypeKind::NonNull => {
                let inner = self.of_type.as_ref()?.shape()?;
                Some(TypeShape::NonNullOf(Box::new(inner)))
            },
            _ => self.name.clone().map(TypeShape::Named),
        }
    }

    /// The name of the named type at the end of this chain, if the chain is
    /// well-formed.
    pub fn unwrapped_name(&self) -> Option<&str> {
        if self.kind.is_wrapper() {
            self.of_type.as_ref()?.unwrapped_name()
        } else {
            self.name.as_deref()
        }
    }
}

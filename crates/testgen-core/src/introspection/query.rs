/// The full introspection document sent to the server.
///
/// The text is fixed: conforming servers answer exactly this shape per the
/// GraphQL specification, and the rest of the pipeline assumes the `TypeRef`
/// fragment's four-level `ofType` chain.
pub(crate) const INTROSPECTION_QUERY: &str = indoc::indoc! {"
    {
      __schema {
        queryType { name }
        mutationType { name }
        types {
          ...FullType
        }
      }
    }

    fragment FullType on __Type {
      kind
      name
      fields(includeDeprecated: true) {
        name
        args {
          ...InputValue
        }
        type {
          ...TypeRef
        }
        isDeprecated
        deprecationReason
      }
      inputFields {
        ...InputValue
      }
      interfaces {
        ...TypeRef
      }
      enumValues(includeDeprecated: true) {
        name
        isDeprecated
        deprecationReason
      }
      possibleTypes {
        ...TypeRef
      }
    }

    fragment InputValue on __InputValue {
      name
      description
      type { ...TypeRef }
      defaultValue
    }

    fragment TypeRef on __Type {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
          }
        }
      }
    }
"};

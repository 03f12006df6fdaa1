use rand::Rng;

/// The sentinel recorded for an argument when no realistic value generation
/// is requested.
pub const PLACEHOLDER_VALUE: &str = "PLEASE ADD INPUT";

/// Supplies the variable value recorded for each declared argument.
///
/// The synthesizer only records values into the case's variables mapping;
/// it never validates them against the argument's type, so providers are
/// free to return any JSON value.
pub trait ArgumentValueProvider {
    /// `type_name` is the argument's unwrapped (innermost) type name.
    fn value_for(&self, type_name: &str, arg_name: &str) -> serde_json::Value;
}

/// Emits the fixed placeholder sentinel for every argument, leaving real
/// values to whoever edits the generated file. This is the default strategy
/// used by the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderValues;

impl ArgumentValueProvider for PlaceholderValues {
    fn value_for(&self, _type_name: &str, _arg_name: &str) -> serde_json::Value {
        serde_json::Value::String(PLACEHOLDER_VALUE.to_string())
    }
}

/// Best-effort random values for the built-in scalar types. Anything it
/// does not recognize falls back to the placeholder sentinel.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomValues;

impl ArgumentValueProvider for RandomValues {
    fn value_for(&self, type_name: &str, _arg_name: &str) -> serde_json::Value {
        let mut rng = rand::thread_rng();
        match type_name {
            "String" => {
                let letters: String = (0..8)
                    .map(|_| rng.gen_range(b'a'..=b'z') as char)
                    .collect();
                serde_json::Value::String(letters)
            },
            "Int" => serde_json::json!(rng.gen_range(1..=100)),
            "Float" => {
                let value: f64 = rng.gen_range(1.0..=100.0);
                serde_json::json!((value * 100.0).round() / 100.0)
            },
            "Boolean" => serde_json::json!(rng.gen_bool(0.5)),
            "ID" => serde_json::Value::String(rng.gen_range(1..=1000).to_string()),
            "UUID" => {
                serde_json::Value::String("123e4567-e89b-12d3-a456-426614174000".to_string())
            },
            _ => serde_json::Value::String(PLACEHOLDER_VALUE.to_string()),
        }
    }
}

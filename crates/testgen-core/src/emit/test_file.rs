use crate::generate::OperationCase;
use indexmap::IndexMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("could not write generated tests to `{path}`: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Render the generated test module and write it to `output_path`.
///
/// The whole file is rendered into memory first and written with a single
/// call, so a failed write never leaves a truncated file behind.
pub fn write_test_file(
    cases: &[OperationCase],
    base_url: &str,
    output_path: &Path,
    endpoint: &str,
) -> Result<(), EmitError> {
    let source = render_test_file(cases, base_url, endpoint);
    std::fs::write(output_path, source).map_err(|source| EmitError::Write {
        path: output_path.display().to_string(),
        source,
    })
}

/// Render one self-contained Rust test file: a helper that posts against
/// the configured server, then one `#[test]` function per case, each
/// embedding its operation document and variables.
pub fn render_test_file(cases: &[OperationCase], base_url: &str, endpoint: &str) -> String {
    let mut out = String::new();

    out.push_str("//! GraphQL operation tests generated by `graphql-testgen`.\n");
    out.push_str("//!\n");
    out.push_str("//! Variable values and expected outputs are placeholders; edit them\n");
    out.push_str("//! before relying on these tests. Requires the `reqwest` (with the\n");
    out.push_str("//! `blocking` and `json` features) and `serde_json` dev-dependencies.\n");
    out.push_str("#![allow(non_snake_case)]\n\n");
    out.push_str("use serde_json::json;\n\n");
    out.push_str(&format!(
        "const BASE_URL: &str = {};\n",
        string_literal(base_url),
    ));
    out.push_str(&format!(
        "const ENDPOINT: &str = {};\n\n",
        string_literal(endpoint),
    ));
    out.push_str("fn post(query: &str, variables: serde_json::Value) -> reqwest::blocking::Response {\n");
    out.push_str("    reqwest::blocking::Client::new()\n");
    out.push_str("        .post(format!(\"{BASE_URL}{ENDPOINT}\"))\n");
    out.push_str("        .json(&json!({ \"query\": query, \"variables\": variables }))\n");
    out.push_str("        .send()\n");
    out.push_str("        .expect(\"request failed\")\n");
    out.push_str("}\n");

    for case in cases {
        out.push('\n');
        out.push_str(&render_test_fn(case));
    }

    out
}

fn render_test_fn(case: &OperationCase) -> String {
    let mut out = String::new();
    out.push_str("#[test]\n");
    out.push_str(&format!("fn {}_{}() {{\n", case.kind, case.name));
    out.push_str(&format!(
        "    let query = {};\n",
        raw_string_literal(&format!("\n{}\n", case.query_text)),
    ));
    out.push_str(&format!(
        "    let variables = json!({});\n",
        variables_literal(&case.variables),
    ));
    out.push_str("    let response = post(query, variables);\n");
    out.push_str("    assert!(response.status().is_success());\n");
    out.push_str("    let response_data: serde_json::Value =\n");
    out.push_str("        response.json().expect(\"response was not JSON\");\n");
    out.push_str("    println!(\"{response_data:#}\");\n");
    out.push_str("    // TODO: assert the expected response payload\n");
    out.push_str("}\n");
    out
}

/// Render the variables mapping as the body of a `json!` invocation,
/// indented to sit inside the test function.
fn variables_literal(variables: &IndexMap<String, serde_json::Value>) -> String {
    let pretty =
        serde_json::to_string_pretty(variables).unwrap_or_else(|_| "{}".to_string());
    pretty.replace('\n', "\n    ")
}

/// A plain Rust string literal for `text`, with escaping.
fn string_literal(text: &str) -> String {
    format!("{text:?}")
}

/// A raw string literal that safely embeds `text`, using however many `#`
/// marks are needed to avoid terminating the literal early.
fn raw_string_literal(text: &str) -> String {
    let mut needed_hashes = 1;
    for (index, _) in text.match_indices('"') {
        let run = text[index + 1..]
            .bytes()
            .take_while(|byte| *byte == b'#')
            .count();
        needed_hashes = needed_hashes.max(run + 1);
    }
    let hashes = "#".repeat(needed_hashes);
    format!("r{hashes}\"{text}\"{hashes}")
}

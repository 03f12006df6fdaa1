use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use std::path::PathBuf;
use testgen_core::emit::write_test_file;
use testgen_core::generate::PlaceholderValues;
use testgen_core::generate::synthesize_operations;
use testgen_core::introspection::HttpTransport;
use testgen_core::introspection::fetch_schema;

/// Scaffold one test per query/mutation field exposed by a running GraphQL
/// server.
#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="Base URL of the running GraphQL server to introspect \
             (e.g. `http://localhost:8000`).",
        name="SERVER_URL",
    )]
    server_url: String,

    #[arg(
        default_value="generated_tests.rs",
        help="Output path for the generated tests file.",
        long,
        short='o',
    )]
    output: PathBuf,

    #[arg(
        default_value="/graphql",
        help="GraphQL endpoint path on the server.",
        long,
        short='e',
    )]
    endpoint: String,
}

impl RunnableCommand for GenerateCmd {
    async fn run(self, _cli: Cli) -> CommandResult {
        let base_url = match url::Url::parse(&self.server_url) {
            Ok(url) => url,
            Err(e) => {
                return CommandResult::stderr(format_args!(
                    "{} Invalid server URL `{}`: {e}",
                    output_utils::RED_X,
                    self.server_url,
                ));
            },
        };

        let transport = HttpTransport::new(base_url.clone());
        let schema = match fetch_schema(&transport, &self.endpoint).await {
            Ok(schema) => schema,
            Err(e) => {
                return CommandResult::stderr(format_args!(
                    "{} Error fetching schema: {e}",
                    output_utils::RED_X,
                ));
            },
        };
        log::debug!("Introspected {} types.", schema.types().len());
        println!("Fetched schema");
        println!("Generating test cases...");

        let cases = synthesize_operations(&schema, &PlaceholderValues);
        if cases.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No test cases generated. Check your schema for queries \
                and mutations.",
                output_utils::RED_X,
            ));
        }

        let base_url_text = base_url.as_str().trim_end_matches('/');
        if let Err(e) = write_test_file(&cases, base_url_text, &self.output, &self.endpoint) {
            return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            ));
        }

        CommandResult::stdout(format_args!(
            "{} Wrote {} test cases to {}.",
            output_utils::GREEN_CHECK,
            cases.len(),
            self.output.display(),
        ))
    }
}

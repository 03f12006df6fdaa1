//! A docker-backed ephemeral Postgres server.

use crate::DatabaseInfo;
use crate::FixtureError;
use rand::Rng;
use std::io::BufRead;
use std::io::BufReader;
use std::process::Stdio;

/// Environment variable overriding the Postgres docker image used for
/// fixtures.
pub const POSTGRES_IMAGE_ENV: &str = "TESTGEN_POSTGRES_IMAGE";

const DEFAULT_POSTGRES_IMAGE: &str = "postgres:14-alpine";
const POSTGRES_USER: &str = "testgen";
const POSTGRES_PASSWORD: &str = "testgen";
const POSTGRES_DB: &str = "testgen";

/// A Postgres server running in a Docker container for the lifetime of this
/// value. The container is started with `--rm`, so stopping it (explicitly
/// via [`EphemeralPostgres::stop`] or on drop) also removes it.
pub struct EphemeralPostgres {
    container_name: String,
    port: u16,
    stopped: bool,
}

impl EphemeralPostgres {
    /// Start a fresh Postgres container on an unused local port and block
    /// until the server reports it is ready to accept connections.
    pub fn start() -> Result<Self, FixtureError> {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
            listener.local_addr()?.port()
        };
        let container_name = format!("testgen-db-{}", random_suffix());
        let image = std::env::var(POSTGRES_IMAGE_ENV)
            .unwrap_or_else(|_| DEFAULT_POSTGRES_IMAGE.to_string());

        tracing::info!("Starting postgres container {container_name} from {image}");
        let mut child = std::process::Command::new("docker")
            .args([
                "run",
                "--rm",
                "--name",
                &container_name,
                "-e",
                &format!("POSTGRES_USER={POSTGRES_USER}"),
                "-e",
                &format!("POSTGRES_PASSWORD={POSTGRES_PASSWORD}"),
                "-e",
                &format!("POSTGRES_DB={POSTGRES_DB}"),
                "-p",
                &format!("{port}:5432"),
                &image,
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| FixtureError::Launch {
                command: "docker run".to_string(),
                source,
            })?;

        // Postgres logs readiness on stderr.
        let stderr = child.stderr.take().ok_or(FixtureError::NeverReady)?;
        let mut ready = false;
        for line in BufReader::new(stderr).lines() {
            let line = line?;
            if line.contains("database system is ready to accept connections") {
                ready = true;
                break;
            }
        }
        if !ready {
            return Err(FixtureError::NeverReady);
        }

        Ok(Self {
            container_name,
            port,
            stopped: false,
        })
    }

    /// Connection parameters for the server's default database.
    pub fn info(&self) -> DatabaseInfo {
        DatabaseInfo {
            host: "localhost".to_string(),
            port: self.port,
            username: POSTGRES_USER.to_string(),
            password: POSTGRES_PASSWORD.to_string(),
            db_name: POSTGRES_DB.to_string(),
        }
    }

    /// Stop (and, via `--rm`, remove) the container. Dropping the value
    /// does the same.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        tracing::info!("Stopping postgres container {}", self.container_name);
        if let Err(e) = run_to_completion("docker", &["stop", &self.container_name]) {
            tracing::error!(
                "Failed to stop container '{}': {e}",
                self.container_name,
            );
        }
    }
}

impl Drop for EphemeralPostgres {
    fn drop(&mut self) {
        self.stop();
    }
}

fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..12)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect()
}

fn run_to_completion(name: &str, args: &[&str]) -> Result<(), FixtureError> {
    let command_line = format!("{name} {}", args.join(" "));
    let status = std::process::Command::new(name)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| FixtureError::Launch {
            command: command_line.clone(),
            source,
        })?;

    if !status.success() {
        return Err(FixtureError::CommandFailed {
            command: command_line,
            status,
        });
    }
    Ok(())
}

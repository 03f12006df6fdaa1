use thiserror::Error;

/// Errors provisioning the ephemeral database server or preparing it for
/// use. Individual migration-statement failures are *not* represented here;
/// those are logged and skipped (see
/// [`apply_migrations`](crate::apply_migrations)).
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
    },

    #[error("postgres container exited before becoming ready")]
    NeverReady,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("database connection failed: {0}")]
    Connect(#[from] tokio_postgres::Error),
}

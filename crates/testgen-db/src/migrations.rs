use crate::FixtureError;
use std::path::Path;
use std::path::PathBuf;

/// Collect the `*up.sql` migration files in `dir`, ordered by their leading
/// numeric ordinal (`1_create_users_up.sql`, `2_add_posts_up.sql`, ...).
///
/// Ordering is numeric, not lexical, so `10_` sorts after `2_`. Files
/// without a parseable ordinal sort last, among themselves by name.
pub fn up_migrations(dir: &Path) -> Result<Vec<PathBuf>, FixtureError> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_up_migration = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with("up.sql"));
        if path.is_file() && is_up_migration {
            files.push(path);
        }
    }

    files.sort_by_key(|path| {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        let ordinal = name
            .split('_')
            .next()
            .and_then(|prefix| prefix.parse::<u64>().ok());
        (ordinal.unwrap_or(u64::MAX), name)
    });
    Ok(files)
}

/// Apply every migration file in `dir` against `client`, in ordinal order.
///
/// A failing statement is logged as a warning and skipped; the rest of the
/// file (and run) continues. Only I/O problems reading the migration files
/// abort the run.
pub async fn apply_migrations(
    client: &tokio_postgres::Client,
    dir: &Path,
) -> Result<(), FixtureError> {
    for path in up_migrations(dir)? {
        log::debug!("Applying migration {}", path.display());
        let script = std::fs::read_to_string(&path)?;
        for statement in split_statements(&script) {
            if let Err(e) = client.batch_execute(statement).await {
                log::warn!(
                    "Skipped failing statement in {}: {e}",
                    path.display(),
                );
            }
        }
    }
    Ok(())
}

/// Split a SQL script on `;`, dropping the chunk after the final terminator
/// (usually whitespace or a trailing comment).
pub(crate) fn split_statements(script: &str) -> impl Iterator<Item = &str> {
    let mut pieces: Vec<&str> = script.split(';').collect();
    pieces.pop();
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
}

use crate::DatabaseInfo;
use crate::EphemeralPostgres;
use crate::FixtureError;
use crate::apply_migrations;
use std::path::Path;

/// One provisioned test database: a running container with migrations
/// already applied.
///
/// Lifecycle: [`DatabaseFixture::setup`] starts the container, connects,
/// applies migrations, and exposes connection parameters through
/// [`DatabaseFixture::info`]; [`DatabaseFixture::teardown`] (or drop) stops
/// the container.
pub struct DatabaseFixture {
    info: DatabaseInfo,
    server: EphemeralPostgres,
}

impl DatabaseFixture {
    pub async fn setup(migrations_dir: &Path) -> Result<Self, FixtureError> {
        let server = EphemeralPostgres::start()?;
        let info = server.info();

        let (client, connection) =
            tokio_postgres::connect(&info.url(), tokio_postgres::NoTls).await?;
        // The connection future must be polled for the client to make
        // progress.
        let connection_task = tokio::spawn(connection);

        let applied = apply_migrations(&client, migrations_dir).await;
        drop(client);
        connection_task.abort();
        applied?;

        Ok(Self { info, server })
    }

    pub fn info(&self) -> &DatabaseInfo {
        &self.info
    }

    /// Stop the underlying container. Dropping the fixture does the same.
    pub fn teardown(mut self) {
        self.server.stop();
    }
}

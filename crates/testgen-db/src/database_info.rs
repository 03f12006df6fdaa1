/// Connection parameters for a provisioned fixture database.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DatabaseInfo {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub db_name: String,
}
impl DatabaseInfo {
    /// A connection string in the form `psql` and `tokio-postgres` accept.
    pub fn url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.db_name,
        )
    }
}

//! An ephemeral relational database fixture for generated test suites.
//!
//! [`DatabaseFixture::setup`] provisions a throwaway Postgres instance in
//! Docker, applies the `*_up.sql` migrations found in a directory (in
//! ascending ordinal order), and yields [`DatabaseInfo`] connection
//! parameters; [`DatabaseFixture::teardown`] (or drop) stops the instance.
//!
//! The fixture is a sibling utility of the operation generator: nothing in
//! the generator depends on it.

mod database_info;
mod error;
mod fixture;
mod migrations;
mod postgres;

pub use database_info::DatabaseInfo;
pub use error::FixtureError;
pub use fixture::DatabaseFixture;
pub use migrations::apply_migrations;
pub use migrations::up_migrations;
pub use postgres::EphemeralPostgres;

#[cfg(test)]
mod tests;

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use crate::config::ConnectionSettings;
use crate::db::connection::{self, ConnectionInfo};
use crate::db::naming;
use crate::db::oracle::OracleSession;
use crate::db::script;
use crate::db::sequence;
use crate::db::session::SqlSession;
use crate::error::{AppError, ErrorKind};
use crate::model::Entity;

const PROVISION_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Capability surface of a target database. One implementation per
/// database; a new target means a new implementation, never a type flag.
///
/// Every operation opens its own session and releases it on all exit paths;
/// no session or other mutable state is shared between calls.
pub trait DataProvider {
    type Session: SqlSession;

    /// Open a live session, using `connection_string` or the configured
    /// default.
    fn create_connection(&self, connection_string: Option<&str>) -> Result<Self::Session>;

    /// Best-effort probe: true when a session can be opened, false on any
    /// failure. Error detail is deliberately discarded.
    fn database_exists(&self) -> bool;

    /// Create the database unless it already exists, then poll until it
    /// accepts connections (up to `tries_to_connect` attempts, skipped
    /// entirely when 0).
    fn create_database(&self, collation: Option<&str>, tries_to_connect: u32) -> Result<()>;

    /// Split `sql` into commands and run them in order on one session,
    /// stopping at the first failure. No rollback of earlier commands.
    fn execute_script(&self, sql: &str) -> Result<()>;

    /// Next identity value for the entity's table. Consuming: the backing
    /// sequence advances on every call.
    fn table_identity<E: Entity>(&self) -> Result<i64>;

    /// Raise the entity's identity so future values resume at or above
    /// `ident`. A target at or below the current value is a no-op.
    fn set_table_identity<E: Entity>(&self, ident: i64) -> Result<()>;

    fn build_connection_string(&self, info: &ConnectionInfo) -> Result<String> {
        connection::build_connection_string(info)
    }

    fn foreign_key_name(
        &self,
        foreign_table: &str,
        foreign_column: &str,
        primary_table: &str,
        primary_column: &str,
        short: bool,
    ) -> String {
        naming::foreign_key_name(
            foreign_table,
            foreign_column,
            primary_table,
            primary_column,
            short,
        )
    }

    fn index_name(&self, table: &str, column: &str, short: bool) -> String {
        naming::index_name(table, column, short)
    }

    fn backup_database(&self, file_name: &str) -> Result<()>;
    fn restore_database(&self, backup_file_name: &str) -> Result<()>;
    fn reindex_tables(&self) -> Result<()>;
}

/// Oracle-backed provider. Holds resolved connection settings only; every
/// operation is scoped to its own session.
pub struct OracleDataProvider {
    settings: ConnectionSettings,
}

impl OracleDataProvider {
    pub fn new(settings: ConnectionSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    fn admin_session(&self) -> Result<OracleSession> {
        let descriptor = connection::admin_descriptor(&self.settings);
        OracleSession::open(&self.settings, Some(&descriptor))
    }
}

impl DataProvider for OracleDataProvider {
    type Session = OracleSession;

    fn create_connection(&self, connection_string: Option<&str>) -> Result<OracleSession> {
        OracleSession::open(&self.settings, connection_string)
    }

    fn database_exists(&self) -> bool {
        OracleSession::open(&self.settings, None).is_ok()
    }

    fn create_database(&self, collation: Option<&str>, tries_to_connect: u32) -> Result<()> {
        if self.database_exists() {
            return Ok(());
        }

        let session = self.admin_session()?;
        let mut statement = format!("CREATE DATABASE {}", self.settings.service);
        if let Some(collation) = collation.filter(|text| !text.trim().is_empty()) {
            statement = format!("{} COLLATE {}", statement, collation);
        }
        debug!(%statement, "creating database");
        session.execute(&statement)?;
        session.close()?;

        if tries_to_connect == 0 {
            return Ok(());
        }

        // Slow servers can need a moment before the new database accepts
        // connections; poll with a fixed delay instead of failing outright.
        for attempt in 0..tries_to_connect {
            if self.database_exists() {
                return Ok(());
            }
            if attempt + 1 < tries_to_connect {
                thread::sleep(PROVISION_RETRY_DELAY);
            }
        }

        Err(AppError::new(
            ErrorKind::Provisioning,
            "Unable to connect to the new database. Please try one more time",
        )
        .into())
    }

    fn execute_script(&self, sql: &str) -> Result<()> {
        let commands = script::split_script(sql);
        debug!(count = commands.len(), "executing script commands");

        let session = self.create_connection(None)?;
        for command in &commands {
            session.execute(command)?;
        }
        session.close()
    }

    fn table_identity<E: Entity>(&self) -> Result<i64> {
        let session = self.create_connection(None)?;
        sequence::next_value(&session, E::TABLE)
    }

    fn set_table_identity<E: Entity>(&self, ident: i64) -> Result<()> {
        let session = self.create_connection(None)?;
        sequence::ensure_at_least(&session, E::TABLE, ident)?;
        Ok(())
    }

    fn backup_database(&self, _file_name: &str) -> Result<()> {
        Err(AppError::new(
            ErrorKind::Unsupported,
            "Database backup is not supported by the Oracle provider",
        )
        .into())
    }

    fn restore_database(&self, _backup_file_name: &str) -> Result<()> {
        Err(AppError::new(
            ErrorKind::Unsupported,
            "Database restore is not supported by the Oracle provider",
        )
        .into())
    }

    fn reindex_tables(&self) -> Result<()> {
        Err(AppError::new(
            ErrorKind::Unsupported,
            "Table re-indexing is not supported by the Oracle provider",
        )
        .into())
    }
}

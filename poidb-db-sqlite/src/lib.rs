#[macro_use]
extern crate diesel;

use std::{cell::RefCell, sync::Arc};

use anyhow::{anyhow, Result as Fallible};
use diesel::{
    connection::SimpleConnection as _,
    r2d2::{self, CustomizeConnection},
    sqlite::SqliteConnection,
    Connection as _,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness as _};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use poidb_core::usecases as uc;

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

// Persisted in the database file. The encoding can only be
// chosen before the first table is created.
const DATABASE_PRAGMAS: &str = "
PRAGMA encoding = 'UTF-8';
PRAGMA journal_mode = WAL;
";

// Released with the connection, i.e. needed for every pooled connection.
// Deleting an interest point detaches its images by a foreign key action.
const CONNECTION_PRAGMAS: &str = "
PRAGMA foreign_keys = ON;
PRAGMA synchronous = NORMAL;
PRAGMA busy_timeout = 5000;
";

#[derive(Debug)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(CONNECTION_PRAGMAS)
            .map_err(r2d2::Error::QueryError)
    }
}

/// Pooled SQLite connections.
///
/// Any number of readers may use the pool concurrently, but
/// a writer locks out everyone else. SQLite only supports a
/// single writer and fails with SQLITE_BUSY otherwise.
#[derive(Clone)]
pub struct Connections {
    pool: Arc<RwLock<ConnectionPool>>,
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // r2d2 keeps retrying an inaccessible database until it
        // times out, so try a single connection first.
        let mut conn = SqliteConnection::establish(url)?;
        conn.batch_execute(DATABASE_PRAGMAS)?;
        drop(conn);
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionPragmas))
            .build(ConnectionManager::new(url))?;
        log::debug!("Opened database {url} with {pool_size} pooled connection(s)");
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    /// Read access to the repositories.
    pub fn shared(&self) -> Fallible<DbReadOnly<'_>> {
        let pool = self.pool.read();
        let conn = pool.get().inspect_err(|err| {
            log::error!("No database connection available for reading: {err}");
        })?;
        Ok(DbReadOnly {
            conn: RefCell::new(conn),
            _pool: pool,
        })
    }

    /// Exclusive access for modifications.
    pub fn exclusive(&self) -> Fallible<DbReadWrite<'_>> {
        let pool = self.pool.write();
        let conn = pool.get().inspect_err(|err| {
            log::error!("No database connection available for writing: {err}");
        })?;
        Ok(DbReadWrite {
            conn: RefCell::new(conn),
            _pool: pool,
        })
    }
}

/// Only implements the reading repositories.
pub struct DbReadOnly<'a> {
    conn: RefCell<PooledConnection>,
    _pool: RwLockReadGuard<'a, ConnectionPool>,
}

pub struct DbReadWrite<'a> {
    conn: RefCell<PooledConnection>,
    _pool: RwLockWriteGuard<'a, ConnectionPool>,
}

/// The connection of a running [`DbReadWrite::transaction`].
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

enum TransactionError {
    Database(diesel::result::Error),
    UseCase(uc::Error),
}

impl From<diesel::result::Error> for TransactionError {
    fn from(err: diesel::result::Error) -> Self {
        Self::Database(err)
    }
}

impl DbReadWrite<'_> {
    /// Runs a use case atomically.
    ///
    /// If the use case fails all its changes are rolled back
    /// and its error is returned unchanged.
    pub fn transaction<T>(
        &mut self,
        use_case: impl FnOnce(&DbConnection) -> Result<T, uc::Error>,
    ) -> Result<T, uc::Error> {
        let conn: &mut SqliteConnection = self.conn.get_mut();
        conn.transaction(|conn| {
            let db = DbConnection {
                conn: RefCell::new(conn),
            };
            use_case(&db).map_err(TransactionError::UseCase)
        })
        .map_err(|err| match err {
            TransactionError::UseCase(err) => err,
            TransactionError::Database(err) => repo_impl::from_diesel_err(err).into(),
        })
    }
}

pub fn run_embedded_database_migrations(mut db: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    let conn: &mut SqliteConnection = db.conn.get_mut();
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!("Failed to run database migrations: {err}"))?;
    for version in &applied {
        log::debug!("Applied migration {version}");
    }
    Ok(())
}

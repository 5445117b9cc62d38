use std::{collections::HashSet, time::Duration};

use anyhow::{anyhow, Context};
use bb8::{Pool, PooledConnection};
use bb8_postgres::{
    tokio_postgres::{self, NoTls},
    PostgresConnectionManager,
};
use messaging_persistence_contracts::{Database, Transaction};
use messaging_utils::trace_instrument;
use ouroboros::self_referencing;
use tracing::trace;

pub mod contact;
pub mod recipient;

type PgClient = tokio_postgres::Client;
type PgConnection<'a> = PooledConnection<'a, PostgresConnectionManager<NoTls>>;
type PgPooledConnection = PgConnection<'static>;
type PgTransaction<'a> = tokio_postgres::Transaction<'a>;

#[derive(Debug, Clone)]
pub struct PostgresDatabase {
    pool: Pool<PostgresConnectionManager<NoTls>>,
}

#[derive(Debug)]
pub struct PostgresDatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

impl PostgresDatabase {
    pub async fn connect(config: &PostgresDatabaseConfig) -> anyhow::Result<Self> {
        let manager = PostgresConnectionManager::new(config.url.parse()?, NoTls);
        let pool = Pool::builder()
            .max_size(config.max_connections)
            .min_idle(config.min_connections)
            .connection_timeout(config.acquire_timeout)
            .idle_timeout(config.idle_timeout)
            .max_lifetime(config.max_lifetime)
            .build(manager)
            .await?;

        Ok(Self { pool })
    }

    #[cfg(feature = "dummy")]
    pub async fn dummy() -> Self {
        let manager = PostgresConnectionManager::new("host=dummy".parse().unwrap(), NoTls);
        Self {
            pool: Pool::builder().build_unchecked(manager),
        }
    }

    pub async fn list_migrations(&self) -> anyhow::Result<Vec<MigrationStatus>> {
        let conn = self.migration_connection().await?;
        migration_status(&conn).await
    }

    /// Applies up to `cnt` pending migrations in order and returns their names.
    pub async fn run_migrations(&self, cnt: Option<usize>) -> anyhow::Result<Vec<&'static str>> {
        self.migrate(Direction::Up, cnt).await
    }

    /// Reverts up to `cnt` applied migrations, newest first, and returns their
    /// names.
    pub async fn revert_migrations(&self, cnt: Option<usize>) -> anyhow::Result<Vec<&'static str>> {
        self.migrate(Direction::Down, cnt).await
    }

    /// Reverts every applied migration and drops the migration bookkeeping.
    pub async fn reset(&self) -> anyhow::Result<()> {
        self.migrate(Direction::Down, None).await?;
        self.migration_connection()
            .await?
            .batch_execute("drop table _migrations;")
            .await
            .context("Failed to drop migrations table")
    }

    async fn migrate(
        &self,
        direction: Direction,
        cnt: Option<usize>,
    ) -> anyhow::Result<Vec<&'static str>> {
        let mut conn = self.migration_connection().await?;

        let status = migration_status(&conn).await?;
        let selected = match direction {
            Direction::Up => status
                .into_iter()
                .filter(|x| !x.applied)
                .take(cnt.unwrap_or(usize::MAX))
                .collect::<Vec<_>>(),
            Direction::Down => status
                .into_iter()
                .rev()
                .filter(|x| x.applied)
                .take(cnt.unwrap_or(usize::MAX))
                .collect(),
        };

        let mut done = Vec::with_capacity(selected.len());
        for MigrationStatus { migration, .. } in selected {
            let (sql, record) = match direction {
                Direction::Up => (migration.up, "insert into _migrations (name) values ($1);"),
                Direction::Down => (migration.down, "delete from _migrations where name=$1;"),
            };

            let txn = conn
                .transaction()
                .await
                .context("Failed to begin transaction")?;
            txn.batch_execute(sql)
                .await
                .with_context(|| format!("Failed to {direction} migration {}", migration.name))?;
            txn.execute(record, &[&migration.name])
                .await
                .with_context(|| format!("Failed to record migration {}", migration.name))?;
            txn.commit().await.context("Failed to commit transaction")?;

            trace!(name = migration.name, %direction, "migration");
            done.push(migration.name);
        }

        Ok(done)
    }

    async fn migration_connection(&self) -> anyhow::Result<PgConnection<'_>> {
        let conn = self
            .pool
            .get()
            .await
            .context("Failed to acquire database connection")?;
        conn.batch_execute("create table if not exists _migrations (name text primary key);")
            .await
            .context("Failed to create migrations table")?;
        Ok(conn)
    }
}

impl Database for PostgresDatabase {
    type Transaction = PostgresTransaction;

    async fn begin_transaction(&self) -> anyhow::Result<Self::Transaction> {
        trace!("begin transaction");

        let conn = self
            .pool
            .get_owned()
            .await
            .context("Failed to acquire database connection")?;

        PostgresTransactionAsyncSendTryBuilder {
            conn,
            txn_builder: |conn| Box::pin(async move { conn.transaction().await.map(Some) }),
        }
        .try_build()
        .await
        .context("Failed to begin transaction")
    }

    #[trace_instrument(skip(self))]
    async fn ping(&self) -> anyhow::Result<()> {
        let conn = self
            .pool
            .get()
            .await
            .context("Failed to acquire database connection")?;

        conn.query_one("select 1", &[])
            .await
            .map_err(Into::into)
            .map(|row| row.get(0))
            .and_then(|res: i32| {
                (res == 1)
                    .then_some(())
                    .ok_or_else(|| anyhow!("Expected a result of 1, got {res} instead"))
            })
            .context("Failed to ping database")
    }
}

#[self_referencing]
pub struct PostgresTransaction {
    conn: PgPooledConnection,
    #[borrows(mut conn)]
    #[covariant]
    txn: Option<PgTransaction<'this>>,
}

impl PostgresTransaction {
    /// The inner transaction is only taken by `commit` and `rollback`, which
    /// consume `self`.
    fn txn(&self) -> &PgTransaction<'_> {
        self.borrow_txn()
            .as_ref()
            .unwrap_or_else(|| unreachable!("transaction has already been finished"))
    }
}

impl Transaction for PostgresTransaction {
    async fn commit(mut self) -> anyhow::Result<()> {
        trace!("commit transaction");

        self.with_txn_mut(|txn| txn.take())
            .context("Transaction has already been finished")?
            .commit()
            .await
            .context("Failed to commit transaction")
    }

    async fn rollback(mut self) -> anyhow::Result<()> {
        trace!("rollback transaction");

        self.with_txn_mut(|txn| txn.take())
            .context("Transaction has already been finished")?
            .rollback()
            .await
            .context("Failed to rollback transaction")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub name: &'static str,
    pub up: &'static str,
    pub down: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct MigrationStatus {
    pub migration: Migration,
    pub applied: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Up => "apply",
            Self::Down => "revert",
        })
    }
}

macro_rules! migration {
    ($name:literal) => {
        Migration {
            name: $name,
            up: include_str!(concat!("../migrations/", $name, ".up.sql")),
            down: include_str!(concat!("../migrations/", $name, ".down.sql")),
        }
    };
}

pub const MIGRATIONS: &[Migration] = &[
    migration!("00001_contact_messages"),
    migration!("00002_recipients"),
];

async fn migration_status(conn: &PgClient) -> anyhow::Result<Vec<MigrationStatus>> {
    let applied = conn
        .query("select name from _migrations;", &[])
        .await
        .context("Failed to list migrations")?
        .into_iter()
        .map(|row| row.get(0))
        .collect::<HashSet<String>>();

    Ok(MIGRATIONS
        .iter()
        .map(|&migration| MigrationStatus {
            migration,
            applied: applied.contains(migration.name),
        })
        .collect())
}

/// Defines `<NAME>_COLS`, the columns qualified with the table alias for
/// selects, and `<NAME>_COL_NAMES`, the bare column names for `returning`.
macro_rules! columns {
    ($ident:ident as $alias:literal: $fst:literal $(, $col:literal)* $(,)?) => {
        ::paste::paste! {
            const [< $ident:upper _COLS >]: &str = ::core::concat!(
                $alias, ".\"", $fst, '"' $(, ", ", $alias, ".\"", $col, '"')*
            );
            const [< $ident:upper _COL_NAMES >]: &str = ::core::concat!(
                '"', $fst, '"' $(, ", \"", $col, '"')*
            );
        }
    };
}
use columns;

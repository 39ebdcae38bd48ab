// src/infrastructure/session.rs
//! One database transaction shared by the repositories of a unit of work.

use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::map_sqlx;
use sqlx::{Database, Pool, Transaction};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

type Slot<DB> = Option<Transaction<'static, DB>>;

/// Handle on an open transaction.
///
/// Clones share the same transaction. Once `commit` or `rollback` has run
/// the slot is empty and every further access fails with a persistence
/// error. When the last clone is dropped while the slot still holds the
/// transaction, sqlx rolls it back and returns the connection to the pool.
pub struct Session<DB: Database> {
    slot: Arc<Mutex<Slot<DB>>>,
}

impl<DB: Database> Clone for Session<DB> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

fn session_closed() -> DomainError {
    DomainError::Persistence("session is closed".into())
}

impl<DB: Database> Session<DB> {
    pub async fn begin(pool: &Pool<DB>) -> DomainResult<Self> {
        let tx = pool.begin().await.map_err(map_sqlx)?;
        Ok(Self {
            slot: Arc::new(Mutex::new(Some(tx))),
        })
    }

    /// Exclusive access to the transaction for the duration of one query.
    pub async fn lock(&self) -> MutexGuard<'_, Slot<DB>> {
        self.slot.lock().await
    }

    /// Borrow the connection behind a locked slot.
    pub fn connection<'g>(
        guard: &'g mut MutexGuard<'_, Slot<DB>>,
    ) -> DomainResult<&'g mut DB::Connection> {
        let slot: &'g mut Slot<DB> = guard;
        slot.as_mut().map(|tx| &mut **tx).ok_or_else(session_closed)
    }

    pub async fn commit(&self) -> DomainResult<()> {
        let tx = self.slot.lock().await.take().ok_or_else(session_closed)?;
        tx.commit().await.map_err(map_sqlx)
    }

    pub async fn rollback(&self) -> DomainResult<()> {
        let tx = self.slot.lock().await.take().ok_or_else(session_closed)?;
        tx.rollback().await.map_err(map_sqlx)
    }

    /// Whether the transaction is still pending. A slot that is locked at
    /// the moment of the call counts as open.
    pub fn is_open(&self) -> bool {
        self.slot.try_lock().map_or(true, |slot| slot.is_some())
    }
}

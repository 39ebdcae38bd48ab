// src/application/ports/unit_of_work.rs
//! Transaction boundary for command handlers.
//!
//! A [`UnitOfWork`] owns exactly one database transaction and the
//! repositories bound to it. `commit` and `rollback` consume the unit, so
//! nothing can touch its session once the scope has ended. A unit that is
//! dropped without committing rolls its transaction back, which covers early
//! returns and `?` propagation alike.

use crate::domain::{
    article::ArticleRepository, errors::DomainResult, user::UserRepository,
};
use async_trait::async_trait;

#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> &dyn UserRepository;

    fn articles(&self) -> &dyn ArticleRepository;

    /// Apply every staged change atomically.
    async fn commit(self: Box<Self>) -> DomainResult<()>;

    /// Discard every staged change.
    async fn rollback(self: Box<Self>) -> DomainResult<()>;
}

/// Opens units of work against one backend. Injected into the services in
/// place of a process-wide session factory.
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>>;
}

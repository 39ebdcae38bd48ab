use std::sync::Arc;

use crate::application::ports::unit_of_work::UnitOfWorkFactory;

/// Read-side use cases. Each call opens its own unit of work and rolls it
/// back once the rows are read.
pub struct ArticleQueryService {
    pub(super) uow: Arc<dyn UnitOfWorkFactory>,
}

impl ArticleQueryService {
    pub fn new(uow: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { uow }
    }
}

use std::sync::Arc;

use crate::application::ports::unit_of_work::UnitOfWorkFactory;

pub struct UserQueryService {
    pub(super) uow: Arc<dyn UnitOfWorkFactory>,
}

impl UserQueryService {
    pub fn new(uow: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { uow }
    }
}

use std::sync::Arc;

use crate::application::ports::unit_of_work::UnitOfWorkFactory;

pub struct UserCommandService {
    pub(super) uow: Arc<dyn UnitOfWorkFactory>,
}

impl UserCommandService {
    pub fn new(uow: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { uow }
    }
}

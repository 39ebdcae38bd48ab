// tests/support/mocks.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use blog_core::application::ports::time::Clock;
use blog_core::application::ports::unit_of_work::{UnitOfWork, UnitOfWorkFactory};
use blog_core::domain::errors::{DomainError, DomainResult};

/// Clock that returns a settable instant.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::at(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Factory whose database is never reachable.
pub struct UnavailableFactory;

#[async_trait]
impl UnitOfWorkFactory for UnavailableFactory {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        Err(DomainError::Persistence("database unavailable".into()))
    }
}

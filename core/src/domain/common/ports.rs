use chrono::{DateTime, Utc};

/// Source of the current instant. Every "today" in the domain derives from it.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Wall-clock source; tests swap in a fixed clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

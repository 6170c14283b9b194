pub mod memory;
pub mod postgres;

pub use memory::RegistrationStore;
pub use postgres::EnrollmentStore;

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A storage backend for one kind of intake submission.
///
/// Implementations assign the record id; the caller supplies the timestamp
/// from the application clock. Stored records are never mutated or deleted.
#[async_trait]
pub trait IntakeStore: Send + Sync {
    type Form: Send + 'static;
    type Record: Send + 'static;

    async fn create(&self, form: Self::Form, created_at: DateTime<Utc>) -> Result<Self::Record>;

    /// Whether the backend can currently accept writes. In-memory backends
    /// are always healthy.
    async fn healthy(&self) -> bool {
        true
    }
}

//! The service abstraction the HTTP layer delegates to.
//!
//! Handlers hold the service as `Arc<dyn TrailerService>` so the real
//! implementation is substitutable (the in-memory catalog in production
//! wiring, fakes in tests).

use async_trait::async_trait;

use crate::error::CoreError;
use crate::trailer::{NewTrailer, TrailerDetail, TrailerSummary, UpdateTrailer};
use crate::types::DbId;

/// Result alias for service operations.
pub type ServiceResult<T> = Result<T, CoreError>;

/// The five trailer operations.
///
/// Filter strings are opaque here: whatever arrives on the wire is handed
/// through unparsed, and each implementation decides what it means.
#[async_trait]
pub trait TrailerService: Send + Sync {
    /// List all trailers, optionally narrowed by a filter expression.
    async fn list(&self, filter: Option<&str>) -> ServiceResult<Vec<TrailerSummary>>;

    /// Fetch one trailer by id.
    async fn get(&self, id: DbId) -> ServiceResult<TrailerDetail>;

    /// Create a trailer. The returned record carries the assigned id.
    async fn create(&self, input: NewTrailer) -> ServiceResult<TrailerDetail>;

    /// Update an existing trailer; the target id travels in the payload.
    async fn update(&self, input: UpdateTrailer) -> ServiceResult<()>;

    /// Delete a trailer by id.
    async fn delete(&self, id: DbId) -> ServiceResult<()>;
}

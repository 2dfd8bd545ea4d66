//! In-memory trailer catalog.
//!
//! Default [`TrailerService`] implementation backing the server binary and
//! the integration tests. Records live in a `RwLock<HashMap>`; ids are
//! assigned from a monotonically increasing counter and never reused.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::service::{ServiceResult, TrailerService};
use crate::trailer::{NewTrailer, TrailerDetail, TrailerSummary, UpdateTrailer};
use crate::types::DbId;

/// Entity name used in `NotFound` errors.
const ENTITY: &str = "Trailer";

#[derive(Default)]
pub struct MemoryCatalog {
    inner: RwLock<CatalogInner>,
}

#[derive(Default)]
struct CatalogInner {
    trailers: HashMap<DbId, TrailerDetail>,
    next_id: DbId,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match on title or genre.
    ///
    /// The filter expression is opaque at the HTTP boundary; this is the
    /// catalog's own reading of it.
    fn matches(trailer: &TrailerDetail, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        trailer.title.to_lowercase().contains(&needle)
            || trailer
                .genre
                .as_deref()
                .is_some_and(|g| g.to_lowercase().contains(&needle))
    }
}

#[async_trait]
impl TrailerService for MemoryCatalog {
    async fn list(&self, filter: Option<&str>) -> ServiceResult<Vec<TrailerSummary>> {
        let inner = self.inner.read().await;

        let mut summaries: Vec<TrailerSummary> = inner
            .trailers
            .values()
            .filter(|t| match filter {
                Some(f) if !f.is_empty() => Self::matches(t, f),
                _ => true,
            })
            .map(TrailerDetail::summary)
            .collect();

        // HashMap iteration order is arbitrary; present a stable listing.
        summaries.sort_by_key(|s| s.id);

        Ok(summaries)
    }

    async fn get(&self, id: DbId) -> ServiceResult<TrailerDetail> {
        let inner = self.inner.read().await;

        inner
            .trailers
            .get(&id)
            .cloned()
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    async fn create(&self, input: NewTrailer) -> ServiceResult<TrailerDetail> {
        if input.title.trim().is_empty() {
            return Err(CoreError::Validation("title must not be empty".into()));
        }

        let mut inner = self.inner.write().await;

        inner.next_id += 1;
        let trailer = TrailerDetail {
            id: inner.next_id,
            title: input.title,
            description: input.description,
            genre: input.genre,
            video_url: input.video_url,
            duration_secs: input.duration_secs,
            release_year: input.release_year,
            created_at: chrono::Utc::now(),
        };

        inner.trailers.insert(trailer.id, trailer.clone());

        Ok(trailer)
    }

    async fn update(&self, input: UpdateTrailer) -> ServiceResult<()> {
        let mut inner = self.inner.write().await;

        let trailer = inner
            .trailers
            .get_mut(&input.id)
            .ok_or(CoreError::NotFound {
                entity: ENTITY,
                id: input.id,
            })?;

        if let Some(title) = input.title {
            if title.trim().is_empty() {
                return Err(CoreError::Validation("title must not be empty".into()));
            }
            trailer.title = title;
        }
        if let Some(description) = input.description {
            trailer.description = Some(description);
        }
        if let Some(genre) = input.genre {
            trailer.genre = Some(genre);
        }
        if let Some(video_url) = input.video_url {
            trailer.video_url = Some(video_url);
        }
        if let Some(duration_secs) = input.duration_secs {
            trailer.duration_secs = Some(duration_secs);
        }
        if let Some(release_year) = input.release_year {
            trailer.release_year = Some(release_year);
        }

        Ok(())
    }

    async fn delete(&self, id: DbId) -> ServiceResult<()> {
        let mut inner = self.inner.write().await;

        inner
            .trailers
            .remove(&id)
            .map(|_| ())
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }
}

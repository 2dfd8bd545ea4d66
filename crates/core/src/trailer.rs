//! Trailer DTO shapes crossing the HTTP boundary.
//!
//! These are plain data carriers: the HTTP layer never mutates them, and
//! their lifetime is bounded to a single request/response exchange.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Compact trailer view returned by the list operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailerSummary {
    pub id: DbId,
    pub title: String,
    pub genre: Option<String>,
}

/// Full trailer record returned by get and create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailerDetail {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub video_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub release_year: Option<i32>,
    pub created_at: Timestamp,
}

impl TrailerDetail {
    /// Project the full record down to its list view.
    pub fn summary(&self) -> TrailerSummary {
        TrailerSummary {
            id: self.id,
            title: self.title.clone(),
            genre: self.genre.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Payload for creating a trailer. The id is assigned by the service,
/// never supplied by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTrailer {
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub video_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub release_year: Option<i32>,
}

/// Payload for updating a trailer. Carries the target id in the body;
/// fields left out keep their current value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTrailer {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub video_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub release_year: Option<i32>,
}

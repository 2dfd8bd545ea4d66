//! Route definitions for the trailer resource.
//!
//! ```text
//! GET    /              list_trailers (query: filters)
//! POST   /              create_trailer
//! PUT    /              update_trailer (id in body)
//! GET    /{id}          get_trailer
//! DELETE /{id}          delete_trailer
//! ```
//!
//! The delete id comes from the URL path; any request body on DELETE is
//! ignored.

use axum::routing::get;
use axum::Router;

use crate::handlers::trailers;
use crate::state::AppState;

/// Trailer routes -- mounted at `/trailers`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(trailers::list_trailers)
                .post(trailers::create_trailer)
                .put(trailers::update_trailer),
        )
        .route(
            "/{id}",
            get(trailers::get_trailer).delete(trailers::delete_trailer),
        )
}

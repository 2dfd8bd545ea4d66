pub mod health;
pub mod trailers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /trailers            list (GET), create (POST), update (PUT)
/// /trailers/{id}       get (GET), delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/trailers", trailers::router())
}

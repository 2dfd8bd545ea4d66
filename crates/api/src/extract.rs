//! JSON body extraction with the flat 400 rejection surface.
//!
//! Axum's stock `Json` extractor answers 415 for a missing content type and
//! 422 for type mismatches; the trailer resource contract is a uniform 400
//! for anything that fails to parse. This wrapper folds every rejection into
//! [`AppError::BadRequest`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

/// Drop-in replacement for `axum::Json` in handler signatures.
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(reject(rejection)),
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

fn reject(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

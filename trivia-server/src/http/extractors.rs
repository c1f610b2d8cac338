//! Custom Axum extractors
//!
//! Each one turns axum's plain-text rejections into [`ApiError`] so every
//! failure leaves the server as the same JSON shape.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{Pagination, PaginationParams, ValidationError};

/// JSON body with structured rejections
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Extract and validate `?page=N` (defaults to the first page)
pub struct PageQuery(pub Pagination);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<PaginationParams> =
            Query::from_request_parts(parts, state).await?;

        Ok(Self(Pagination::try_from(params)?))
    }
}

/// Extract and validate a positive integer id from path
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "id",
                    reason: rejection.body_text(),
                })
            })?;

        let invalid = || {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                reason: format!("expected a positive integer, got '{}'", id),
            })
        };

        let parsed: i32 = id.trim().parse().map_err(|_| invalid())?;
        if parsed < 1 {
            return Err(invalid());
        }

        Ok(Self(parsed))
    }
}

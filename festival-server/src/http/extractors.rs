//! Custom Axum extractors
//!
//! Rejections are `ApiError`s so malformed input produces the same JSON
//! error body as every other failure.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Parse a path id: ASCII digits only, must fit in `i64`.
///
/// Rejects signs, whitespace and the empty string.
pub fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// `{id}` from `/festivals/{id}` and `/festivals/{id}/performances`
pub struct FestivalId(pub i64);

impl<S> FromRequestParts<S> for FestivalId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidFestivalId)?;

        parse_id(&raw).map(Self).ok_or(ApiError::InvalidFestivalId)
    }
}

/// `{id}` and `{performance_id}` from `/festivals/{id}/performances/{performance_id}`
pub struct PerformancePath {
    pub festival_id: i64,
    pub performance_id: i64,
}

impl<S> FromRequestParts<S> for PerformancePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((festival, performance)): Path<(String, String)> =
            Path::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InvalidFestivalId)?;

        // Festival id is checked first, matching route order
        let festival_id = parse_id(&festival).ok_or(ApiError::InvalidFestivalId)?;
        let performance_id = parse_id(&performance).ok_or(ApiError::InvalidPerformanceId)?;

        Ok(Self {
            festival_id,
            performance_id,
        })
    }
}

/// JSON body decoded into `T`.
///
/// Unlike `axum::Json` the content type is not checked. Unreadable
/// bodies, malformed JSON, missing fields and wrong types all reject
/// with `Invalid request payload`; unknown fields are ignored.
pub struct JsonPayload<T>(pub T);

impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "failed to read request body");
            ApiError::InvalidPayload
        })?;

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            tracing::debug!(error = %e, "rejected request payload");
            ApiError::InvalidPayload
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digits() {
        assert_eq!(parse_id("0"), Some(0));
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("007"), Some(7));
    }

    #[test]
    fn rejects_non_digits() {
        for bad in ["", "-1", "+1", " 1", "1.5", "abc", "1e3"] {
            assert_eq!(parse_id(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn rejects_overflow() {
        assert_eq!(parse_id("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_id("9223372036854775808"), None);
    }
}

//! Request body extraction shared by the POST handlers.
//!
//! Clients may send either JSON or URL-encoded form bodies. A request whose
//! content type is neither, or whose JSON body is empty, is read as an empty
//! object so the handler's required-field check produces the 400.

use axum::body::Bytes;
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::de::DeserializeOwned;

/// Body decoded from `application/json` or `application/x-www-form-urlencoded`.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

/// Why a body could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum BodyRejection {
    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Form(#[from] FormRejection),
}

impl BodyRejection {
    /// The body parsed, but a field has the wrong type.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            BodyRejection::Json(JsonRejection::JsonDataError(_))
                | BodyRejection::Form(FormRejection::FailedToDeserializeForm(_))
                | BodyRejection::Form(FormRejection::FailedToDeserializeFormBody(_))
        )
    }

    pub fn status(&self) -> StatusCode {
        match self {
            BodyRejection::Json(rejection) => rejection.status(),
            BodyRejection::Form(rejection) => rejection.status(),
        }
    }

    pub fn body_text(&self) -> String {
        match self {
            BodyRejection::Json(rejection) => rejection.body_text(),
            BodyRejection::Form(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        (self.status(), self.body_text()).into_response()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return BodyKind::Other;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence == "application/json" || essence.ends_with("+json") {
        BodyKind::Json
    } else if essence == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(req.headers()) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(JsonRejection::from)?;
                if bytes.is_empty() {
                    return Ok(Self(T::default()));
                }
                let Json(value) = Json::<T>::from_bytes(&bytes)?;
                Ok(Self(value))
            }
            BodyKind::Form => {
                let Form(value) = Form::<T>::from_request(req, state).await?;
                Ok(Self(value))
            }
            BodyKind::Other => Ok(Self(T::default())),
        }
    }
}

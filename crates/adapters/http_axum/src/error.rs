//! HTTP error response mapping.

use axum::Json;
use axum::extract::Request;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use parklot_domain::error::{ParkingError, StateError};
use parklot_domain::time::{Timestamp, now};

/// JSON error body returned by API endpoints.
///
/// `path` is filled in by [`attach_request_path`]; the error itself does not
/// know which request produced it.
#[derive(Clone, Serialize)]
pub(crate) struct ErrorBody {
    timestamp: Timestamp,
    path: String,
    error: String,
    code: u16,
}

impl ErrorBody {
    fn new(status: StatusCode, error: String) -> Self {
        Self {
            timestamp: now(),
            path: String::new(),
            error,
            code: status.as_u16(),
        }
    }

    fn respond(self, status: StatusCode) -> Response {
        let mut response = (status, Json(self.clone())).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// Middleware that stamps the request path into error bodies produced by
/// [`ApiError`].
pub(crate) async fn attach_request_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    let Some(body) = response.extensions().get::<ErrorBody>().cloned() else {
        return response;
    };
    ErrorBody { path, ..body }.respond(response.status())
}

/// Maps [`ParkingError`] (and malformed request bodies) to an HTTP response
/// with appropriate status code.
pub enum ApiError {
    Domain(ParkingError),
    Body(JsonRejection),
}

impl From<ParkingError> for ApiError {
    fn from(err: ParkingError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            Self::Domain(err) => err,
            Self::Body(rejection) => {
                return ErrorBody::new(StatusCode::BAD_REQUEST, rejection.body_text())
                    .respond(StatusCode::BAD_REQUEST);
            }
        };

        let (status, message) = match &err {
            ParkingError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ParkingError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ParkingError::State(err @ StateError::VehicleStillParked { .. }) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ParkingError::State(err) => (StatusCode::CONFLICT, err.to_string()),
            ParkingError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        ErrorBody::new(status, message).respond(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parklot_domain::error::{NotFoundError, ValidationError};

    fn status_of(err: impl Into<ParkingError>) -> StatusCode {
        ApiError::from(err.into()).into_response().status()
    }

    #[test]
    fn should_map_validation_to_bad_request() {
        assert_eq!(status_of(ValidationError::EmptyPlate), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_to_404() {
        assert_eq!(status_of(NotFoundError::new("ABC123")), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_duplicate_and_already_exited_to_conflict() {
        let plate = "ABC123".to_string();
        assert_eq!(
            status_of(StateError::DuplicateActiveVehicle {
                plate: plate.clone()
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(StateError::AlreadyExited { plate }),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn should_map_still_parked_to_bad_request() {
        assert_eq!(
            status_of(StateError::VehicleStillParked {
                plate: "ABC123".to_string()
            }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn should_hide_storage_details() {
        let err = ParkingError::Storage(Box::new(std::io::Error::other("disk on fire")));
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! JSON extractor that runs the DTO's `Validate` impl before the handler.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with validation.
///
/// Deserialization failures and rule violations both reject with
/// [`AppError`] so no handler runs on invalid input.
///
/// # Example
/// ```ignore
/// async fn create_material(
///     State(state): State<MaterialState>,
///     ValidatedJson(input): ValidatedJson<CreateMaterial>,
/// ) -> MaterialResult<impl IntoResponse> {
///     // `input` already passed validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{into_result, require_min};
    use axum::{Router, body::Body, http::StatusCode, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;
    use validator::ValidationErrors;

    #[derive(Deserialize)]
    struct Stock {
        quantity: i64,
    }

    impl Validate for Stock {
        fn validate(&self) -> Result<(), ValidationErrors> {
            let mut errors = ValidationErrors::new();
            require_min(&mut errors, "quantity", self.quantity, 0);
            into_result(errors)
        }
    }

    async fn accept(ValidatedJson(stock): ValidatedJson<Stock>) -> String {
        stock.quantity.to_string()
    }

    async fn send(body: &'static str) -> StatusCode {
        let app = Router::new().route("/", post(accept));
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_valid_body_reaches_handler() {
        assert_eq!(send(r#"{"quantity": 3}"#).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rule_violation_is_bad_request() {
        assert_eq!(send(r#"{"quantity": -1}"#).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_type_is_bad_request() {
        assert_eq!(send(r#"{"quantity": "lots"}"#).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        assert_eq!(send("{").await, StatusCode::BAD_REQUEST);
    }
}

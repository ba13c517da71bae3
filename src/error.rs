use {
    actix_web::{http::StatusCode, HttpResponse, ResponseError},
    serde::Serialize,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found")]
    NotFound,

    #[error("Internal Server Error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        actix_web::{body::to_bytes, http::header},
        serde_json::{json, Value},
    };

    async fn body_of(error: ApiError) -> (StatusCode, Option<String>, Value) {
        let response = error.error_response();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .map(str::to_owned);
        let bytes = to_bytes(response.into_body()).await.unwrap();

        (status, content_type, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn not_found_is_json() {
        let (status, content_type, body) = body_of(ApiError::NotFound).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, json!({ "detail": "Not Found" }));
    }

    #[actix_web::test]
    async fn internal_hides_details() {
        let (status, _, body) = body_of(ApiError::Internal).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "detail": "Internal Server Error" }));
    }
}

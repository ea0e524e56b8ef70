//! # Application Error Handling System
//!
//! 폼 데이터 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 일관된 JSON 응답으로 변환되도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `InvalidFields` | 400 Bad Request | 필드별 검증 실패 (여러 필드 동시 보고) |
//! | `ValidationError` | 400 Bad Request | 요청 본문 파싱 실패 등 단일 메시지 검증 오류 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 폼 데이터 ID |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 연결/쿼리 오류 |
//! | `InternalError` | 500 Internal Server Error | 해싱 실패 등 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "Form data not found"
//! }
//! ```
//!
//! 필드 검증 실패의 경우 `errors` 배열이 추가됩니다:
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "Validation failed",
//!   "errors": [
//!     { "field": "nationalId", "message": "National ID must be exactly 12 digits" }
//!   ]
//! }
//! ```

use log::error;
use serde_json::json;
use thiserror::Error;

use crate::domain::dto::form_data::validation::FieldViolation;

/// 애플리케이션 전역 에러 타입
///
/// 폼 데이터 서비스에서 발생할 수 있는 모든 에러를 포괄하는 열거형입니다.
/// 핸들러에서 `?`로 전파하면 자동으로 HTTP 응답으로 변환됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.insert_one(&record).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // 조회 결과 없음
/// repo.find_by_id(id).await?
///     .ok_or_else(|| AppError::NotFound("Form data not found".to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 필드별 검증 실패 (400 Bad Request)
    ///
    /// 위반된 모든 필드를 한 번에 전달하여 클라이언트가
    /// 폼 전체의 오류를 동시에 표시할 수 있도록 합니다.
    #[error("Validation failed")]
    InvalidFields(Vec<FieldViolation>),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::InvalidFields(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 응답 전에 서버 로그에 기록됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            error!("❌ 요청 처리 실패: {}", self);
        }

        let body = match self {
            AppError::InvalidFields(violations) => json!({
                "success": false,
                "message": self.to_string(),
                "errors": violations,
            }),
            _ => json!({
                "success": false,
                "message": self.to_string(),
            }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let hash = web::block(move || bcrypt::hash(password, cost))
///     .await
///     .context("Password hashing task failed")?
///     .context("Password hashing failed")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Invalid JSON body".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Form data not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.to_string(), "Form data not found");
    }

    #[test]
    fn test_server_error_responses() {
        let database = AppError::DatabaseError("connection refused".to_string());
        let internal = AppError::InternalError("Something went wrong".to_string());

        assert_eq!(database.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_invalid_fields_response_lists_every_violation() {
        let error = AppError::InvalidFields(vec![
            FieldViolation::new("email", "Email must be a valid email address"),
            FieldViolation::new("nationalId", "National ID must be exactly 12 digits"),
        ]);
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
        assert_eq!(body["errors"][1]["field"], "nationalId");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("underlying error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("underlying error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}

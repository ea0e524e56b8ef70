//! # Form Data HTTP Handlers
//!
//! 폼 데이터 CRUD 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/formdata` | 폼 데이터 저장 | 200 / 400 |
//! | `GET` | `/api/formdata` | 전체 목록 조회 | 200 |
//! | `GET` | `/api/formdata/{id}` | 단건 조회 | 200 / 404 |
//! | `PUT` | `/api/formdata/{id}` | 전체 필드 수정 | 200 / 400 / 404 |
//! | `DELETE` | `/api/formdata/{id}` | 삭제 | 200 / 404 |
//!
//! 생성과 수정은 같은 검증 규칙을 적용하며, 위반된 모든 필드를 한 번에 반환합니다.
//! 문자열이 아닌 필드 값도 해당 필드의 위반으로 보고됩니다. JSON 문법 오류만
//! 필드 목록 없이 `{success:false, message}`로 응답합니다.
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "Validation failed",
//!   "errors": [{ "field": "nationalId", "message": "National ID must be exactly 12 digits" }]
//! }
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use log::warn;
use serde_json::Value;

use crate::core::errors::AppError;
use crate::domain::dto::form_data::{validate_form_body, ValidatedFormData};
use crate::services::form_data::FormDataService;

/// 요청 본문을 검증하고, 실패 시 위반 필드 목록을 담은 에러로 변환합니다.
///
/// 본문은 `Value`로 받아 필드 타입 불일치도 필드별 위반으로 보고합니다.
fn validate_request(payload: web::Json<Value>) -> Result<ValidatedFormData, AppError> {
    validate_form_body(payload.into_inner()).map_err(|violations| {
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        warn!("⚠️ 폼 데이터 검증 실패: fields={:?}", fields);
        AppError::InvalidFields(violations)
    })
}

/// 폼 데이터 저장
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/formdata \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Alice","email":"alice@example.com","password":"p1","contact":"555-0100",
///        "address":"1 Main St","nationalId":"123456789012","dateOfBirth":"1990-01-01"}'
/// ```
#[post("")]
pub async fn create_form_data(
    service: web::Data<FormDataService>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let data = validate_request(payload)?;
    let response = service.create(data).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 전체 폼 데이터 목록 조회
#[get("")]
pub async fn list_form_data(
    service: web::Data<FormDataService>,
) -> Result<HttpResponse, AppError> {
    let records = service.list().await?;

    Ok(HttpResponse::Ok().json(records))
}

/// ID로 폼 데이터 조회
///
/// ObjectId 형식이 아닌 ID도 404로 응답합니다.
#[get("/{id}")]
pub async fn get_form_data(
    service: web::Data<FormDataService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let record = service.get(&id).await?;

    Ok(HttpResponse::Ok().json(record))
}

/// 폼 데이터 수정
#[put("/{id}")]
pub async fn update_form_data(
    service: web::Data<FormDataService>,
    id: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let data = validate_request(payload)?;
    let response = service.update(&id, data).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/{id}")]
pub async fn delete_form_data(
    service: web::Data<FormDataService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = service.delete(&id).await?;

    Ok(HttpResponse::Ok().json(response))
}

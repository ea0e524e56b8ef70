//! API 라우트 설정 모듈
//!
//! 폼 데이터 CRUD 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Features
//!
//! - 폼 데이터 CRUD API 엔드포인트 (`/api/formdata`)
//! - JSON 문법 오류를 일관된 400 응답으로 변환
//! - 헬스체크 엔드포인트
//!
//! 인증, 인가, 요청 빈도 제한은 적용하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(service))
//!     .app_data(web::Data::new(StorageConfig::backend()))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{web, HttpRequest};
use log::warn;
use serde_json::json;

use crate::config::StorageBackend;
use crate::core::errors::AppError;
use crate::handlers;
use crate::services::form_data::FormDataService;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Required App Data
///
/// * `web::Data<FormDataService>` - 폼 데이터 핸들러와 헬스체크의 레코드 건수
/// * `web::Data<StorageBackend>` - 헬스체크의 저장소 표시
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_form_data_routes(cfg);
}

/// 폼 데이터 라우트를 설정합니다
///
/// - `POST /api/formdata` - 저장
/// - `GET /api/formdata` - 목록 조회
/// - `GET /api/formdata/{id}` - 단건 조회
/// - `PUT /api/formdata/{id}` - 수정
/// - `DELETE /api/formdata/{id}` - 삭제
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/api/formdata
/// curl -X DELETE http://localhost:8080/api/formdata/507f1f77bcf86cd799439011
/// ```
fn configure_form_data_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/formdata")
            .service(handlers::form_data::create_form_data)
            .service(handlers::form_data::list_form_data)
            .service(handlers::form_data::get_form_data)
            .service(handlers::form_data::update_form_data)
            .service(handlers::form_data::delete_form_data)
    );
}

/// JSON 본문 추출 설정
///
/// JSON 문법 오류, Content-Type 누락, 본문 크기 초과 등 파싱 실패를
/// `{success:false, message}` 형태의 400 응답으로 변환합니다.
/// 필드 타입 불일치는 핸들러에서 필드별 위반으로 보고됩니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        AppError::ValidationError(format!("Invalid request body: {}", err)).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "form_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "features": { "storage": "MongoDB", "records": 42 }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(
    backend: web::Data<StorageBackend>,
    service: web::Data<FormDataService>,
) -> actix_web::HttpResponse {
    // 저장소 조회 실패는 5xx가 아닌 degraded 상태로 보고
    let (status, records) = match service.count().await {
        Ok(count) => ("healthy", Some(count)),
        Err(e) => {
            warn!("⚠️ 헬스체크 저장소 조회 실패: {}", e);
            ("degraded", None)
        }
    };

    actix_web::HttpResponse::Ok().json(json!({
        "status": status,
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "storage": backend.name(),
            "records": records
        }
    }))
}

//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 본문을 검증한 뒤 서비스 계층에 그대로 위임하며,
//! 모든 실패는 [`AppError`](crate::core::errors::AppError)로 반환되어
//! 일관된 JSON 에러 응답으로 변환됩니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 검증 및 응답 변환          ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   FormDataService - 비즈니스 로직               ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   FormRecordRepository - 데이터 접근            ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 서비스는 `main`에서 생성되어 `web::Data<FormDataService>`로 등록되고,
//! 핸들러는 추출자로 이를 받습니다.
//!
//! ```rust,ignore
//! #[get("/{id}")]
//! pub async fn get_form_data(
//!     service: web::Data<FormDataService>,
//!     id: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let record = service.get(&id).await?;
//!     Ok(HttpResponse::Ok().json(record))
//! }
//! ```

pub mod form_data;

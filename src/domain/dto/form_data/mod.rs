//! # 폼 데이터 DTO 모듈
//!
//! 폼 데이터 CRUD API의 요청/응답 객체와 입력 검증을 정의합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::domain::dto::form_data::validate_form_body;
//!
//! let validated = validate_form_body(payload.into_inner()).map_err(AppError::InvalidFields)?;
//! ```

pub mod request;
pub mod response;
pub mod validation;

pub use request::FormDataRequest;
pub use response::{FormDataMutationResponse, FormDataResponse};
pub use validation::{validate_form_body, validate_form_data, FieldViolation, ValidatedFormData};

//! 폼 데이터 서비스 모듈
//!
//! 폼 데이터의 생성, 조회, 수정, 삭제를 담당하는 [`FormDataService`]를 제공합니다.
//!
//! # Security
//!
//! - 비밀번호는 bcrypt 해시로만 저장
//! - 응답과 로그에 비밀번호를 포함하지 않음

pub mod form_data_service;

pub use form_data_service::FormDataService;

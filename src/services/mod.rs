//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 한 번 생성되어 `web::Data`로 모든 워커에 공유됩니다.
//!
//! # Features
//!
//! - 폼 데이터 생명주기 관리 (생성, 조회, 수정, 삭제)
//! - bcrypt 비밀번호 해싱
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::form_data::FormDataService;
//!
//! let service = FormDataService::new(repository, PasswordConfig::bcrypt_cost());
//! let records = service.list().await?;
//! ```

pub mod form_data;

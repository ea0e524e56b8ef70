//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 폼 데이터 컬렉션에 대한 저장소 추상화([`FormRecordRepository`](form_data::FormRecordRepository))와
//! 그 구현체들을 제공합니다.
//!
//! # Features
//!
//! - MongoDB 컬렉션 기반 구현 (운영 환경)
//! - 프로세스 메모리 기반 구현 (로컬 실행 및 테스트)
//! - 서비스 계층은 `Arc<dyn FormRecordRepository>`만 의존
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::form_data::{FormRecordRepository, MongoFormRecordRepository};
//!
//! let repo: Arc<dyn FormRecordRepository> =
//!     Arc::new(MongoFormRecordRepository::new(database, "FormData"));
//! let records = repo.find_all().await?;
//! ```

pub mod form_data;

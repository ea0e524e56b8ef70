//! # Domain Entities Module
//!
//! MongoDB 컬렉션에 저장되는 문서 구조를 정의합니다.
//!
//! - **BSON 직렬화**: `serde`를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈
//! │   └── form_data/
//! │       └── form_record.rs
//! └── dto/
//! ```

pub mod form_data;

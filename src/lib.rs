//! 폼 데이터 수집 서비스 백엔드
//!
//! 사용자 등록 폼(이름, 이메일, 비밀번호, 연락처, 주소, 주민번호, 생년월일)을
//! 검증하여 문서 저장소에 보관하고 CRUD REST API로 제공하는 서비스입니다.
//!
//! # Features
//!
//! - **입력 검증**: 필수 필드, 이메일 형식, 12자리 숫자 주민번호 검사
//! - **비밀번호 보호**: bcrypt 해시로만 저장, 응답에 포함하지 않음
//! - **MongoDB**: 폼 데이터 영구 저장
//! - **메모리 저장소**: MongoDB 없이 실행하거나 테스트할 때 사용
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/formdata, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ FormDataService │ ← 비밀번호 해싱, 존재 여부 판단
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← FormRecordRepository 트레이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use form_service_backend::repositories::form_data::InMemoryFormRecordRepository;
//! use form_service_backend::services::form_data::FormDataService;
//!
//! let service = FormDataService::new(Arc::new(InMemoryFormRecordRepository::new()), 4);
//! let created = service.create(validated).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;

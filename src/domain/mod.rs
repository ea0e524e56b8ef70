//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 폼 데이터의 저장 형태와 API 계약을 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB 문서와 1:1 대응되는 영속 객체 (FormRecord)
//! └── DTOs          - 요청/응답 객체와 입력 검증 (FormDataRequest, FormDataResponse)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Entity와 DTO의 분리
//!
//! - `FormRecord`는 비밀번호 해시를 포함한 저장 형태입니다.
//! - `FormDataResponse`는 클라이언트에 노출되는 형태로, 비밀번호를 포함하지 않습니다.
//! - `FormDataRequest`는 모든 필드를 `Option`으로 받아 누락된 필드도
//!   필드별 검증 에러로 보고합니다.

pub mod entities;
pub mod dto;

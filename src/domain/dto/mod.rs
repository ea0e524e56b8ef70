//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── form_data/
//!     ├── request.rs      # 생성/수정 요청 본문
//!     ├── validation.rs   # 필드별 검증 및 위반 목록
//!     └── response.rs     # 조회/변경 응답 본문
//! ```
//!
//! JSON 키는 모두 camelCase를 사용합니다 (`nationalId`, `dateOfBirth`).

pub mod form_data;

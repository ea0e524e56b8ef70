//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 구현
//! - **ErrorContext**: 외부 라이브러리 에러 변환 확장 trait
//!
//! ## 의존성 구성
//!
//! 전역 서비스 레지스트리는 사용하지 않습니다. `main`에서 데이터베이스,
//! 리포지토리, 서비스를 한 번씩 생성하고 `web::Data`로 핸들러에 전달합니다.
//!
//! ```rust,ignore
//! let repository = MongoFormRecordRepository::new(database, &StorageConfig::collection_name());
//! let service = web::Data::new(FormDataService::new(Arc::new(repository), PasswordConfig::bcrypt_cost()));
//!
//! HttpServer::new(move || App::new().app_data(service.clone()).configure(configure_all_routes))
//! ```

pub mod errors;

pub use errors::*;

//! # Configuration Module
//!
//! 폼 데이터 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 보안 관련 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, StorageConfig};
//!
//! let env = Environment::current();
//! let bind_address = ServerConfig::bind_address();
//! let uri = StorageConfig::mongodb_uri();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # 저장소 설정
//! export FORM_STORE="mongodb"        # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="formdata"
//! export COLLECTION_NAME="FormData"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"    # development, test, staging, production
//! export BCRYPT_COST="12"            # 4-15 범위
//! export CORS_ALLOWED_ORIGINS="https://forms.example.com"
//! ```

pub mod data_config;

pub use data_config::*;

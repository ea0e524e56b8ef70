//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 보안 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// `.env` 파일 로드 결과
///
/// 로거가 준비된 뒤 호출자가 결과를 기록할 수 있도록 값으로 반환합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvFileLoad {
    /// 프로필 파일을 로드함
    Loaded(&'static str),
    /// 프로필 파일 로드 실패 (기본값과 프로세스 환경 변수로 동작)
    Failed(&'static str, String),
    /// 알 수 없는 프로필이라 기본 `.env` 탐색을 시도함
    Default,
}

/// 실행 프로필 설정
pub struct ProfileConfig;

impl ProfileConfig {
    /// `PROFILE` 환경 변수 (기본값: `dev`)
    pub fn current() -> String {
        env::var("PROFILE").unwrap_or_else(|_| "dev".to_string())
    }

    /// 프로필에 해당하는 `.env` 파일 이름
    pub fn env_file(profile: &str) -> Option<&'static str> {
        match profile {
            "prod" => Some(".env.prod"),
            "dev" => Some(".env.dev"),
            _ => None,
        }
    }

    /// 프로필별 `.env` 파일을 로드합니다.
    ///
    /// * `PROFILE=dev` - .env.dev 파일 로드
    /// * `PROFILE=prod` - .env.prod 파일 로드
    /// * 기타 - 기본 .env 파일 로드
    pub fn load_env_file(profile: &str) -> EnvFileLoad {
        match Self::env_file(profile) {
            Some(file) => match dotenv::from_filename(file) {
                Ok(_) => EnvFileLoad::Loaded(file),
                Err(e) => EnvFileLoad::Failed(file, e.to_string()),
            },
            None => {
                dotenv::dotenv().ok();
                EnvFileLoad::Default
            }
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 그 값을 사용하고,
    /// 그렇지 않으면 환경별 기본값을 사용합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|cost| Self::parse_cost(&cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }

    fn parse_cost(value: &str) -> Option<u32> {
        value
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|cost| (4..=15).contains(cost))
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 바인딩 주소 (`host:port`)
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// 워커 스레드 수를 반환합니다. 기본값: 4
    ///
    /// # Environment Variables
    ///
    /// - `SERVER_WORKERS`: 1 이상의 정수
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|workers| workers.parse::<usize>().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }
}

/// 폼 데이터 저장소 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    /// MongoDB 컬렉션 (기본값)
    MongoDb,
    /// 프로세스 메모리 (로컬 실행 및 테스트용, 재시작 시 데이터 소멸)
    Memory,
}

impl StorageBackend {
    /// 문자열에서 StorageBackend를 생성합니다.
    ///
    /// `memory`/`in-memory` 외의 값은 모두 `MongoDb`로 처리합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }

    /// 헬스체크 등에 표시할 이름
    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::MongoDb => "MongoDB",
            StorageBackend::Memory => "In-Memory",
        }
    }
}

/// 문서 저장소 연결 설정
///
/// ## 환경 변수
/// - `FORM_STORE`: `mongodb` (기본값) 또는 `memory`
/// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
/// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "formdata")
/// - `COLLECTION_NAME`: 컬렉션 이름 (기본값: "FormData")
pub struct StorageConfig;

impl StorageConfig {
    pub fn backend() -> StorageBackend {
        StorageBackend::from_str(&env::var("FORM_STORE").unwrap_or_else(|_| "mongodb".to_string()))
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "formdata".to_string())
    }

    pub fn collection_name() -> String {
        env::var("COLLECTION_NAME").unwrap_or_else(|_| "FormData".to_string())
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록을 반환합니다.
    ///
    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분)가 없으면 로컬 개발용 Origin을 사용합니다.
    pub fn allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(origins) => Self::parse_origins(&origins),
            Err(_) => Self::default_origins(),
        }
    }

    fn default_origins() -> Vec<String> {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
            "http://localhost:8080".to_string(),
            "http://127.0.0.1:8080".to_string(),
        ]
    }

    fn parse_origins(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("STAGE"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            12
        );
    }

    #[test]
    fn test_bcrypt_cost_parsing_rejects_out_of_range() {
        assert_eq!(PasswordConfig::parse_cost("10"), Some(10));
        assert_eq!(PasswordConfig::parse_cost(" 4 "), Some(4));
        assert_eq!(PasswordConfig::parse_cost("3"), None);
        assert_eq!(PasswordConfig::parse_cost("16"), None);
        assert_eq!(PasswordConfig::parse_cost("high"), None);
    }

    #[test]
    fn test_storage_backend_from_string() {
        assert_eq!(StorageBackend::from_str("memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str(" In-Memory "), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str("mongodb"), StorageBackend::MongoDb);
        assert_eq!(StorageBackend::from_str(""), StorageBackend::MongoDb);
    }

    #[test]
    fn test_cors_origin_parsing() {
        let origins = CorsConfig::parse_origins("https://forms.example.com, ,http://localhost:3000");
        assert_eq!(
            origins,
            vec!["https://forms.example.com", "http://localhost:3000"]
        );
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }

        if env::var("SERVER_WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 4);
        }
    }

    #[test]
    fn test_profile_env_file_names() {
        assert_eq!(ProfileConfig::env_file("dev"), Some(".env.dev"));
        assert_eq!(ProfileConfig::env_file("prod"), Some(".env.prod"));
        assert_eq!(ProfileConfig::env_file("staging"), None);
    }

    #[test]
    fn test_missing_profile_file_is_reported() {
        // 저장소에는 .env.prod 파일이 없음
        match ProfileConfig::load_env_file("prod") {
            EnvFileLoad::Failed(file, reason) => {
                assert_eq!(file, ".env.prod");
                assert!(!reason.is_empty());
            }
            other => panic!("expected a reported failure, got {:?}", other),
        }
    }
}

//! 폼 데이터 수집 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 저장소와 서비스를 초기화합니다.
//! 저장소(MongoDB 또는 메모리)를 연결한 뒤 폼 데이터 CRUD REST API를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use form_service_backend::config::{
    CorsConfig, EnvFileLoad, Environment, PasswordConfig, ProfileConfig, ServerConfig, StorageBackend,
    StorageConfig,
};
use form_service_backend::db::Database;
use form_service_backend::repositories::form_data::{
    FormRecordRepository, InMemoryFormRecordRepository, MongoFormRecordRepository,
};
use form_service_backend::routes::configure_all_routes;
use form_service_backend::services::form_data::FormDataService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 로깅을 먼저 초기화해야 .env 로드 결과가 기록됨
    init_logging();
    load_env_file();

    info!("🚀 폼 데이터 서비스 시작중... (environment: {:?})", Environment::current());

    // 저장소 초기화
    let backend = StorageConfig::backend();
    let repository = initialize_repository(&backend).await?;

    // 서비스는 한 번만 생성하여 모든 워커가 공유
    let service = web::Data::new(FormDataService::new(repository, PasswordConfig::bcrypt_cost()));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(service, web::Data::new(backend)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    service: web::Data<FormDataService>,
    backend: web::Data<StorageBackend>,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let allowed_origins = CorsConfig::allowed_origins();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/formdata", bind_address);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors(&allowed_origins);

        App::new()
            .app_data(service.clone())
            .app_data(backend.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드하고 결과를 기록합니다
///
/// 로거 초기화 이후에 호출해야 로드 실패가 기록됩니다.
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = ProfileConfig::current();

    info!("Current profile: {}", profile);

    match ProfileConfig::load_env_file(&profile) {
        EnvFileLoad::Loaded(file) => info!("{} 파일 로드 됨", file),
        EnvFileLoad::Failed(file, e) => error!("{} 파일 로드 실패: {}", file, e),
        EnvFileLoad::Default => info!("기본 .env 파일 로드"),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `.env` 파일보다 먼저 초기화되므로 `RUST_LOG`는 프로세스 환경 변수에서만 읽습니다.
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=form_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `FORM_STORE` 설정에 따라 폼 데이터 저장소를 생성합니다
///
/// MongoDB 연결 실패는 `io::Error`로 변환되어 프로세스가 시작되지 않습니다.
async fn initialize_repository(backend: &StorageBackend) -> io::Result<Arc<dyn FormRecordRepository>> {
    match backend {
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await.map_err(|e| {
                error!("❌ MongoDB 연결 실패: {}", e);
                io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
            })?;

            let collection_name = StorageConfig::collection_name();
            let repository = MongoFormRecordRepository::new(Arc::new(database), &collection_name);

            info!(
                "✅ 저장소 준비 완료: {}.{}",
                repository.database_name(),
                collection_name
            );

            Ok(Arc::new(repository))
        }
        StorageBackend::Memory => {
            info!("🧪 메모리 저장소 사용 (재시작 시 데이터 소멸)");
            Ok(Arc::new(InMemoryFormRecordRepository::new()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

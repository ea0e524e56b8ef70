//! # 폼 데이터 서비스 구현
//!
//! 폼 데이터 레코드의 생명주기를 관리합니다.
//!
//! ```text
//! absent ──create──▶ present ──update──▶ present ──delete──▶ absent
//!                       ▲                   │
//!                       └───────update──────┘
//! ```
//!
//! 각 연산은 리포지토리의 단일 문서 연산 하나로 이어지며,
//! 서비스 자체는 변경 가능한 상태를 가지지 않습니다.

use std::sync::Arc;

use actix_web::web;
use bcrypt::hash;
use log::{info, warn};

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::form_data::{FormDataMutationResponse, FormDataResponse, ValidatedFormData};
use crate::domain::entities::form_data::FormRecord;
use crate::repositories::form_data::FormRecordRepository;
use crate::utils::string_utils::mask_email;

const NOT_FOUND_MESSAGE: &str = "Form data not found";

/// 폼 데이터 비즈니스 로직 서비스
///
/// 검증을 통과한 입력([`ValidatedFormData`])만 받으므로,
/// 이 서비스를 통해 저장되는 모든 레코드는 스키마 규칙을 만족합니다.
///
/// ## 에러 처리
///
/// - **NotFound**: 해당 ID의 레코드가 없음 (형식이 잘못된 ID 포함)
/// - **DatabaseError**: 저장소 연결/쿼리 오류
/// - **InternalError**: 비밀번호 해싱 실패
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = FormDataService::new(Arc::new(InMemoryFormRecordRepository::new()), 4);
///
/// let created = service.create(validated).await?;
/// let record = service.get(created.id.as_deref().unwrap()).await?;
/// service.delete(&record.id).await?;
/// ```
pub struct FormDataService {
    repository: Arc<dyn FormRecordRepository>,
    bcrypt_cost: u32,
}

impl FormDataService {
    pub fn new(repository: Arc<dyn FormRecordRepository>, bcrypt_cost: u32) -> Self {
        Self {
            repository,
            bcrypt_cost,
        }
    }

    /// 새 폼 데이터 저장
    ///
    /// 비밀번호를 해싱한 뒤 저장하고, 저장소가 할당한 ID를 응답에 담아 반환합니다.
    /// 중복 검사는 하지 않습니다.
    pub async fn create(&self, data: ValidatedFormData) -> AppResult<FormDataMutationResponse> {
        let email = mask_email(&data.email);
        let record = self.build_record(data).await?;

        let created = self.repository.insert(record).await?;
        let id = created
            .id_string()
            .ok_or_else(|| AppError::InternalError("Stored record has no id".to_string()))?;

        info!("📝 폼 데이터 저장 완료: id={}, email={}", id, email);

        Ok(FormDataMutationResponse::saved(id))
    }

    /// 저장된 모든 폼 데이터를 저장소의 자연 순서로 조회합니다.
    pub async fn list(&self) -> AppResult<Vec<FormDataResponse>> {
        let records = self.repository.find_all().await?;

        Ok(records.into_iter().map(FormDataResponse::from).collect())
    }

    /// ID로 폼 데이터 조회
    pub async fn get(&self, id: &str) -> AppResult<FormDataResponse> {
        match self.repository.find_by_id(id).await? {
            Some(record) => Ok(FormDataResponse::from(record)),
            None => {
                warn!("🔍 폼 데이터 없음: id={}", id);
                Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
            }
        }
    }

    /// ID를 제외한 모든 필드를 새 값으로 덮어씁니다.
    ///
    /// 일치하는 레코드가 없으면 `NotFound`. 값이 이전과 동일해도 일치했다면 성공입니다.
    pub async fn update(&self, id: &str, data: ValidatedFormData) -> AppResult<FormDataMutationResponse> {
        let email = mask_email(&data.email);
        let record = self.build_record(data).await?;

        if !self.repository.replace_fields(id, &record).await? {
            warn!("🔍 수정할 폼 데이터 없음: id={}", id);
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        info!("✏️ 폼 데이터 수정 완료: id={}, email={}", id, email);

        Ok(FormDataMutationResponse::updated())
    }

    /// 폼 데이터 삭제 (물리 삭제)
    pub async fn delete(&self, id: &str) -> AppResult<FormDataMutationResponse> {
        if !self.repository.delete_by_id(id).await? {
            warn!("🔍 삭제할 폼 데이터 없음: id={}", id);
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        info!("🗑️ 폼 데이터 삭제 완료: id={}", id);

        Ok(FormDataMutationResponse::deleted())
    }

    /// 저장된 폼 데이터 건수
    pub async fn count(&self) -> AppResult<u64> {
        self.repository.count().await
    }

    /// 비밀번호를 해싱하여 저장용 레코드를 만듭니다.
    ///
    /// bcrypt는 CPU 연산이므로 `web::block`으로 블로킹 스레드 풀에서 실행하여
    /// 워커의 이벤트 루프가 다른 요청을 계속 처리할 수 있게 합니다.
    async fn build_record(&self, mut data: ValidatedFormData) -> AppResult<FormRecord> {
        let password = std::mem::take(&mut data.password);
        let cost = self.bcrypt_cost;

        let hash_start = std::time::Instant::now();
        let password_hash = web::block(move || hash(password, cost))
            .await
            .context("Password hashing task failed")?
            .context("Password hashing failed")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        Ok(FormRecord::new(data, password_hash))
    }
}

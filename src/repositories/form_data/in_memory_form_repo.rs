//! 프로세스 메모리 기반 폼 데이터 리포지토리
//!
//! `FORM_STORE=memory`로 MongoDB 없이 서비스를 실행하거나 테스트할 때 사용합니다.
//! 프로세스가 종료되면 데이터는 사라집니다.
//!
//! ID는 MongoDB와 동일하게 ObjectId로 할당하며, 목록 조회는 삽입 순서를 따릅니다.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::{parse_object_id, FormRecordRepository};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::form_data::FormRecord;

/// 스레드 안전한 메모리 저장소
#[derive(Default)]
pub struct InMemoryFormRecordRepository {
    records: RwLock<Vec<FormRecord>>,
}

impl InMemoryFormRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E>(_: E) -> AppError {
    AppError::InternalError("In-memory store lock poisoned".to_string())
}

#[async_trait]
impl FormRecordRepository for InMemoryFormRecordRepository {
    async fn insert(&self, mut record: FormRecord) -> AppResult<FormRecord> {
        let mut records = self.records.write().map_err(poisoned)?;

        record.id = Some(ObjectId::new());
        records.push(record.clone());

        Ok(record)
    }

    async fn find_all(&self) -> AppResult<Vec<FormRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<FormRecord>> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(None);
        };

        let records = self.records.read().map_err(poisoned)?;
        Ok(records.iter().find(|r| r.id == Some(object_id)).cloned())
    }

    async fn replace_fields(&self, id: &str, record: &FormRecord) -> AppResult<bool> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(false);
        };

        let mut records = self.records.write().map_err(poisoned)?;
        match records.iter_mut().find(|r| r.id == Some(object_id)) {
            Some(existing) => {
                existing.overwrite_fields(record);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(false);
        };

        let mut records = self.records.write().map_err(poisoned)?;
        let before = records.len();
        records.retain(|r| r.id != Some(object_id));

        Ok(records.len() < before)
    }

    async fn count(&self) -> AppResult<u64> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.len() as u64)
    }
}

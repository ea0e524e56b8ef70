//! # MongoDB 폼 데이터 리포지토리
//!
//! 하나의 MongoDB 컬렉션에 폼 데이터를 저장합니다.
//! 각 연산은 드라이버의 단일 문서 연산(insert/find/update/delete)에 그대로 위임됩니다.
//!
//! ## 컬렉션
//!
//! - **이름**: `COLLECTION_NAME` (기본값 `FormData`)
//! - **ID**: MongoDB가 할당하는 `_id` ObjectId

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection};

use super::{parse_object_id, FormRecordRepository};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::form_data::FormRecord;

/// MongoDB 기반 폼 데이터 리포지토리
///
/// `Database`에서 얻은 컬렉션 핸들을 보관합니다. 핸들은 드라이버의
/// 연결 풀을 공유하므로 여러 워커에서 동시에 사용해도 안전합니다.
///
/// ```rust,ignore
/// let database = Arc::new(Database::new().await?);
/// let repo = MongoFormRecordRepository::new(database, "FormData");
///
/// let created = repo.insert(record).await?;
/// let found = repo.find_by_id(&created.id_string().unwrap()).await?;
/// ```
#[derive(Clone)]
pub struct MongoFormRecordRepository {
    /// 연결 수명 유지를 위한 데이터베이스 핸들
    db: Arc<Database>,
    collection: Collection<FormRecord>,
}

impl MongoFormRecordRepository {
    pub fn new(db: Arc<Database>, collection_name: &str) -> Self {
        let collection = db.collection::<FormRecord>(collection_name);
        Self { db, collection }
    }

    /// 컬렉션이 속한 데이터베이스 이름
    pub fn database_name(&self) -> &str {
        self.db.database_name()
    }
}

#[async_trait]
impl FormRecordRepository for MongoFormRecordRepository {
    async fn insert(&self, mut record: FormRecord) -> AppResult<FormRecord> {
        // 클라이언트가 ID를 지정할 수 없도록 항상 비운 상태로 저장
        record.id = None;

        let result = self.collection
            .insert_one(&record)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(format!(
                "Unexpected inserted id type: {}",
                result.inserted_id
            ))
        })?;

        record.id = Some(id);
        Ok(record)
    }

    async fn find_all(&self) -> AppResult<Vec<FormRecord>> {
        let cursor = self.collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<FormRecord>> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn replace_fields(&self, id: &str, record: &FormRecord) -> AppResult<bool> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(false);
        };

        let result = self.collection
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": record.to_update_document() },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 값이 동일해 수정되지 않은 경우도 일치했다면 성공
        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(false);
        };

        let result = self.collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

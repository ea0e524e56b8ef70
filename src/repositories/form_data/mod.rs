//! 폼 데이터 리포지토리 모듈
//!
//! 폼 데이터 컬렉션에 대한 저장소 계약과 구현체들을 정의합니다.
//!
//! - [`MongoFormRecordRepository`] - MongoDB 컬렉션 구현
//! - [`InMemoryFormRecordRepository`] - 프로세스 메모리 구현

pub mod in_memory_form_repo;
pub mod mongo_form_repo;

pub use in_memory_form_repo::InMemoryFormRecordRepository;
pub use mongo_form_repo::MongoFormRecordRepository;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppResult;
use crate::domain::entities::form_data::FormRecord;

/// 폼 데이터 저장소 계약
///
/// 단일 문서 단위의 연산만 제공하며, 트랜잭션이나 다중 문서 일관성은 보장하지 않습니다.
/// ObjectId 형식이 아닌 ID는 어떤 레코드와도 일치할 수 없으므로 "없음"으로 처리합니다.
#[async_trait]
pub trait FormRecordRepository: Send + Sync {
    /// 새 레코드를 저장하고, 저장소가 할당한 ID가 채워진 레코드를 반환합니다.
    async fn insert(&self, record: FormRecord) -> AppResult<FormRecord>;

    /// 저장된 모든 레코드를 저장소의 자연 순서로 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<FormRecord>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<FormRecord>>;

    /// `id`를 제외한 모든 필드를 덮어씁니다. 일치하는 레코드가 없으면 `false`.
    async fn replace_fields(&self, id: &str, record: &FormRecord) -> AppResult<bool>;

    /// 레코드를 삭제합니다. 삭제된 레코드가 없으면 `false`.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;

    async fn count(&self) -> AppResult<u64>;
}

/// 문자열 ID를 ObjectId로 변환합니다. 형식이 맞지 않으면 `None`.
pub(crate) fn parse_object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();

        assert_eq!(parse_object_id(&id.to_hex()), Some(id));
        assert_eq!(parse_object_id("does-not-exist"), None);
        assert_eq!(parse_object_id(""), None);
    }
}

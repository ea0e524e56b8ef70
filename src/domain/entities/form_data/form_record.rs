//! FormRecord Entity Implementation
//!
//! 폼 제출 한 건을 MongoDB 문서로 저장하기 위한 엔티티입니다.

use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use crate::domain::dto::form_data::ValidatedFormData;

/// 폼 데이터 엔티티
///
/// `id`는 저장 시 MongoDB가 할당하며 이후 변경되지 않습니다.
/// 비밀번호는 평문이 아닌 bcrypt 해시로만 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이름
    pub name: String,
    /// 이메일 주소
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 연락처
    pub contact: String,
    /// 주소
    pub address: String,
    /// 12자리 국민 식별 번호
    pub national_id: String,
    /// 생년월일 (자유 형식 문자열)
    pub date_of_birth: String,
}

impl FormRecord {
    /// 검증된 입력과 해시된 비밀번호로 새 레코드를 생성합니다. ID는 비어 있습니다.
    pub fn new(data: ValidatedFormData, password_hash: String) -> Self {
        Self {
            id: None,
            name: data.name,
            email: data.email,
            password_hash,
            contact: data.contact,
            address: data.address,
            national_id: data.national_id,
            date_of_birth: data.date_of_birth,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// `_id`를 제외한 모든 필드를 담은 `$set` 용 문서
    pub fn to_update_document(&self) -> Document {
        doc! {
            "name": self.name.as_str(),
            "email": self.email.as_str(),
            "passwordHash": self.password_hash.as_str(),
            "contact": self.contact.as_str(),
            "address": self.address.as_str(),
            "nationalId": self.national_id.as_str(),
            "dateOfBirth": self.date_of_birth.as_str(),
        }
    }

    /// `id`는 유지하고 나머지 필드를 `replacement`의 값으로 덮어씁니다.
    pub fn overwrite_fields(&mut self, replacement: &FormRecord) {
        self.name = replacement.name.clone();
        self.email = replacement.email.clone();
        self.password_hash = replacement.password_hash.clone();
        self.contact = replacement.contact.clone();
        self.address = replacement.address.clone();
        self.national_id = replacement.national_id.clone();
        self.date_of_birth = replacement.date_of_birth.clone();
    }
}

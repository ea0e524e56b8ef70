//! 폼 데이터 응답 DTO
//!
//! 저장된 레코드를 클라이언트에 반환하는 형태와 생성/수정/삭제 결과 형태를 정의합니다.
//! 비밀번호 해시는 어떤 응답에도 포함되지 않습니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::form_data::FormRecord;

/// 폼 데이터 조회 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDataResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub address: String,
    pub national_id: String,
    pub date_of_birth: String,
}

impl From<FormRecord> for FormDataResponse {
    fn from(record: FormRecord) -> Self {
        let FormRecord {
            id,
            name,
            email,
            contact,
            address,
            national_id,
            date_of_birth,
            ..
        } = record;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            contact,
            address,
            national_id,
            date_of_birth,
        }
    }
}

/// 생성/수정/삭제 결과 응답 DTO
///
/// ```json
/// { "success": true, "message": "Form data saved successfully", "id": "507f1f77bcf86cd799439011" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDataMutationResponse {
    pub success: bool,
    pub message: String,
    /// 생성 시에만 포함되는 새 레코드 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl FormDataMutationResponse {
    pub fn saved(id: String) -> Self {
        Self {
            success: true,
            message: "Form data saved successfully".to_string(),
            id: Some(id),
        }
    }

    pub fn updated() -> Self {
        Self {
            success: true,
            message: "Form data updated successfully".to_string(),
            id: None,
        }
    }

    pub fn deleted() -> Self {
        Self {
            success: true,
            message: "Form data deleted successfully".to_string(),
            id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_response_omits_password_hash() {
        let id = ObjectId::new();
        let record = FormRecord {
            id: Some(id),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$2b$04$secret".to_string(),
            contact: "555-0100".to_string(),
            address: "1 Main St".to_string(),
            national_id: "123456789012".to_string(),
            date_of_birth: "1990-01-01".to_string(),
        };

        let json = serde_json::to_value(FormDataResponse::from(record)).unwrap();

        assert_eq!(json["id"], id.to_hex());
        assert_eq!(json["nationalId"], "123456789012");
        assert_eq!(json["dateOfBirth"], "1990-01-01");
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn test_mutation_response_id_only_on_create() {
        let saved = serde_json::to_value(FormDataMutationResponse::saved("abc".to_string())).unwrap();
        let deleted = serde_json::to_value(FormDataMutationResponse::deleted()).unwrap();

        assert_eq!(saved["success"], true);
        assert_eq!(saved["id"], "abc");
        assert!(deleted.get("id").is_none());
    }
}

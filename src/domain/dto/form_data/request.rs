//! 폼 데이터 생성/수정 요청 DTO
//!
//! 생성(`POST`)과 수정(`PUT`)이 동일한 본문을 사용합니다.
//! 모든 필드를 `Option`으로 받아, 누락된 필드가 JSON 파싱 에러가 아닌
//! 필드별 검증 위반으로 보고되도록 합니다.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

/// 국민 식별 번호 형식: ASCII 숫자 정확히 12자리
pub static NATIONAL_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{12}$").expect("national id pattern must compile"));

/// 폼 데이터 요청 DTO
///
/// 문자열 값은 앞뒤 공백이 제거되며, 공백뿐인 값은 누락으로 취급됩니다.
/// 본문에 포함된 `id`는 무시됩니다.
///
/// ```json
/// {
///   "name": "Alice",
///   "email": "alice@example.com",
///   "password": "p1",
///   "contact": "555-0100",
///   "address": "1 Main St",
///   "nationalId": "123456789012",
///   "dateOfBirth": "1990-01-01"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FormDataRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "Name is required"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(
        required(message = "Email is required"),
        email(message = "Email must be a valid email address")
    )]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "Password is required"))]
    pub password: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "Contact is required"))]
    pub contact: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "Address is required"))]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(
        required(message = "National ID is required"),
        regex(path = *NATIONAL_ID_REGEX, message = "National ID must be exactly 12 digits")
    )]
    pub national_id: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "Date of birth is required"))]
    pub date_of_birth: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_national_id_pattern() {
        assert!(NATIONAL_ID_REGEX.is_match("123456789012"));
        assert!(!NATIONAL_ID_REGEX.is_match("12345"));
        assert!(!NATIONAL_ID_REGEX.is_match("1234567890123"));
        assert!(!NATIONAL_ID_REGEX.is_match("abcdefghijkl"));
        // 전각/아랍 숫자 등 비 ASCII 숫자는 허용하지 않음
        assert!(!NATIONAL_ID_REGEX.is_match("١٢٣٤٥٦٧٨٩٠١٢"));
    }

    #[test]
    fn test_deserialize_camel_case_and_ignore_id() {
        let json = r#"{
            "id": "507f1f77bcf86cd799439011",
            "name": "  Alice ",
            "nationalId": "123456789012",
            "dateOfBirth": "1990-01-01"
        }"#;
        let request: FormDataRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.name.as_deref(), Some("Alice"));
        assert_eq!(request.national_id.as_deref(), Some("123456789012"));
        assert_eq!(request.date_of_birth.as_deref(), Some("1990-01-01"));
        assert!(request.email.is_none());
    }

    #[test]
    fn test_blank_values_become_missing() {
        let request: FormDataRequest =
            serde_json::from_str(r#"{"name": "   ", "contact": ""}"#).unwrap();

        assert!(request.name.is_none());
        assert!(request.contact.is_none());
    }
}

//! 폼 데이터 입력 검증
//!
//! `validator` 크레이트의 검증 결과를 [`FieldViolation`] 목록으로 평탄화합니다.
//! 호출자는 크레이트의 에러 타입을 알 필요 없이 위반된 모든 필드를 한 번에
//! 받아 폼 전체의 오류를 표시할 수 있습니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use super::request::FormDataRequest;
use crate::utils::string_utils::to_camel_case;

/// 검증 위반 항목 (필드, 메시지)
///
/// `field`는 JSON 요청 본문의 키 이름(camelCase)을 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 모든 검증을 통과한 폼 데이터
///
/// 필수 필드가 모두 채워져 있음이 보장되므로 `Option`이 없습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub contact: String,
    pub address: String,
    pub national_id: String,
    pub date_of_birth: String,
}

/// 요청 본문에서 사용하는 필드 키 (camelCase)
pub const FORM_FIELDS: [&str; 7] = [
    "name",
    "email",
    "password",
    "contact",
    "address",
    "nationalId",
    "dateOfBirth",
];

/// JSON 본문을 역직렬화하고 검증합니다.
///
/// 문자열이 아닌 값(숫자, 불리언, 배열, 객체)이 들어온 필드는 파싱 에러 대신
/// 해당 필드의 위반으로 보고되며, 나머지 필드의 검증 결과와 함께 반환됩니다.
/// `null`은 누락으로 취급합니다.
///
/// ```rust,ignore
/// let violations = validate_form_body(json!({ "nationalId": 123456789012_u64 })).unwrap_err();
/// // nationalId: "nationalId must be a string", name: "Name is required", ...
/// ```
pub fn validate_form_body(body: Value) -> Result<ValidatedFormData, Vec<FieldViolation>> {
    let Value::Object(mut fields) = body else {
        return Err(vec![FieldViolation::new("body", "Request body must be a JSON object")]);
    };

    let mut type_violations = Vec::new();
    for field in FORM_FIELDS {
        if matches!(fields.get(field), Some(value) if !value.is_string() && !value.is_null()) {
            fields.remove(field);
            type_violations.push(FieldViolation::new(field, format!("{} must be a string", field)));
        }
    }

    let request: FormDataRequest = serde_json::from_value(Value::Object(fields))
        .map_err(|e| vec![FieldViolation::new("body", e.to_string())])?;

    match validate_form_data(&request) {
        Ok(data) if type_violations.is_empty() => Ok(data),
        Ok(_) => Err(type_violations),
        Err(violations) => {
            // 타입 위반으로 제거된 필드의 "required" 위반은 중복이므로 제외
            let mistyped: Vec<String> = type_violations.iter().map(|t| t.field.clone()).collect();
            let mut merged: Vec<FieldViolation> = violations
                .into_iter()
                .filter(|v| !mistyped.contains(&v.field))
                .chain(type_violations)
                .collect();
            merged.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
            Err(merged)
        }
    }
}

/// 폼 데이터 요청을 검증합니다.
///
/// # 반환값
///
/// * `Ok(ValidatedFormData)` - 모든 필드가 존재하고 형식 규칙을 만족하는 경우
/// * `Err(Vec<FieldViolation>)` - 위반된 모든 필드 (필드명, 메시지 순으로 정렬)
///
/// # 검증 규칙
///
/// - 모든 필드 필수 (공백뿐인 값은 누락으로 취급)
/// - `email`: 이메일 주소 형식
/// - `nationalId`: 숫자 정확히 12자리
///
/// # 예제
///
/// ```rust,ignore
/// match validate_form_data(&request) {
///     Ok(data) => service.create(data).await,
///     Err(violations) => Err(AppError::InvalidFields(violations)),
/// }
/// ```
pub fn validate_form_data(request: &FormDataRequest) -> Result<ValidatedFormData, Vec<FieldViolation>> {
    if let Err(errors) = request.validate() {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let field = to_camel_case(&field);
                field_errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    FieldViolation::new(field.clone(), message)
                })
            })
            .collect();

        violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
        return Err(violations);
    }

    let FormDataRequest {
        name,
        email,
        password,
        contact,
        address,
        national_id,
        date_of_birth,
    } = request.clone();

    match (name, email, password, contact, address, national_id, date_of_birth) {
        (
            Some(name),
            Some(email),
            Some(password),
            Some(contact),
            Some(address),
            Some(national_id),
            Some(date_of_birth),
        ) => Ok(ValidatedFormData {
            name,
            email,
            password,
            contact,
            address,
            national_id,
            date_of_birth,
        }),
        _ => Err(vec![FieldViolation::new("form", "Required fields are missing")]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> FormDataRequest {
        FormDataRequest {
            name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
            password: Some("p1".to_string()),
            contact: Some("555-0100".to_string()),
            address: Some("1 Main St".to_string()),
            national_id: Some("123456789012".to_string()),
            date_of_birth: Some("1990-01-01".to_string()),
        }
    }

    fn fields(violations: &[FieldViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn test_valid_request_passes() {
        let data = validate_form_data(&alice()).unwrap();

        assert_eq!(data.name, "Alice");
        assert_eq!(data.national_id, "123456789012");
        assert_eq!(data.password, "p1");
    }

    #[test]
    fn test_empty_request_reports_every_field() {
        let violations = validate_form_data(&FormDataRequest::default()).unwrap_err();

        assert_eq!(
            fields(&violations),
            vec![
                "address",
                "contact",
                "dateOfBirth",
                "email",
                "name",
                "nationalId",
                "password",
            ]
        );
        assert!(violations.iter().all(|v| v.message.contains("required")));
    }

    #[test]
    fn test_each_missing_field_is_rejected() {
        let removers: [fn(&mut FormDataRequest); 7] = [
            |r| r.name = None,
            |r| r.email = None,
            |r| r.password = None,
            |r| r.contact = None,
            |r| r.address = None,
            |r| r.national_id = None,
            |r| r.date_of_birth = None,
        ];

        for remove in removers {
            let mut request = alice();
            remove(&mut request);

            let violations = validate_form_data(&request).unwrap_err();
            assert_eq!(violations.len(), 1, "{:?}", violations);
        }
    }

    #[test]
    fn test_malformed_national_ids_are_rejected() {
        for national_id in ["123", "12345", "abcdefghijkl", "1234567890123", "12345678901a"] {
            let mut request = alice();
            request.national_id = Some(national_id.to_string());

            let violations = validate_form_data(&request).unwrap_err();
            assert_eq!(fields(&violations), vec!["nationalId"], "{}", national_id);
            assert_eq!(violations[0].message, "National ID must be exactly 12 digits");
        }
    }

    #[test]
    fn test_malformed_emails_are_rejected() {
        for email in ["alice", "alice@", "@example.com", "alice example.com"] {
            let mut request = alice();
            request.email = Some(email.to_string());

            let violations = validate_form_data(&request).unwrap_err();
            assert_eq!(fields(&violations), vec!["email"], "{}", email);
        }
    }

    #[test]
    fn test_multiple_violations_reported_together() {
        let mut request = alice();
        request.email = Some("not-an-email".to_string());
        request.national_id = Some("123".to_string());
        request.name = None;

        let violations = validate_form_data(&request).unwrap_err();
        assert_eq!(fields(&violations), vec!["email", "name", "nationalId"]);
    }

    fn alice_body() -> Value {
        serde_json::json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "p1",
            "contact": "555-0100",
            "address": "1 Main St",
            "nationalId": "123456789012",
            "dateOfBirth": "1990-01-01"
        })
    }

    #[test]
    fn test_body_with_valid_fields_passes() {
        let data = validate_form_body(alice_body()).unwrap();

        assert_eq!(data.national_id, "123456789012");
        assert_eq!(data.date_of_birth, "1990-01-01");
    }

    #[test]
    fn test_body_type_mismatch_is_reported_per_field() {
        let mut body = alice_body();
        body["nationalId"] = serde_json::json!(123456789012_u64);
        body["contact"] = serde_json::json!(["555-0100"]);

        let violations = validate_form_body(body).unwrap_err();

        assert_eq!(fields(&violations), vec!["contact", "nationalId"]);
        assert_eq!(violations[1].message, "nationalId must be a string");
    }

    #[test]
    fn test_body_type_mismatch_merges_with_other_violations() {
        let mut body = alice_body();
        body["name"] = serde_json::json!(42);
        body["email"] = serde_json::json!("not-an-email");
        if let Some(object) = body.as_object_mut() {
            object.remove("password");
        }

        let violations = validate_form_body(body).unwrap_err();

        assert_eq!(fields(&violations), vec!["email", "name", "password"]);
        assert_eq!(violations[1].message, "name must be a string");
    }

    #[test]
    fn test_body_must_be_an_object() {
        let violations = validate_form_body(serde_json::json!(["Alice"])).unwrap_err();

        assert_eq!(fields(&violations), vec!["body"]);
    }
}

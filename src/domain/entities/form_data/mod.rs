//! Form Data Entity Module
//!
//! 폼 제출 한 건을 표현하는 [`FormRecord`](form_record::FormRecord) 엔티티를 포함합니다.

pub mod form_record;

pub use form_record::FormRecord;

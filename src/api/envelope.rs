//! Response normalization.
//!
//! The backend answers either with the payload at the top level or wrapped in
//! a `data` object. Both shapes are resolved here so the rest of the crate
//! only ever sees [`ResumeUploaded`] and [`InterviewCreated`].

use super::types::{InterviewCreated, ResumeUploaded};
use serde_json::Value;

/// Looks `path` up under `data` first, then at the top level.
fn lookup<'a>(body: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let nested = body.get("data").and_then(|data| walk(data, path));
    nested.or_else(|| walk(body, path))
}

fn walk<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.get(key))
        .filter(|found| !found.is_null())
}

/// Ids are opaque; numeric ids are accepted and stringified. Empty strings
/// count as missing.
fn as_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn resume_uploaded(body: &Value) -> ResumeUploaded {
    ResumeUploaded {
        resume_id: lookup(body, &["resumeId"]).and_then(as_id),
    }
}

pub fn interview_created(body: &Value) -> InterviewCreated {
    InterviewCreated {
        interview_id: lookup(body, &["interview", "id"]).and_then(as_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resume_id_from_wrapped_body() {
        let body = json!({ "success": true, "data": { "resumeId": "abc" } });
        assert_eq!(resume_uploaded(&body).resume_id.as_deref(), Some("abc"));
    }

    #[test]
    fn resume_id_from_bare_body() {
        let body = json!({ "resumeId": "abc" });
        assert_eq!(resume_uploaded(&body).resume_id.as_deref(), Some("abc"));
    }

    #[test]
    fn wrapped_id_wins_over_bare() {
        let body = json!({ "resumeId": "outer", "data": { "resumeId": "inner" } });
        assert_eq!(resume_uploaded(&body).resume_id.as_deref(), Some("inner"));
    }

    #[test]
    fn falls_back_to_bare_when_data_lacks_id() {
        let body = json!({ "resumeId": "outer", "data": { "fileName": "cv.pdf" } });
        assert_eq!(resume_uploaded(&body).resume_id.as_deref(), Some("outer"));
    }

    #[test]
    fn missing_or_empty_resume_id() {
        assert_eq!(resume_uploaded(&json!({ "data": {} })).resume_id, None);
        assert_eq!(resume_uploaded(&json!({ "resumeId": "" })).resume_id, None);
        assert_eq!(resume_uploaded(&json!({ "resumeId": null })).resume_id, None);
    }

    #[test]
    fn interview_id_from_either_nesting() {
        let wrapped = json!({ "data": { "interview": { "id": "iv-1" } } });
        let bare = json!({ "interview": { "id": 42 } });

        assert_eq!(interview_created(&wrapped).interview_id.as_deref(), Some("iv-1"));
        assert_eq!(interview_created(&bare).interview_id.as_deref(), Some("42"));
        assert_eq!(interview_created(&json!({ "interview": {} })).interview_id, None);
    }
}

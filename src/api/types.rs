use serde::Serialize;

pub const INTERVIEW_TYPE_TECHNICAL: &str = "technical";
pub const DEFAULT_QUESTION_COUNT: u32 = 5;
/// Minutes.
pub const DEFAULT_TIME_LIMIT: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSettings {
    pub question_count: u32,
    pub time_limit: u32,
}

impl Default for InterviewSettings {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterviewRequest {
    pub resume_id: String,
    pub job_description: String,
    pub interview_type: String,
    pub settings: InterviewSettings,
}

impl CreateInterviewRequest {
    /// A technical interview with the default settings.
    pub fn technical(resume_id: impl Into<String>, job_description: impl Into<String>) -> Self {
        Self {
            resume_id: resume_id.into(),
            job_description: job_description.into(),
            interview_type: INTERVIEW_TYPE_TECHNICAL.to_string(),
            settings: InterviewSettings::default(),
        }
    }
}

/// Result of a resume upload. The backend may omit the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeUploaded {
    pub resume_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterviewCreated {
    pub interview_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn technical_request_serializes_with_fixed_settings() {
        let request = CreateInterviewRequest::technical("r-1", "Backend engineer");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "resumeId": "r-1",
                "jobDescription": "Backend engineer",
                "interviewType": "technical",
                "settings": { "questionCount": 5, "timeLimit": 5 }
            })
        );
    }
}

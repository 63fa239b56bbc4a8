//! Submission payload and lifecycle status

use super::FormState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Craigslist query parameters forwarded to the aggregator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Selected neighborhood values in selection order
    pub nh: Vec<String>,
}

/// JSON body POSTed to the aggregation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub url: String,
    pub params: SearchParams,
    pub notion_db_title: String,
}

impl From<&FormState> for SubmissionPayload {
    fn from(form: &FormState) -> Self {
        Self {
            url: form.url.clone(),
            params: SearchParams {
                nh: form.selected_neighborhoods.to_vec(),
            },
            notion_db_title: form.notion_db_title.clone(),
        }
    }
}

/// Where the most recent submission stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending {
        started_at: DateTime<Utc>,
    },
    Succeeded {
        at: DateTime<Utc>,
        response: serde_json::Value,
    },
    Failed {
        at: DateTime<Utc>,
    },
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn label(&self) -> String {
        match self {
            Self::Idle => "Ready".to_string(),
            Self::Pending { .. } => "Submitting...".to_string(),
            Self::Succeeded { at, .. } => {
                format!("Submitted at {}", at.format("%H:%M:%S"))
            }
            Self::Failed { at } => format!("Failed at {}", at.format("%H:%M:%S")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_payload_shape_from_form() {
        let mut form = FormState::default();
        form.set_url("http://x");
        form.toggle_neighborhood("1");
        form.toggle_neighborhood("3");
        form.set_title("T");

        let payload = SubmissionPayload::from(&form);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({"url": "http://x", "params": {"nh": ["1", "3"]}, "notion_db_title": "T"})
        );
    }

    #[test]
    fn test_payload_serializes_exact_text() {
        let payload = SubmissionPayload {
            url: "http://x".to_string(),
            params: SearchParams {
                nh: vec!["A".to_string(), "C".to_string()],
            },
            notion_db_title: "T".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"url":"http://x","params":{"nh":["A","C"]},"notion_db_title":"T"}"#
        );
    }

    #[test]
    fn test_payload_keeps_selection_order() {
        let mut form = FormState::default();
        form.toggle_neighborhood("18");
        form.toggle_neighborhood("2");
        form.toggle_neighborhood("9");
        form.toggle_neighborhood("2");

        let payload = SubmissionPayload::from(&form);
        assert_eq!(payload.params.nh, vec!["18".to_string(), "9".to_string()]);
    }

    #[test]
    fn test_payload_forwards_empty_fields() {
        let payload = SubmissionPayload::from(&FormState::default());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"url": "", "params": {"nh": []}, "notion_db_title": ""})
        );
    }

    #[test]
    fn test_payload_does_not_include_error() {
        let mut form = FormState::default();
        form.set_error("old failure");
        let value = serde_json::to_value(SubmissionPayload::from(&form)).unwrap();
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_status_default_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
        assert!(!SubmissionStatus::Idle.is_pending());
    }

    #[test]
    fn test_status_pending() {
        let status = SubmissionStatus::Pending {
            started_at: Utc::now(),
        };
        assert!(status.is_pending());
        assert_eq!(status.label(), "Submitting...");
    }

    #[test]
    fn test_status_labels_include_time() {
        let at = DateTime::parse_from_rfc3339("2024-05-01T12:34:56Z")
            .unwrap()
            .with_timezone(&Utc);
        let ok = SubmissionStatus::Succeeded {
            at,
            response: json!({"ok": true}),
        };
        assert_eq!(ok.label(), "Submitted at 12:34:56");
        assert_eq!(SubmissionStatus::Failed { at }.label(), "Failed at 12:34:56");
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::aggregate::EvaluationSummary;
use super::domain::{GroupAnswers, Identification, Jurisdiction};
use super::session::{EvaluationError, EvaluationSession};

/// Complete evaluation submitted in one piece, as read from a file or an HTTP body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub identification: Identification,
    pub niche: String,
    pub answers: GroupAnswers,
}

impl EvaluationRequest {
    /// Decode a JSON request, filling in `default_jurisdiction` when the identification omits one.
    pub fn from_json(
        raw: &[u8],
        default_jurisdiction: &Jurisdiction,
    ) -> Result<Self, serde_json::Error> {
        let mut value: Value = serde_json::from_slice(raw)?;
        if let Some(identification) = value
            .get_mut("identification")
            .and_then(Value::as_object_mut)
        {
            let missing = identification
                .get("jurisdiction")
                .map_or(true, Value::is_null);
            if missing {
                identification.insert(
                    "jurisdiction".to_string(),
                    Value::String(default_jurisdiction.to_string()),
                );
            }
        }
        serde_json::from_value(value)
    }

    /// Run the whole questionnaire through a fresh session and finalize it.
    pub fn evaluate(
        &self,
        evaluated_at: DateTime<Utc>,
    ) -> Result<EvaluationSummary, EvaluationError> {
        let mut session = EvaluationSession::start(self.identification.clone(), &self.niche)?;
        session.apply(&self.answers)?;
        session.finalize(evaluated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST: &str = r#"{
        "identification": {
            "evaluator_name": "Dra. Ana Souza",
            "registration_number": "123456"
        },
        "niche": "Calculadoras Clínicas",
        "answers": {
            "group": "diagnostic_support",
            "validation": "temporal_split",
            "metrics": {
                "tool_type": "monitoring",
                "false_alarms_below_one_per_4h": true,
                "lead_time_at_least_4h": true,
                "precision_at_least_20": false
            },
            "regulatory": { "use": "clinical", "national_registration": true, "portuguese_instructions": true },
            "security": { "trains_on_identifiable_data": false }
        }
    }"#;

    #[test]
    fn missing_jurisdiction_takes_configured_default() {
        let default = Jurisdiction::parse("PE").expect("valid unit");
        let request = EvaluationRequest::from_json(REQUEST.as_bytes(), &default).expect("decodes");
        assert_eq!(request.identification.jurisdiction.as_str(), "PE");
        assert_eq!(request.identification.registration(), "123456/PE");
    }

    #[test]
    fn explicit_jurisdiction_wins_over_default() {
        let raw = REQUEST.replace(
            r#""registration_number": "123456""#,
            r#""registration_number": "123456", "jurisdiction": "ba""#,
        );
        let request =
            EvaluationRequest::from_json(raw.as_bytes(), &Jurisdiction::default()).expect("decodes");
        assert_eq!(request.identification.jurisdiction.as_str(), "BA");
    }

    #[test]
    fn decoded_request_evaluates() {
        let request =
            EvaluationRequest::from_json(REQUEST.as_bytes(), &Jurisdiction::default()).expect("decodes");
        let summary = request.evaluate(Utc::now()).expect("evaluates");
        assert_eq!(summary.total, 5 + 20 + 20 + 10);
        assert_eq!(summary.max_total, 20 + 30 + 20 + 10);
    }

    #[test]
    fn unknown_answer_option_fails_to_decode() {
        let raw = REQUEST.replace("temporal_split", "vibes");
        assert!(EvaluationRequest::from_json(raw.as_bytes(), &Jurisdiction::default()).is_err());
    }
}

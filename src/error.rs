use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
#[serde(tag = "type")]
pub enum RollError {
    #[error("No normal dice available for reroll")]
    NoEligibleDice,
    #[error("invalid payload: {message}")]
    InvalidPayload { message: String },
}

impl RollError {
    pub fn invalid_payload(error: impl std::fmt::Display) -> Self {
        RollError::InvalidPayload {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for RollError {
    fn from(error: serde_json::Error) -> Self {
        RollError::invalid_payload(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_serialize_with_type_tag() {
        let json = serde_json::to_string(&RollError::NoEligibleDice).expect("serialize");
        assert_eq!(json, r#"{"type":"NoEligibleDice"}"#);
    }

    #[test]
    fn json_errors_become_invalid_payload() {
        let error: RollError = serde_json::from_str::<u8>("nope")
            .map_err(RollError::from)
            .expect_err("should fail");
        assert!(matches!(error, RollError::InvalidPayload { .. }));
        assert!(error.to_string().starts_with("invalid payload"));
    }
}

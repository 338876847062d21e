use binomix_stats::binomial::BinomialModel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A binomial distribution as stored in JSON files.
///
/// Only the parameters are stored; mean and standard deviation are derived
/// again when the file is loaded.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SavedModel {
    pub probability: f64,
    pub trials: u64,
    pub created_at: DateTime<Utc>,
}

impl SavedModel {
    pub(crate) fn from_model(model: &BinomialModel) -> Self {
        Self {
            probability: model.probability(),
            trials: model.trials(),
            created_at: Utc::now(),
        }
    }

    pub(crate) fn to_model(&self) -> anyhow::Result<BinomialModel> {
        Ok(BinomialModel::new(self.probability, self.trials)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip_keeps_parameters() {
        let model = BinomialModel::new(0.25, 12).unwrap();
        let json = serde_json::to_string(&SavedModel::from_model(&model)).unwrap();
        let loaded = serde_json::from_str::<SavedModel>(&json)
            .unwrap()
            .to_model()
            .unwrap();
        assert_eq!(loaded, model);
    }

    #[test]
    fn test_rejects_invalid_probability() {
        let json = r#"{"probability": 1.25, "trials": 4, "created_at": "2026-01-01T00:00:00Z"}"#;
        let saved = serde_json::from_str::<SavedModel>(json).unwrap();
        assert!(saved.to_model().is_err());
    }

    #[test]
    fn test_rejects_negative_trials() {
        let json = r#"{"probability": 0.5, "trials": -4, "created_at": "2026-01-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<SavedModel>(json).is_err());
    }
}

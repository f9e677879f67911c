use serde::{Deserialize, Serialize};

/// Descriptive statistics of one sanitized sample.
///
/// Every field is derived from the same cleaned dataset. Serializes with the
/// keys `count`, `mean`, `median`, `variance`, `standard_deviation`,
/// `minimum`, `maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub variance: f64,
    #[serde(rename = "standard_deviation")]
    pub std_dev: f64,
    #[serde(rename = "minimum")]
    pub min: f64,
    #[serde(rename = "maximum")]
    pub max: f64,
}

impl Summary {
    /// `max - min`.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Render as a JSON object with the fixed summary keys.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOURLY_RATE: f64 = 50.0;

/// Persisted ledger settings, stored under their own key next to the
/// entry collection. Read at entry creation; the resolved rate is captured
/// into the entry, never re-derived later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_rate")]
    pub default_hourly_rate: f64,
}

fn default_rate() -> f64 {
    DEFAULT_HOURLY_RATE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_hourly_rate: DEFAULT_HOURLY_RATE,
        }
    }
}

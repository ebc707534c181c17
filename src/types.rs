use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCategory {
    Sunny,
    Cloudy,
    Rainy,
}

/// Salutation shown in the banner at the top of the landing page.
///
/// `text` and `emoji` are a deterministic function of the timestamp the
/// greeting was resolved for; `icon` is sampled and may differ between calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Greeting {
    pub text: String,
    pub emoji: String,
    pub icon: IconCategory,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            text: "Hello".to_string(),
            emoji: "🌍".to_string(),
            icon: IconCategory::Sunny,
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.text, self.emoji)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

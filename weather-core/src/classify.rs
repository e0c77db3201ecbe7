//! Mapping from provider condition labels to theme categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual theme bucket selected from a condition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeCategory {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Snow,
    Thunderstorm,
    Mist,
    #[default]
    Other,
}

impl ThemeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeCategory::Clear => "clear",
            ThemeCategory::Clouds => "clouds",
            ThemeCategory::Rain => "rain",
            ThemeCategory::Drizzle => "drizzle",
            ThemeCategory::Snow => "snow",
            ThemeCategory::Thunderstorm => "thunderstorm",
            ThemeCategory::Mist => "mist",
            ThemeCategory::Other => "other",
        }
    }

    pub const fn all() -> &'static [ThemeCategory] {
        &[
            ThemeCategory::Clear,
            ThemeCategory::Clouds,
            ThemeCategory::Rain,
            ThemeCategory::Drizzle,
            ThemeCategory::Snow,
            ThemeCategory::Thunderstorm,
            ThemeCategory::Mist,
            ThemeCategory::Other,
        ]
    }
}

impl fmt::Display for ThemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Checked top to bottom; first hit wins.
const RULES: &[(&[&str], ThemeCategory)] = &[
    (&["thunder"], ThemeCategory::Thunderstorm),
    (&["drizzle"], ThemeCategory::Drizzle),
    (&["rain"], ThemeCategory::Rain),
    (&["snow"], ThemeCategory::Snow),
    (&["cloud"], ThemeCategory::Clouds),
    (&["mist", "fog", "haze", "smoke"], ThemeCategory::Mist),
    (&["clear"], ThemeCategory::Clear),
];

/// Classify a free-text condition label. Never fails; unknown or missing
/// labels map to [`ThemeCategory::Other`].
pub fn classify(label: Option<&str>) -> ThemeCategory {
    let label = label.unwrap_or_default().to_lowercase();

    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| label.contains(needle)))
        .map(|(_, category)| *category)
        .unwrap_or_default()
}

//! Visual style for each theme category.

use weather_core::ThemeCategory;

/// Particle overlay drawn over the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Rain,
    Snow,
}

impl Animation {
    /// CSS class that switches the overlay on.
    pub fn css_class(&self) -> &'static str {
        match self {
            Animation::Rain => "rain",
            Animation::Snow => "snow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyle {
    pub gradient: &'static str,
    pub animation: Option<Animation>,
}

const fn style(gradient: &'static str, animation: Option<Animation>) -> ThemeStyle {
    ThemeStyle {
        gradient,
        animation,
    }
}

const OTHER: ThemeStyle = style(
    "linear-gradient(135deg, #D7D2CC 0%, #304352 100%)",
    None,
);

pub(crate) const THEME_STYLES: &[(ThemeCategory, ThemeStyle)] = &[
    (
        ThemeCategory::Clear,
        style("linear-gradient(135deg, #f7971e 0%, #ffd200 100%)", None),
    ),
    (
        ThemeCategory::Clouds,
        style("linear-gradient(135deg, #606c88 0%, #3f4c6b 100%)", None),
    ),
    (
        ThemeCategory::Rain,
        style(
            "linear-gradient(135deg, #4b79a1 0%, #283e51 100%)",
            Some(Animation::Rain),
        ),
    ),
    (
        ThemeCategory::Drizzle,
        style(
            "linear-gradient(135deg, #5f9ea0 0%, #2f4f4f 100%)",
            Some(Animation::Rain),
        ),
    ),
    (
        ThemeCategory::Snow,
        style(
            "linear-gradient(135deg, #83a4d4 0%, #b6fbff 100%)",
            Some(Animation::Snow),
        ),
    ),
    (
        ThemeCategory::Thunderstorm,
        style(
            "linear-gradient(135deg, #2c3e50 0%, #4ca1af 100%)",
            Some(Animation::Rain),
        ),
    ),
    (
        ThemeCategory::Mist,
        style("linear-gradient(135deg, #bdc3c7 0%, #2c3e50 100%)", None),
    ),
    (ThemeCategory::Other, OTHER),
];

pub fn style_for(category: ThemeCategory) -> &'static ThemeStyle {
    THEME_STYLES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, s)| s)
        .unwrap_or(&OTHER)
}

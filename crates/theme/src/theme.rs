use serde::Serialize;

use crate::color::{Hsl, hex_to_hsl};
use crate::settings::{CompanySettings, defaults};

/// One themed color: the effective hex source plus its derived HSL triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeColor {
    pub hex: String,
    pub hsl: Hsl,
}

/// Derived, display-ready theme for a company.
///
/// Always replaced wholesale: a settings change re-derives the full record,
/// never patches individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyTheme {
    pub company_name: String,
    pub logo_url: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub primary: ThemeColor,
    pub secondary: ThemeColor,
    pub accent: ThemeColor,
}

/// Result of a derivation: the theme plus whether any default substituted
/// for a missing or malformed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub theme: CompanyTheme,
    pub used_fallback: bool,
}

// HSL forms of the default colors, pinned so derivation never re-parses its
// own constants. A test asserts they match `hex_to_hsl` of the hex values.
const DEFAULT_PRIMARY_HSL: Hsl = Hsl { hue: 175, saturation: 77, lightness: 26 };
const DEFAULT_SECONDARY_HSL: Hsl = Hsl { hue: 175, saturation: 84, lightness: 32 };
const DEFAULT_ACCENT_HSL: Hsl = Hsl { hue: 38, saturation: 92, lightness: 50 };

impl CompanyTheme {
    /// The all-defaults theme, used before any settings have resolved and
    /// when a settings fetch fails outright.
    pub fn fallback() -> Self {
        Self {
            company_name: defaults::COMPANY_NAME.to_string(),
            logo_url: None,
            hero_title: None,
            hero_subtitle: None,
            primary: ThemeColor {
                hex: defaults::PRIMARY_COLOR.to_string(),
                hsl: DEFAULT_PRIMARY_HSL,
            },
            secondary: ThemeColor {
                hex: defaults::SECONDARY_COLOR.to_string(),
                hsl: DEFAULT_SECONDARY_HSL,
            },
            accent: ThemeColor {
                hex: defaults::ACCENT_COLOR.to_string(),
                hsl: DEFAULT_ACCENT_HSL,
            },
        }
    }

    /// Derive a theme from raw settings.
    ///
    /// Missing fields take their documented default; a present-but-malformed
    /// color logs a warning and substitutes the default for that field only.
    /// The conversion itself is never given malformed input.
    pub fn derive(settings: &CompanySettings) -> Derivation {
        let mut used_fallback = false;

        let mut color = |field: &'static str, value: &Option<String>, default_hex: &'static str, default_hsl: Hsl| {
            match value.as_deref() {
                Some(hex) => match hex_to_hsl(hex) {
                    Ok(hsl) => ThemeColor { hex: hex.to_string(), hsl },
                    Err(err) => {
                        tracing::warn!(field, error = %err, "malformed color in settings; using default");
                        used_fallback = true;
                        ThemeColor { hex: default_hex.to_string(), hsl: default_hsl }
                    }
                },
                None => {
                    used_fallback = true;
                    ThemeColor { hex: default_hex.to_string(), hsl: default_hsl }
                }
            }
        };

        let primary = color(
            "primary_color",
            &settings.primary_color,
            defaults::PRIMARY_COLOR,
            DEFAULT_PRIMARY_HSL,
        );
        let secondary = color(
            "secondary_color",
            &settings.secondary_color,
            defaults::SECONDARY_COLOR,
            DEFAULT_SECONDARY_HSL,
        );
        let accent = color(
            "accent_color",
            &settings.accent_color,
            defaults::ACCENT_COLOR,
            DEFAULT_ACCENT_HSL,
        );

        let company_name = match &settings.company_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => {
                used_fallback = true;
                defaults::COMPANY_NAME.to_string()
            }
        };

        Derivation {
            theme: CompanyTheme {
                company_name,
                logo_url: settings.logo_url.clone(),
                hero_title: settings.hero_title.clone(),
                hero_subtitle: settings.hero_subtitle.clone(),
                primary,
                secondary,
                accent,
            },
            used_fallback,
        }
    }
}

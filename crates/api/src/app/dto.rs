//! Request/response DTOs and JSON mapping helpers.

use serde::Deserialize;

use perkhub_theme::{CompanySettings, CompanyTheme, ThemePhase};

#[derive(Debug, Deserialize)]
pub struct NavigateQuery {
    pub path: String,
}

/// Wholesale replacement of a tenant's settings. Omitted fields clear to
/// "unset" (and thus derive their defaults); there is no partial patch.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsRequest {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub company_name: Option<String>,
    pub logo_url: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
}

impl UpdateSettingsRequest {
    pub fn into_settings(self) -> CompanySettings {
        CompanySettings {
            primary_color: self.primary_color,
            secondary_color: self.secondary_color,
            accent_color: self.accent_color,
            company_name: self.company_name,
            logo_url: self.logo_url,
            hero_title: self.hero_title,
            hero_subtitle: self.hero_subtitle,
        }
    }
}

pub fn theme_to_json(theme: &CompanyTheme, phase: ThemePhase) -> serde_json::Value {
    serde_json::json!({
        "phase": phase,
        "company_name": theme.company_name,
        "logo_url": theme.logo_url,
        "hero_title": theme.hero_title,
        "hero_subtitle": theme.hero_subtitle,
        "colors": {
            "primary": color_to_json(&theme.primary),
            "secondary": color_to_json(&theme.secondary),
            "accent": color_to_json(&theme.accent),
        },
    })
}

fn color_to_json(color: &perkhub_theme::ThemeColor) -> serde_json::Value {
    serde_json::json!({
        "hex": color.hex,
        "hsl": color.hsl.to_string(),
    })
}

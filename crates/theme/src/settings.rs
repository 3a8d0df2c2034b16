use serde::{Deserialize, Serialize};

/// Raw company settings as stored by the settings service.
///
/// Every field is optional: tenants start with nothing configured and the
/// derivation layer fills gaps from [`defaults`]. Colors, when present, are
/// expected in `#RRGGBB` form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_subtitle: Option<String>,
}

/// Default-substitution table, applied field-wise before derivation.
///
/// Logo and hero fields have no defaults; they stay absent.
pub mod defaults {
    pub const PRIMARY_COLOR: &str = "#0f766e";
    pub const SECONDARY_COLOR: &str = "#0d9488";
    pub const ACCENT_COLOR: &str = "#f59e0b";
    pub const COMPANY_NAME: &str = "PerkHub";
}

//! `perkhub-theme` — company theme derivation.
//!
//! Converts a company's raw settings record (hex colors, name, logo, optional
//! hero content) into a normalized [`CompanyTheme`] and applies it to a named
//! presentation-variable sink. The conversion is a pure function; the apply
//! step is an isolated, idempotent side effect behind the [`StyleSink`]
//! trait. Malformed or missing settings degrade to documented defaults and
//! never abort derivation.

pub mod color;
pub mod deriver;
pub mod settings;
pub mod sink;
pub mod theme;

pub use color::{ColorError, Hsl, hex_to_hsl, parse_hex};
pub use deriver::{FetchTicket, SettingsFetchError, ThemeDeriver, ThemePhase};
pub use settings::{CompanySettings, defaults};
pub use sink::{InMemoryStyleSink, SinkError, StyleSink, apply_theme};
pub use theme::{CompanyTheme, Derivation, ThemeColor};

use std::collections::BTreeMap;

use thiserror::Error;

use crate::theme::CompanyTheme;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("style sink rejected '{name}': {reason}")]
pub struct SinkError {
    pub name: String,
    pub reason: String,
}

/// Named presentation-variable sink the derived theme is written into.
///
/// Implementations must support idempotent overwrite of a small fixed set of
/// names; the deriver owns catching and logging failures.
pub trait StyleSink {
    fn set_variable(&mut self, name: &str, value: &str) -> Result<(), SinkError>;
}

/// Variable names written by [`apply_theme`].
pub mod vars {
    pub const PRIMARY: &str = "--primary";
    pub const PRIMARY_FOREGROUND: &str = "--primary-foreground";
    pub const SECONDARY: &str = "--secondary";
    pub const SECONDARY_FOREGROUND: &str = "--secondary-foreground";
    pub const ACCENT: &str = "--accent";
    pub const ACCENT_FOREGROUND: &str = "--accent-foreground";
}

// Fixed foreground pairings: light text on the saturated brand colors, dark
// text on the bright accent.
const PRIMARY_FOREGROUND: &str = "0 0% 100%";
const SECONDARY_FOREGROUND: &str = "0 0% 100%";
const ACCENT_FOREGROUND: &str = "24 10% 10%";

/// Write a theme's variables into a sink.
///
/// Idempotent: re-applying the same theme overwrites each variable with the
/// same value and produces no observable difference.
pub fn apply_theme<S: StyleSink>(theme: &CompanyTheme, sink: &mut S) -> Result<(), SinkError> {
    sink.set_variable(vars::PRIMARY, &theme.primary.hsl.to_string())?;
    sink.set_variable(vars::PRIMARY_FOREGROUND, PRIMARY_FOREGROUND)?;
    sink.set_variable(vars::SECONDARY, &theme.secondary.hsl.to_string())?;
    sink.set_variable(vars::SECONDARY_FOREGROUND, SECONDARY_FOREGROUND)?;
    sink.set_variable(vars::ACCENT, &theme.accent.hsl.to_string())?;
    sink.set_variable(vars::ACCENT_FOREGROUND, ACCENT_FOREGROUND)?;
    Ok(())
}

/// In-memory sink: the test double and the backing store for CSS rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryStyleSink {
    vars: BTreeMap<String, String>,
}

impl InMemoryStyleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render the variables as a `:root` CSS block.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.vars {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }
}

impl StyleSink for InMemoryStyleSink {
    fn set_variable(&mut self, name: &str, value: &str) -> Result<(), SinkError> {
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

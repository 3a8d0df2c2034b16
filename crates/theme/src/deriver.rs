use serde::Serialize;
use thiserror::Error;

use crate::settings::CompanySettings;
use crate::sink::{StyleSink, apply_theme};
use crate::theme::{CompanyTheme, Derivation};

/// Lifecycle of the theme for one company.
///
/// `Default` before any settings have resolved; `Loading` while a fetch is in
/// flight; `Applied` after a clean derivation; `AppliedWithFallback` when any
/// default substituted for missing or malformed data. There is no terminal
/// state: any refetch re-enters `Loading`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePhase {
    Default,
    Loading,
    Applied,
    AppliedWithFallback,
}

/// Sequencing handle for one settings fetch.
///
/// Tickets are issued monotonically; a resolution carrying a superseded
/// ticket is ignored so a stale response can never clobber a newer one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("settings fetch failed: {0}")]
pub struct SettingsFetchError(pub String);

/// Owns the current [`CompanyTheme`] and the sink it is applied to.
///
/// Single-writer: all mutation happens through [`begin_fetch`] and
/// [`resolve`]; readers share the current snapshot. Sink failures are caught
/// and logged here; theme application never propagates a fault upward.
///
/// [`begin_fetch`]: ThemeDeriver::begin_fetch
/// [`resolve`]: ThemeDeriver::resolve
#[derive(Debug)]
pub struct ThemeDeriver<S: StyleSink> {
    sink: S,
    phase: ThemePhase,
    issued: u64,
    theme: CompanyTheme,
}

impl<S: StyleSink> ThemeDeriver<S> {
    /// Start in the `Default` phase with the all-defaults theme applied, so
    /// the presentation layer never observes an empty sink.
    pub fn new(sink: S) -> Self {
        let mut deriver = Self {
            sink,
            phase: ThemePhase::Default,
            issued: 0,
            theme: CompanyTheme::fallback(),
        };
        deriver.apply_current();
        deriver
    }

    /// Register interest in a new settings fetch.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.phase = ThemePhase::Loading;
        FetchTicket(self.issued)
    }

    /// Resolve a fetch issued by [`ThemeDeriver::begin_fetch`].
    ///
    /// A ticket older than the latest issued one is a stale response and is
    /// dropped without touching the current theme. Fetch failure applies the
    /// all-defaults theme rather than surfacing an error.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<CompanySettings, SettingsFetchError>,
    ) {
        if ticket.0 < self.issued {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.issued,
                "ignoring stale settings response"
            );
            return;
        }

        let derivation = match outcome {
            Ok(settings) => CompanyTheme::derive(&settings),
            Err(err) => {
                tracing::warn!(error = %err, "settings fetch failed; applying default theme");
                Derivation {
                    theme: CompanyTheme::fallback(),
                    used_fallback: true,
                }
            }
        };

        self.theme = derivation.theme;
        self.phase = if derivation.used_fallback {
            ThemePhase::AppliedWithFallback
        } else {
            ThemePhase::Applied
        };
        self.apply_current();
    }

    fn apply_current(&mut self) {
        if let Err(err) = apply_theme(&self.theme, &mut self.sink) {
            tracing::warn!(error = %err, "failed to apply theme variables");
        }
    }

    pub fn theme(&self) -> &CompanyTheme {
        &self.theme
    }

    pub fn phase(&self) -> ThemePhase {
        self.phase
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

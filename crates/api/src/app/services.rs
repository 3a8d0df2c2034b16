//! Service wiring: the portal route table, the tenant settings store, and
//! per-tenant theme derivers.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::sse::{Event as SseEvent, KeepAlive, Sse};
use serde::Serialize;
use tokio::sync::broadcast;
use tokio_stream::{StreamExt, wrappers::BroadcastStream};

use perkhub_auth::{Role, Session};
use perkhub_core::TenantId;
use perkhub_gate::{AccessGate, Outcome, RouteTable};
use perkhub_theme::{
    CompanySettings, CompanyTheme, InMemoryStyleSink, ThemeDeriver, ThemePhase,
};

/// Invalidation message fanned out to a tenant's SSE subscribers.
#[derive(Debug, Clone, Serialize)]
pub struct RealtimeMessage {
    pub tenant_id: TenantId,
    pub topic: String,
    pub payload: serde_json::Value,
}

/// The navigable paths of the portal shell, declared once at composition
/// time. Restrictions name every role they accept.
pub fn portal_route_table() -> RouteTable {
    RouteTable::builder()
        .public("/login")
        .authenticated("/dashboard")
        .authenticated("/documents")
        .authenticated("/take-survey")
        .authenticated("/surveys/:id")
        .authenticated("/calendar")
        .authenticated("/notifications")
        .authenticated("/chat")
        .restricted("/admin", vec![Role::Admin, Role::SuperAdmin])
        .restricted("/admin/surveys", vec![Role::Admin, Role::SuperAdmin])
        .restricted("/admin/documents", vec![Role::Admin, Role::SuperAdmin])
        .restricted("/admin/users", vec![Role::Admin, Role::SuperAdmin])
        .restricted("/admin/settings", vec![Role::Admin, Role::SuperAdmin])
        .restricted("/admin/companies", vec![Role::SuperAdmin])
        .build()
        .expect("portal route table is statically valid")
}

pub struct AppServices {
    gate: AccessGate,
    settings: Mutex<HashMap<TenantId, CompanySettings>>,
    themes: Mutex<HashMap<TenantId, ThemeDeriver<InMemoryStyleSink>>>,
    realtime_tx: broadcast::Sender<RealtimeMessage>,
}

pub fn build_services() -> AppServices {
    // Realtime channel (SSE): lossy broadcast, tenant-filtered in handlers.
    let (realtime_tx, _realtime_rx) = broadcast::channel::<RealtimeMessage>(256);

    AppServices {
        gate: AccessGate::new(portal_route_table()),
        settings: Mutex::new(HashMap::new()),
        themes: Mutex::new(HashMap::new()),
        realtime_tx,
    }
}

impl AppServices {
    /// Gate decision for one navigation. Session resolution is synchronous
    /// on the server, so the loading flag is always settled here.
    pub fn decide(&self, path: &str, session: Option<&Session>) -> Outcome {
        self.gate.decide(path, session, false)
    }

    pub fn settings_get(&self, tenant_id: TenantId) -> CompanySettings {
        self.settings
            .lock()
            .unwrap()
            .get(&tenant_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Replace a tenant's settings wholesale, re-derive the theme under a
    /// fresh ticket, and broadcast an invalidation to the tenant's stream.
    pub fn settings_put(
        &self,
        tenant_id: TenantId,
        settings: CompanySettings,
    ) -> (CompanyTheme, ThemePhase) {
        self.settings
            .lock()
            .unwrap()
            .insert(tenant_id, settings.clone());

        let snapshot = {
            let mut themes = self.themes.lock().unwrap();
            let deriver = themes
                .entry(tenant_id)
                .or_insert_with(|| ThemeDeriver::new(InMemoryStyleSink::new()));
            let ticket = deriver.begin_fetch();
            deriver.resolve(ticket, Ok(settings));
            (deriver.theme().clone(), deriver.phase())
        };

        // Broadcast that settings changed (lossy; no backpressure on core).
        let _ = self.realtime_tx.send(RealtimeMessage {
            tenant_id,
            topic: "settings.updated".to_string(),
            payload: serde_json::json!({
                "kind": "invalidation",
                "scope": "company-settings",
            }),
        });

        snapshot
    }

    /// Current theme for a tenant, deriving from stored settings on first
    /// access (the session-start fetch).
    pub fn theme_snapshot(&self, tenant_id: TenantId) -> (CompanyTheme, ThemePhase) {
        let settings = self.settings_get(tenant_id);
        let mut themes = self.themes.lock().unwrap();
        let deriver = themes
            .entry(tenant_id)
            .or_insert_with(|| ThemeDeriver::new(InMemoryStyleSink::new()));

        if deriver.phase() == ThemePhase::Default {
            let ticket = deriver.begin_fetch();
            deriver.resolve(ticket, Ok(settings));
        }

        (deriver.theme().clone(), deriver.phase())
    }

    /// The applied presentation variables rendered as a `:root` CSS block.
    pub fn theme_css(&self, tenant_id: TenantId) -> String {
        // Force the session-start derivation before rendering.
        let _ = self.theme_snapshot(tenant_id);

        let themes = self.themes.lock().unwrap();
        match themes.get(&tenant_id) {
            Some(deriver) => deriver.sink().to_css(),
            None => InMemoryStyleSink::new().to_css(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RealtimeMessage> {
        self.realtime_tx.subscribe()
    }
}

/// Tenant-filtered SSE stream over the realtime broadcast channel.
pub fn tenant_sse_stream(
    services: Arc<AppServices>,
    tenant_id: TenantId,
) -> Sse<impl tokio_stream::Stream<Item = Result<SseEvent, Infallible>>> {
    let rx = services.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(move |msg| match msg {
        Ok(m) if m.tenant_id == tenant_id => {
            let data = serde_json::to_string(&m.payload).unwrap_or_else(|_| "{}".to_string());
            Some(Ok(SseEvent::default().event(m.topic).data(data)))
        }
        _ => None,
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15)))
}

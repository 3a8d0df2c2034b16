use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use perkhub_auth::{JwtClaims, Role};
use perkhub_core::{TenantId, UserId};
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(jwt_secret: &str) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = perkhub_api::app::build_app(jwt_secret.to_string());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn mint_jwt(jwt_secret: &str, tenant_id: TenantId, role: Role) -> String {
    let now = Utc::now();
    let claims = JwtClaims {
        sub: UserId::new(),
        tenant_id,
        role,
        first_name: Some("Test".to_string()),
        last_name: Some("User".to_string()),
        issued_at: now,
        expires_at: now + ChronoDuration::minutes(10),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("failed to encode jwt")
}

async fn navigate(
    client: &reqwest::Client,
    base_url: &str,
    token: Option<&str>,
    path: &str,
) -> serde_json::Value {
    let mut req = client
        .get(format!("{}/navigate", base_url))
        .query(&[("path", path)]);
    if let Some(token) = token {
        req = req.bearer_auth(token);
    }

    let res = req.send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn auth_required_for_protected_endpoints() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let client = reqwest::Client::new();
    for path in ["/whoami", "/settings", "/theme", "/theme.css"] {
        let res = client
            .get(format!("{}{}", srv.base_url, path))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "path {path}");
    }
}

#[tokio::test]
async fn whoami_reflects_the_token() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let tenant_id = TenantId::new();
    let token = mint_jwt(jwt_secret, tenant_id, Role::Admin);

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["tenant_id"].as_str().unwrap(), tenant_id.to_string());
    assert_eq!(body["role"], "admin");
    assert_eq!(body["display_name"], "Test User");
}

#[tokio::test]
async fn navigation_decisions_follow_role_and_path() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let client = reqwest::Client::new();

    let tenant_id = TenantId::new();
    let user = mint_jwt(jwt_secret, tenant_id, Role::User);
    let admin = mint_jwt(jwt_secret, tenant_id, Role::Admin);
    let superadmin = mint_jwt(jwt_secret, tenant_id, Role::SuperAdmin);

    // Root dispatches by role.
    let body = navigate(&client, &srv.base_url, None, "/").await;
    assert_eq!(body["outcome"], "redirect");
    assert_eq!(body["location"], "/login");

    let body = navigate(&client, &srv.base_url, Some(&user), "/").await;
    assert_eq!(body["location"], "/dashboard");

    let body = navigate(&client, &srv.base_url, Some(&admin), "/").await;
    assert_eq!(body["location"], "/admin");

    // Protected pages: anonymous redirects, insufficient role is denied.
    let body = navigate(&client, &srv.base_url, None, "/take-survey").await;
    assert_eq!(body["outcome"], "redirect");
    assert_eq!(body["location"], "/login");

    let body = navigate(&client, &srv.base_url, Some(&user), "/admin/surveys").await;
    assert_eq!(body["outcome"], "denied");

    let body = navigate(&client, &srv.base_url, Some(&admin), "/admin/surveys").await;
    assert_eq!(body["outcome"], "render");

    // Strict membership: admins do not inherit the superadmin-only page.
    let body = navigate(&client, &srv.base_url, Some(&admin), "/admin/companies").await;
    assert_eq!(body["outcome"], "denied");

    let body = navigate(&client, &srv.base_url, Some(&superadmin), "/admin/companies").await;
    assert_eq!(body["outcome"], "render");

    // Outside the registry.
    let body = navigate(&client, &srv.base_url, Some(&admin), "/payroll").await;
    assert_eq!(body["outcome"], "not_found");
}

#[tokio::test]
async fn invalid_token_navigates_as_anonymous() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let client = reqwest::Client::new();

    let body = navigate(&client, &srv.base_url, Some("not-a-jwt"), "/dashboard").await;
    assert_eq!(body["outcome"], "redirect");
    assert_eq!(body["location"], "/login");
}

#[tokio::test]
async fn settings_write_is_admin_only() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let client = reqwest::Client::new();

    let tenant_id = TenantId::new();
    let user = mint_jwt(jwt_secret, tenant_id, Role::User);

    let res = client
        .put(format!("{}/settings", srv.base_url))
        .bearer_auth(&user)
        .json(&json!({"primary_color": "#FF0000"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "forbidden");
}

#[tokio::test]
async fn settings_update_rethemes_the_tenant() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let client = reqwest::Client::new();

    let tenant_id = TenantId::new();
    let admin = mint_jwt(jwt_secret, tenant_id, Role::Admin);
    let user = mint_jwt(jwt_secret, tenant_id, Role::User);

    // Before any settings exist the default teal is applied.
    let res = client
        .get(format!("{}/theme.css", srv.base_url))
        .bearer_auth(&user)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers()[reqwest::header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/css"));
    let css = res.text().await.unwrap();
    assert!(css.contains("--primary: 175 77% 26%;"));

    let res = client
        .put(format!("{}/settings", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({
            "primary_color": "#FF0000",
            "secondary_color": "#00FF00",
            "accent_color": "#0000FF",
            "company_name": "Acme Corp",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["theme"]["phase"], "applied");
    assert_eq!(body["theme"]["colors"]["primary"]["hsl"], "0 100% 50%");

    // Any member of the tenant now sees the new theme.
    let res = client
        .get(format!("{}/theme.css", srv.base_url))
        .bearer_auth(&user)
        .send()
        .await
        .unwrap();
    let css = res.text().await.unwrap();
    assert!(css.contains("--primary: 0 100% 50%;"));
    assert!(css.contains("--secondary: 120 100% 50%;"));
    assert!(css.contains("--accent: 240 100% 50%;"));
}

#[tokio::test]
async fn malformed_color_falls_back_without_failing() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let client = reqwest::Client::new();

    let tenant_id = TenantId::new();
    let admin = mint_jwt(jwt_secret, tenant_id, Role::Admin);

    let res = client
        .put(format!("{}/settings", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({
            "primary_color": "not-a-color",
            "company_name": "Acme Corp",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["theme"]["phase"], "applied_with_fallback");
    assert_eq!(body["theme"]["colors"]["primary"]["hex"], "#0f766e");
    assert_eq!(body["theme"]["colors"]["primary"]["hsl"], "175 77% 26%");
    assert_eq!(body["theme"]["company_name"], "Acme Corp");
}

#[tokio::test]
async fn themes_are_tenant_isolated() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let client = reqwest::Client::new();

    let tenant_a = TenantId::new();
    let tenant_b = TenantId::new();
    let admin_a = mint_jwt(jwt_secret, tenant_a, Role::Admin);
    let user_b = mint_jwt(jwt_secret, tenant_b, Role::User);

    let res = client
        .put(format!("{}/settings", srv.base_url))
        .bearer_auth(&admin_a)
        .json(&json!({"primary_color": "#FF0000"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Tenant B still sees the defaults.
    let res = client
        .get(format!("{}/theme.css", srv.base_url))
        .bearer_auth(&user_b)
        .send()
        .await
        .unwrap();
    let css = res.text().await.unwrap();
    assert!(css.contains("--primary: 175 77% 26%;"));
}

#[tokio::test]
async fn settings_round_trip() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let client = reqwest::Client::new();

    let tenant_id = TenantId::new();
    let admin = mint_jwt(jwt_secret, tenant_id, Role::Admin);

    let res = client
        .get(format!("{}/settings", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({}));

    let res = client
        .put(format!("{}/settings", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({
            "company_name": "Acme Corp",
            "logo_url": "https://cdn.example.com/acme.svg",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/settings", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["company_name"], "Acme Corp");
    assert_eq!(body["logo_url"], "https://cdn.example.com/acme.svg");
}

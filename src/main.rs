use agora::{
    client::{AuthService, Route, RouteGuard, SessionClient, SessionState, SessionStore},
    config::Config,
};
use dioxus_logger::tracing;

/// Areas checked on startup, one per guard combination
const STARTUP_PATHS: [&str; 4] = ["/news", "/register", "/cabinet", "/admin"];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let client = match SessionClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to build API client: {}", e);
            std::process::exit(1);
        }
    };
    let store = SessionStore::new();
    let auth = AuthService::new(&client, &store);
    let guard = RouteGuard::new(store.clone());

    tracing::info!(base_url = %client.base_url(), language = %client.language(), "Resolving session");

    let state = match config.credentials() {
        Some((email, password)) => match auth.login(email, password).await {
            Ok(state) => state,
            Err(e) => {
                tracing::error!(error = %e, kind = ?e.kind(), "Login failed");
                auth.refresh_session().await
            }
        },
        None => auth.refresh_session().await,
    };

    match &state {
        SessionState::Present(session) => tracing::info!(
            user_id = %session.user_id,
            email = %session.email,
            status = %session.status,
            roles = ?session.roles,
            "Session resolved"
        ),
        _ => tracing::info!("No user logged in"),
    }

    for path in STARTUP_PATHS {
        let route = Route::from_path(path);

        match guard.navigate(&route).await {
            Some(decision) => tracing::info!(route = %route.path(), ?decision, "Guard decision"),
            None => tracing::warn!(route = %route.path(), "Navigation superseded"),
        }
    }
}

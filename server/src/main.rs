mod config;
mod edge;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(api_url = %config.api_url, cookie = %config.session_cookie, "posts API configured");

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "postdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}

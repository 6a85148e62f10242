use quickpoll_app::AppContext;
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let app_context = match AppContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let port = app_context.config.port;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    if !app_context.config.static_dir.join("index.html").exists() {
        tracing::warn!(
            "No UI bundle at {}; build it with `trunk build --release` in quickpoll-ui",
            app_context.config.static_dir.display()
        );
    }

    let app = quickpoll_server::router(app_context);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    tracing::info!("Frontend server listening on port {}", port);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

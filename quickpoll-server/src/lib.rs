//! Static file server for the QuickPoll UI bundle that forwards `/api` to the
//! polls backend when one is configured.

mod proxy;
mod static_files;

use axum::Router;
use quickpoll_app::AppContext;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn router(ctx: AppContext) -> Router {
    let mut app = Router::new();

    if let Some(backend) = ctx.proxy.clone() {
        app = app.merge(proxy::routes(backend));
    }

    app.fallback_service(static_files::service(&ctx.config.static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

use anyhow::Context;
use axum::{
    routing::{get, post, MethodRouter},
    Router,
};
use std::net::{IpAddr, SocketAddr};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

mod error;
mod extractors;
mod handlers;
mod store;

#[cfg(test)]
mod scenarios;

pub use error::Error;
pub use store::{SharedStore, Store};

#[derive(structopt::StructOpt)]
struct Opt {
    /// Address to listen on
    #[structopt(long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to listen on
    #[structopt(short, long, default_value = "5000")]
    port: u16,
}

// Every route answers unsupported methods with the same 404 as unknown paths.
fn comments_routes() -> MethodRouter<SharedStore> {
    get(handlers::fetch_comments)
        .post(handlers::post_comment)
        .fallback(handlers::not_found)
}

pub fn app(store: SharedStore) -> Router {
    let router = Router::new()
        .route("/", get(handlers::root).fallback(handlers::not_found))
        .route("/api/comments", comments_routes())
        .route("/api/comments/", comments_routes())
        .route(
            "/api/comments/:id/reply",
            post(handlers::post_reply).fallback(handlers::not_found),
        )
        .route(
            "/api/comments/:id/like",
            post(handlers::like_comment).fallback(handlers::not_found),
        )
        .route(
            "/api/comments/:id/reply/:reply_id/like",
            post(handlers::like_reply).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .with_state(store);
    with_layers(router)
}

/// Wraps `router` in the panic, CORS and tracing layers every response goes through
pub fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handlers::panicked))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let opt = <Opt as structopt::StructOpt>::from_args();
    let addr = SocketAddr::from((opt.bind, opt.port));

    let app = app(SharedStore::new());

    tracing::info!("listening on {}", addr);
    axum::Server::try_bind(&addr)
        .with_context(|| format!("binding to {addr}"))?
        .serve(app.into_make_service())
        .await
        .context("serving axum webserver")
}

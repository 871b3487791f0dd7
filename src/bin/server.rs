use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use budget_tracker::{
    AppState, Args, InMemoryTransactionStore, SQLiteTransactionStore, build_router,
    graceful_shutdown, session_secret_from_env,
};

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();
    let addr = args.socket_addr();
    let secret = session_secret_from_env();

    let state = match &args.db_path {
        Some(db_path) => {
            let connection = Connection::open(db_path).expect("Could not open the database.");
            let store = SQLiteTransactionStore::new(connection)
                .expect("Could not create the transaction table.");
            tracing::info!("Storing transactions in {}", db_path.display());

            AppState::new(&secret, store)
        }
        None => {
            tracing::info!("Storing transactions in memory, they will be lost on shutdown");

            AppState::new(&secret, InMemoryTransactionStore::new())
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    #[cfg(debug_assertions)]
    let router = router.layer(axum::middleware::from_fn(
        budget_tracker::logging_middleware,
    ));

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Server stopped unexpectedly.");
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}

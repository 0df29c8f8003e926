use std::{
    net::{IpAddr, SocketAddr},
    time::Duration,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use walleteur_rs::{AnimationConfig, AppState, build_router, graceful_shutdown, logging_middleware};

/// The web server for walleteur_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The address to listen on.
    #[arg(long, default_value = "127.0.0.1")]
    address: IpAddr,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// How long the add funds modal takes to slide into view, in milliseconds.
    #[arg(long, default_value_t = 300)]
    slide_in_ms: u64,

    /// How long the add funds modal takes to slide out of view, in milliseconds.
    #[arg(long, default_value_t = 250)]
    slide_out_ms: u64,

    /// How long a pressed button stays pressed, in milliseconds.
    #[arg(long, default_value_t = 150)]
    press_reset_ms: u64,

    /// Log filter directives, e.g. "info" or "walleteur_rs=debug".
    ///
    /// The `RUST_LOG` environment variable takes precedence when set.
    #[arg(long, default_value = "info")]
    log_filter: String,

    /// Log every request and response body.
    #[arg(long)]
    log_bodies: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logging(&args.log_filter);

    let addr = SocketAddr::new(args.address, args.port);

    let state = AppState::new(AnimationConfig {
        slide_in: Duration::from_millis(args.slide_in_ms),
        slide_out: Duration::from_millis(args.slide_out_ms),
        press_reset: Duration::from_millis(args.press_reset_ms),
    });

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(state);

    let router = if args.log_bodies {
        router.layer(middleware::from_fn(logging_middleware))
    } else {
        router
    };

    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("server stopped with an error: {error}");
        std::process::exit(1);
    }
}

fn setup_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    tracing_subscriber::registry()
        .with(stdout_log.with_filter(filter))
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
        // Errors are logged where they happen, so skip the default 5xx logging.
        .on_failure(());

    router.layer(tracing_layer)
}

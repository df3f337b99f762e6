//! Code the Future Website
//!
//! Marketing website for Code the Future - coding classes for ages 7-18.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "codefuture_site=debug,tower_http=debug".parse().expect("valid filter")
        }))
        .with(fmt::layer())
        .init();

    tracing::info!("Starting Code the Future website server");

    codefuture_site::run().await;
}

//! Development Tools
//!
//! Hot reload via SSE for development.

use std::path::Path;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::state::AppState;

/// Directories whose changes trigger a browser reload.
const WATCHED_DIRS: [&str; 2] = ["crates/codefuture-site/templates", "public"];

/// SSE endpoint for live reload.
pub async fn livereload_handler(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let (tx, rx) = mpsc::channel::<Result<Event, std::convert::Infallible>>(16);

    if let Some(reloader) = state.reloader() {
        let mut receiver = reloader.subscribe();

        tokio::spawn(async move {
            while receiver.recv().await.is_ok() {
                if tx.send(Ok(Event::default().data("reload"))).await.is_err() {
                    break;
                }
            }
        });
    }

    Sse::new(tokio_stream::wrappers::ReceiverStream::new(rx)).keep_alive(KeepAlive::default())
}

/// Spawn the file watcher feeding the reload channel.
pub fn spawn_file_watcher(state: AppState) {
    std::thread::spawn(move || {
        let (tx, rx) = std::sync::mpsc::channel();

        let mut watcher = match RecommendedWatcher::new(tx, Config::default()) {
            Ok(watcher) => watcher,
            Err(e) => {
                error!("Failed to create file watcher: {}", e);
                return;
            }
        };

        for dir in WATCHED_DIRS {
            let path = Path::new(dir);
            if !path.exists() {
                continue;
            }
            match watcher.watch(path, RecursiveMode::Recursive) {
                Ok(()) => info!("Watching {} for changes", dir),
                Err(e) => error!("Failed to watch {}: {}", dir, e),
            }
        }

        loop {
            match rx.recv() {
                Ok(Ok(event)) => {
                    if event.kind.is_modify() || event.kind.is_create() || event.kind.is_remove() {
                        debug!("File change detected: {:?}", event.paths);
                        if let Some(reloader) = state.reloader() {
                            let _ = reloader.send(());
                        }
                    }
                }
                Ok(Err(e)) => {
                    error!("Watch error: {:?}", e);
                }
                Err(e) => {
                    error!("Channel error: {:?}", e);
                    break;
                }
            }
        }
    });
}

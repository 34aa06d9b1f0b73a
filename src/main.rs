use crate::config::{Backend, Config};
use crate::db::{init_db, Database};
use crate::responses::html_error_response;
use crate::router::handle;
use crate::state::AppState;
use crate::store::{ComplaintStore, SupabaseStore};
use astra::Server;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod controllers;
mod db;
mod domain;
mod errors;
mod notices;
mod responses;
mod router;
mod state;
mod store;
mod templates;


fn open_store(cfg: &Config) -> Result<Arc<dyn ComplaintStore>, store::StoreError> {
    match &cfg.backend {
        Backend::Supabase { url, api_key } => {
            info!(%url, "using Supabase backend");
            let store = SupabaseStore::new(url, api_key.clone(), cfg.http_timeout)?;
            Ok(Arc::new(store))
        }
        Backend::Sqlite { path } => {
            info!(%path, "using local SQLite backend");
            let db = Database::open(path)?;
            init_db(&db)?;
            Ok(Arc::new(db))
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("complaint_hub=info")),
        )
        .init();

    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let store = match open_store(&cfg) {
        Ok(store) => store,
        Err(e) => {
            error!("could not open complaint store: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(store);

    info!("Starting server at http://{}", cfg.addr);
    let server = Server::bind(cfg.addr).max_workers(cfg.workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            warn!(error = %err, "request failed");
            html_error_response(err)
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}

//! Mock search backend for a finance-style search UI.
//!
//! Fabricates headline records for any query, paginates them and answers
//! after a short random delay, so a frontend can be exercised without a real
//! index. [`utils::debounce`] covers the caller side of input-driven search.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;
use std::time::Instant;

use config::Config;
use services::SearchProvider;

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<dyn SearchProvider>,
    pub config: Config,
    pub start_time: Instant,
}

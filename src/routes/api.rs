use crate::handlers;
use actix_web::{web, Scope};

pub fn config() -> Scope {
    web::scope("/api")
        .route("/health", web::get().to(handlers::health_check))
        .route("/search", web::get().to(handlers::search))
        .route("/top-results", web::get().to(handlers::top_results))
}

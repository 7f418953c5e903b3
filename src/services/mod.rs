pub mod dataset_service;
pub mod search_service;

pub use dataset_service::*;
pub use search_service::*;

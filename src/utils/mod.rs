pub mod debounce;
pub mod params;

pub use debounce::*;
pub use params::*;

pub mod registry;
pub mod scrape;

pub use registry::ApiMetrics;

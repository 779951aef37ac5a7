mod callback;
mod health;
mod start;
mod status;

pub use callback::{
    extract_file_url, generic_callback_handler, landing_analyzer_callback_handler,
    seo_callback_handler, website_intelligence_callback_handler,
};
pub use health::health_handler;
pub use start::{
    generic_start_handler, landing_analyzer_start_handler, seo_start_handler,
    website_intelligence_start_handler,
};
pub use status::{status_path_handler, status_query_handler};

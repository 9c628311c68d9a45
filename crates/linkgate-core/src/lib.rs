pub mod config;
pub mod logging;

pub mod allocator;
pub mod link_db;
pub mod shortcode;
pub mod shortener;
pub mod store;
pub mod url_gate;

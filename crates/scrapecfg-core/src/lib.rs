pub mod config;
pub mod error;
pub mod logging;

pub mod site;
pub mod url_host;

pub mod config;
pub mod input;

pub use config::Config;
pub use input::{parse_domains, read_domains};

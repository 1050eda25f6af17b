// 三层架构模块
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;
pub mod error;

// 重新导出主要类型
pub use domain::{generate_dorks, generate_dorks_by_name, Category};
pub use application::{read_domains, Config};
pub use infrastructure::{save_output, write_output, Logger, LoggerTrait, OutputFormat};
pub use presentation::GenerationSummary;
pub use error::DorkError;

pub mod logging;
pub mod output;

pub use logging::{Logger, LoggerTrait};
pub use output::{save_output, write_output, OutputFormat};

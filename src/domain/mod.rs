pub mod catalog;
pub mod dork;

pub use catalog::Category;
pub use dork::{build_query, generate_dorks, generate_dorks_by_name};

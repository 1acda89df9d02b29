pub mod cli;
pub mod types;

pub use cli::AwsCli;
pub use types::*;

pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod report;
pub mod schema;
pub mod validator;

pub use error::{MarketlintError, Result};

pub mod load;
pub mod types;

pub use types::{Config, JOBS_ENV_VAR};

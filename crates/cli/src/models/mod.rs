mod cli_args;
mod cli_error;
mod plan_args;
mod plan_output;
mod plan_parameters;
mod validate_args;

pub use cli_args::*;
pub use cli_error::*;
pub use plan_args::*;
pub use plan_output::*;
pub use plan_parameters::*;
pub use validate_args::*;

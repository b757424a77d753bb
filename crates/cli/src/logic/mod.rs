mod init_logging;
mod plan;
mod read_recipients;
mod run;
mod validate;

pub use init_logging::*;
pub use plan::*;
pub use read_recipients::*;
pub use run::*;
pub use validate::*;

mod balance_provider;
mod confirmation_watcher;
mod identity_search;
mod transaction_submitter;
mod wallet_session;

pub use balance_provider::*;
pub use confirmation_watcher::*;
pub use identity_search::*;
pub use transaction_submitter::*;
pub use wallet_session::*;

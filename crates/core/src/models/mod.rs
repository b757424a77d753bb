mod config;
mod disperse_call;
mod disperse_variant;
mod disperser;
mod error;
mod evm_address;
mod recipient;
mod recipient_list;
mod searched_user;
mod submission_state;
mod token;
mod traits;
mod transfer_request;

pub use config::*;
pub use disperse_call::*;
pub use disperse_variant::*;
pub use disperser::*;
pub use error::*;
pub use evm_address::*;
pub use recipient::*;
pub use recipient_list::*;
pub use searched_user::*;
pub use submission_state::*;
pub use token::*;
pub use traits::*;
pub use transfer_request::*;

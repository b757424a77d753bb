mod build_transfer_request;
mod disperser;
mod encode_call;
mod parse_recipients;
mod resolve_token;
mod scale_amount;
mod user_search;

pub use build_transfer_request::*;
pub use encode_call::*;
pub use parse_recipients::*;
pub use resolve_token::*;
pub use scale_amount::*;
pub use user_search::*;

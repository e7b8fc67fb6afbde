//! Access token state: the token type, its store and expiry parsing

mod store;
mod timestamp;

pub use store::{Token, TokenStore};
pub use timestamp::{TimestampPolicy, parse_instant};

mod client;
mod errors;
pub mod locator;
mod user_agent;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::locator::{Locator, DEFAULT_BASE_URL, DEFAULT_SEASON};

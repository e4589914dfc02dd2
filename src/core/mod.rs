pub mod client;
pub mod content;
pub mod query;
pub mod router;

pub use crate::domain::ports::{ContentSource, DEFAULT_RECENT_LIMIT};
pub use crate::utils::error::Result;

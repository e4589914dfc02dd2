pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::site::SiteConfig;
pub use core::client::CmsClient;
pub use core::content::ContentService;
pub use core::query::{FilterOp, Query, SortDir};
pub use core::router::{Page, Route, Router};
pub use domain::model::PhotoCategory;
pub use domain::ports::ContentSource;
pub use utils::error::{Result, SiteError};

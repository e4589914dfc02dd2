use crate::domain::model::PhotoCategory;
use crate::domain::ports::DEFAULT_RECENT_LIMIT;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "aperture-content")]
#[command(about = "Content-access CLI for the Aperture photo blog")]
pub struct CliConfig {
    /// CMS base URL; falls back to the site config file, then to
    /// APERTURE_API_BASE_URL.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a site.toml config file
    #[arg(long)]
    pub config: Option<String>,

    /// Brand title used when no config file is given
    #[arg(long, default_value = "Aperture Studio")]
    pub brand: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List articles, newest first
    Articles {
        /// Case-insensitive title search term
        #[arg(long)]
        search: Option<String>,
    },
    /// Fetch a single article by slug
    Article { slug: String },
    /// Post a comment on an article
    Comment {
        article_id: u64,
        author: String,
        content: String,
    },
    /// List photos in a category
    Photos {
        #[arg(value_enum)]
        category: PhotoCategory,
    },
    /// List all journeys, newest first
    Journeys,
    /// Fetch a single journey by slug
    Journey { slug: String },
    /// List recent articles, excluding one slug
    Recent {
        slug: String,
        #[arg(long, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: u32,
    },
    /// Print the route table with derived document titles
    Routes,
}

use aperture_content::utils::{logger, validation::Validate};
use aperture_content::{
    CliConfig, CmsClient, Command, ContentService, ContentSource, Router, SiteConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting aperture-content CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Site config file is optional; flags win over the file, the file wins
    // over the environment.
    let site_config = match &config.config {
        Some(path) => {
            let site = SiteConfig::from_file(path)?;
            if let Err(e) = site.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            Some(site)
        }
        None => None,
    };

    let brand = site_config
        .as_ref()
        .map(|site| site.site.brand.clone())
        .unwrap_or_else(|| config.brand.clone());

    let client = match config
        .base_url
        .as_deref()
        .or_else(|| site_config.as_ref().and_then(|site| site.api.base_url.as_deref()))
    {
        Some(base_url) => CmsClient::new(Some(base_url)),
        None => CmsClient::from_env(),
    };
    let content = ContentService::new(client);

    if let Command::Routes = config.command {
        let router = Router::new(brand);
        for route in router.routes() {
            println!("{:<18} {:<14} {}", route.path, route.name, router.title_for(route));
        }
        return Ok(());
    }

    let response = match &config.command {
        Command::Articles { search } => content.get_articles(search.as_deref()).await,
        Command::Article { slug } => content.get_article_by_slug(slug).await,
        Command::Comment {
            article_id,
            author,
            content: body,
        } => content.post_comment(*article_id, author, body).await,
        Command::Photos { category } => content.get_photos_by_category(*category).await,
        Command::Journeys => content.get_journeys().await,
        Command::Journey { slug } => content.get_journey_by_slug(slug).await,
        Command::Recent { slug, limit } => {
            content.get_recent_articles(slug, Some(*limit)).await
        }
        Command::Routes => unreachable!("handled above"),
    };

    match response {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                tracing::error!("❌ CMS returned {}", status);
                eprintln!("❌ CMS returned {}", status);
                std::process::exit(1);
            }

            let payload: serde_json::Value = response.json().await?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
            tracing::info!("✅ Request completed");
        }
        Err(e) => {
            tracing::error!("❌ Request failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

use anyhow::Result;
use aperture_content::core::client::BASE_URL_ENV;
use aperture_content::utils::validation::Validate;
use aperture_content::{CmsClient, ContentService, ContentSource, SiteConfig};
use httpmock::prelude::*;
use tempfile::TempDir;

// Both halves manipulate the same environment variable, so they live in one
// sequential test instead of racing across test threads.
#[tokio::test]
async fn test_client_from_env() {
    // Missing variable: construction must not panic or error; only calls
    // through the client do.
    std::env::remove_var(BASE_URL_ENV);
    let client = CmsClient::from_env();
    assert!(client.base_url().is_none());

    let server = MockServer::start();

    let journeys_mock = server.mock(|when, then| {
        when.method(GET).path("/api/journeys");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"data": []}));
    });

    std::env::set_var(BASE_URL_ENV, server.base_url());
    let client = CmsClient::from_env();
    std::env::remove_var(BASE_URL_ENV);

    assert!(client.base_url().is_some());

    let service = ContentService::new(client);
    let response = service.get_journeys().await.unwrap();

    assert!(response.status().is_success());
    journeys_mock.assert();
}

#[tokio::test]
async fn test_site_config_file_wires_up_the_client() -> Result<()> {
    let server = MockServer::start();

    let photos_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/photos")
            .query_param("filters[category][$eq]", "portrait");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"data": []}));
    });

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("site.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
[site]
brand = "Aperture Studio"

[api]
base_url = "{}"
"#,
            server.base_url()
        ),
    )?;

    let site = SiteConfig::from_file(&config_path)?;
    site.validate()?;

    let client = CmsClient::new(site.api.base_url.as_deref());
    let service = ContentService::new(client);
    let response = service
        .get_photos_by_category(aperture_content::PhotoCategory::Portrait)
        .await?;

    assert!(response.status().is_success());
    photos_mock.assert();
    Ok(())
}

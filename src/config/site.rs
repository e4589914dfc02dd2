use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Site configuration loaded from a TOML file, with `${VAR}` environment
/// variable substitution so deployments can keep secrets out of the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    #[serde(default)]
    pub api: ApiSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    /// Brand title, used as the document-title fallback.
    pub brand: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_BASE_URL})；未設定的變數原樣保留
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("site.brand", &self.site.brand)?;

        if let Some(base_url) = &self.api.base_url {
            validation::validate_url("api.base_url", base_url)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[site]
brand = "Aperture Studio"
description = "Personal photography and travel notes"

[api]
base_url = "http://localhost:1337"
"#;

    #[test]
    fn test_parse_sample_config() {
        let config = SiteConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.site.brand, "Aperture Studio");
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://localhost:1337")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_section_is_optional() {
        let config = SiteConfig::from_toml_str("[site]\nbrand = \"Aperture\"\n").unwrap();
        assert!(config.api.base_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("APERTURE_TEST_BRAND", "Darkroom");
        let config =
            SiteConfig::from_toml_str("[site]\nbrand = \"${APERTURE_TEST_BRAND}\"\n").unwrap();
        assert_eq!(config.site.brand, "Darkroom");
        std::env::remove_var("APERTURE_TEST_BRAND");
    }

    #[test]
    fn test_unset_env_var_is_left_intact() {
        let config =
            SiteConfig::from_toml_str("[site]\nbrand = \"${APERTURE_NO_SUCH_VAR}\"\n").unwrap();
        assert_eq!(config.site.brand, "${APERTURE_NO_SUCH_VAR}");
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = SiteConfig::from_toml_str(
            "[site]\nbrand = \"Aperture\"\n[api]\nbase_url = \"ftp://cms\"\n",
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}

use crate::core::hierarchy;
use crate::core::{AddressDirectory, ConfigProvider};
use crate::domain::model::{Depth, District, Province, ProvinceTree, SearchResults, Ward};
use crate::utils::error::{AddressError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://provinces.open-api.vn/api/";

/// HTTP client for the province / district / ward directory.
///
/// Stateless apart from reqwest's connection pool; clones share that pool.
#[derive(Debug, Clone)]
pub struct AddressClient {
    base_url: Url,
    client: Client,
}

impl AddressClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_timeout(config.base_url(), config.timeout_seconds())
    }

    pub fn with_timeout(base_url: &str, timeout_seconds: Option<u64>) -> Result<Self> {
        validate_url("base_url", base_url)?;
        let base_url = Url::parse(base_url).map_err(|e| AddressError::InvalidConfigValue {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| AddressError::Config {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Province payload with districts (depth 2) or districts and wards (depth 3).
    pub async fn province_tree(&self, province_code: &str, depth: Depth) -> Result<ProvinceTree> {
        validate_non_empty_string("province_code", province_code)?;
        if matches!(province_code, "." | "..") {
            return Err(AddressError::InvalidInput {
                field: "province_code".to_string(),
                reason: "dot segments are not province codes".to_string(),
            });
        }

        let mut url = self.endpoint(&["p", province_code])?;
        url.query_pairs_mut()
            .append_pair("depth", depth.as_query_value());

        self.get_json(url).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AddressError::InvalidConfigValue {
                field: "base_url".to_string(),
                value: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        tracing::debug!("{} -> {}", url, status);

        if !status.is_success() {
            return Err(AddressError::Upstream {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        tracing::trace!("{} returned {} bytes", url, body.len());

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl AddressDirectory for AddressClient {
    async fn list_provinces(&self) -> Result<Vec<Province>> {
        let url = self.endpoint(&["p", ""])?;
        self.get_json(url).await
    }

    async fn list_districts(&self, province_code: &str) -> Result<Vec<District>> {
        let tree = self.province_tree(province_code, Depth::Districts).await?;
        Ok(hierarchy::districts_of(tree))
    }

    async fn list_wards(&self, province_code: &str) -> Result<Vec<Ward>> {
        let tree = self.province_tree(province_code, Depth::Wards).await?;
        Ok(hierarchy::flatten_wards(tree))
    }

    async fn search_address(&self, query: &str) -> Result<SearchResults> {
        let mut url = self.endpoint(&["search", ""])?;
        url.query_pairs_mut().append_pair("q", query);
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_with_and_without_trailing_slash() {
        let with_slash = AddressClient::new("https://provinces.open-api.vn/api/").unwrap();
        let without = AddressClient::new("https://provinces.open-api.vn/api").unwrap();

        for client in [with_slash, without] {
            assert_eq!(
                client.endpoint(&["p", ""]).unwrap().as_str(),
                "https://provinces.open-api.vn/api/p/"
            );
            assert_eq!(
                client.endpoint(&["p", "01"]).unwrap().as_str(),
                "https://provinces.open-api.vn/api/p/01"
            );
        }
    }

    #[test]
    fn test_endpoint_on_host_root() {
        let client = AddressClient::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(
            client.endpoint(&["search", ""]).unwrap().as_str(),
            "http://127.0.0.1:8080/search/"
        );
    }

    #[test]
    fn test_province_code_is_a_single_escaped_segment() {
        let client = AddressClient::new("http://localhost/").unwrap();
        let url = client.endpoint(&["p", "01/../x y"]).unwrap();
        assert_eq!(url.path(), "/p/01%2F..%2Fx%20y");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            AddressClient::new("ftp://example.com"),
            Err(AddressError::InvalidConfigValue { .. })
        ));
        assert!(AddressClient::new("").is_err());
    }

    #[tokio::test]
    async fn test_empty_province_code_is_rejected_locally() {
        // Nothing listens on port 9; reaching the network would yield Network instead.
        let client = AddressClient::new("http://127.0.0.1:9/").unwrap();

        let err = client.list_wards("  ").await.unwrap_err();
        assert!(matches!(err, AddressError::InvalidInput { .. }));

        let err = client.list_districts("").await.unwrap_err();
        assert!(matches!(err, AddressError::InvalidInput { .. }));

        let err = client.province_tree("..", Depth::Wards).await.unwrap_err();
        assert!(matches!(err, AddressError::InvalidInput { .. }));
    }
}

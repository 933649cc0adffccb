use crate::domain::model::{District, Province, SearchResults, Ward};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of directory settings (CLI flags, TOML file, environment).
pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}

/// Read-only view of the province / district / ward directory.
#[async_trait]
pub trait AddressDirectory: Send + Sync {
    async fn list_provinces(&self) -> Result<Vec<Province>>;
    async fn list_districts(&self, province_code: &str) -> Result<Vec<District>>;
    async fn list_wards(&self, province_code: &str) -> Result<Vec<Ward>>;
    async fn search_address(&self, query: &str) -> Result<SearchResults>;
}

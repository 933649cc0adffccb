use crate::core::AddressDirectory;
use crate::domain::model::{District, Province, SearchResults, Ward};
use crate::utils::error::{AddressError, Result};
use tracing::Instrument;

/// Wraps a directory and records every lookup as tracing events.
///
/// Values and errors are passed through untouched.
pub struct LookupService<D: AddressDirectory> {
    directory: D,
}

impl<D: AddressDirectory> LookupService<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub async fn provinces(&self) -> Result<Vec<Province>> {
        let span = tracing::info_span!("list_provinces");
        let result = self.directory.list_provinces().instrument(span).await;
        record("list_provinces", "-", &result, Vec::len);
        result
    }

    pub async fn districts(&self, province_code: &str) -> Result<Vec<District>> {
        let span = tracing::info_span!("list_districts", province_code);
        let result = self
            .directory
            .list_districts(province_code)
            .instrument(span)
            .await;
        record("list_districts", province_code, &result, Vec::len);
        result
    }

    pub async fn wards(&self, province_code: &str) -> Result<Vec<Ward>> {
        let span = tracing::info_span!("list_wards", province_code);
        let result = self
            .directory
            .list_wards(province_code)
            .instrument(span)
            .await;
        record("list_wards", province_code, &result, Vec::len);
        if let Ok(wards) = &result {
            tracing::trace!(province_code, ?wards, "ward payload");
        }
        result
    }

    pub async fn search(&self, query: &str) -> Result<SearchResults> {
        let span = tracing::info_span!("search_address", query);
        let result = self
            .directory
            .search_address(query)
            .instrument(span)
            .await;
        record("search_address", query, &result, |r: &SearchResults| {
            r.0.as_array().map_or(1, Vec::len)
        });
        result
    }
}

fn record<T>(operation: &str, argument: &str, result: &Result<T>, size: impl Fn(&T) -> usize) {
    match result {
        Ok(value) => {
            tracing::debug!(operation, argument, items = size(value), "lookup succeeded");
        }
        Err(e) => log_failure(operation, argument, e),
    }
}

fn log_failure(operation: &str, argument: &str, error: &AddressError) {
    tracing::warn!(
        operation,
        argument,
        category = ?error.category(),
        status = error.status(),
        "lookup failed: {}",
        error
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Code;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio_test::{assert_err, assert_ok};

    #[derive(Clone, Default)]
    struct MockDirectory {
        calls: Arc<AtomicUsize>,
        fail_with: Option<u16>,
    }

    fn ward(code: &str) -> Ward {
        Ward {
            code: Code::new(code),
            name: format!("Ward {}", code),
            division_type: None,
            codename: None,
            district_code: None,
        }
    }

    impl MockDirectory {
        fn check(&self) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail_with {
                Some(status) => Err(AddressError::Upstream {
                    status,
                    url: "mock://directory".to_string(),
                }),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl AddressDirectory for MockDirectory {
        async fn list_provinces(&self) -> Result<Vec<Province>> {
            self.check()?;
            Ok(vec![])
        }

        async fn list_districts(&self, _province_code: &str) -> Result<Vec<District>> {
            self.check()?;
            Ok(vec![])
        }

        async fn list_wards(&self, _province_code: &str) -> Result<Vec<Ward>> {
            self.check()?;
            Ok(vec![ward("W1"), ward("W2")])
        }

        async fn search_address(&self, query: &str) -> Result<SearchResults> {
            self.check()?;
            Ok(SearchResults(serde_json::json!([{ "q": query }])))
        }
    }

    #[tokio::test]
    async fn test_values_pass_through_unchanged() {
        let directory = MockDirectory::default();
        let service = LookupService::new(directory.clone());

        let wards = assert_ok!(service.wards("01").await);
        assert_eq!(wards, vec![ward("W1"), ward("W2")]);

        let found = assert_ok!(service.search("Hà Nội").await);
        assert_eq!(found.into_inner(), serde_json::json!([{ "q": "Hà Nội" }]));

        assert_eq!(directory.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_errors_pass_through_unchanged() {
        let directory = MockDirectory {
            fail_with: Some(502),
            ..Default::default()
        };
        let service = LookupService::new(directory.clone());

        let err = assert_err!(service.provinces().await);
        assert_eq!(err.status(), Some(502));

        let err = assert_err!(service.districts("01").await);
        assert!(err.is_upstream());

        // No retries.
        assert_eq!(directory.calls.load(Ordering::SeqCst), 2);
    }
}

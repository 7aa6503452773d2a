//! Mock Turvo client for testing without API access.
//!
//! Serves locations and shipment pages from memory and records every
//! shipment it is asked to create.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::service::LoadGateway;

use super::error::TurvoError;
use super::types::{LocationId, ShipmentPage, ShipmentRequest};

/// A forced failure for one submission.
#[derive(Debug, Clone)]
struct SubmitFailure {
    /// Zero-based index of the submission to fail.
    at: usize,
    status: u16,
    body: String,
}

/// In-memory stand-in for [`super::TurvoClient`].
#[derive(Clone, Default)]
pub struct MockTurvoClient {
    locations: HashMap<String, LocationId>,
    page: ShipmentPage,
    failure: Option<SubmitFailure>,
    /// Every submission attempt, in order, including failed ones.
    attempts: Arc<RwLock<usize>>,
    submitted: Arc<RwLock<Vec<ShipmentRequest>>>,
    list_queries: Arc<RwLock<Vec<(Option<u32>, Option<u32>)>>>,
}

impl MockTurvoClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location that `resolve_location` will find by exact name.
    pub fn with_location(mut self, name: impl Into<String>, id: i64) -> Self {
        self.locations.insert(name.into(), LocationId(id));
        self
    }

    /// Set the page returned by `list_loads`.
    pub fn with_shipments(mut self, page: ShipmentPage) -> Self {
        self.page = page;
        self
    }

    /// Make the `at`-th submission (zero-based) fail with the given response.
    pub fn failing_submission(mut self, at: usize, status: u16, body: impl Into<String>) -> Self {
        self.failure = Some(SubmitFailure {
            at,
            status,
            body: body.into(),
        });
        self
    }

    /// Shipments accepted so far.
    pub async fn submitted(&self) -> Vec<ShipmentRequest> {
        self.submitted.read().await.clone()
    }

    /// Number of submissions attempted, successful or not.
    pub async fn attempts(&self) -> usize {
        *self.attempts.read().await
    }

    /// Paging parameters of every `list_loads` call.
    pub async fn list_queries(&self) -> Vec<(Option<u32>, Option<u32>)> {
        self.list_queries.read().await.clone()
    }
}

impl LoadGateway for MockTurvoClient {
    async fn resolve_location(&self, name: &str) -> Result<LocationId, TurvoError> {
        self.locations
            .get(name)
            .copied()
            .ok_or_else(|| TurvoError::LocationNotFound(name.to_string()))
    }

    async fn submit_load(&self, request: &ShipmentRequest) -> Result<(), TurvoError> {
        let attempt = {
            let mut attempts = self.attempts.write().await;
            let current = *attempts;
            *attempts += 1;
            current
        };

        if let Some(failure) = self.failure.as_ref().filter(|f| f.at == attempt) {
            return Err(TurvoError::Api {
                status: failure.status,
                message: failure.body.clone(),
            });
        }

        self.submitted.write().await.push(request.clone());
        Ok(())
    }

    async fn list_loads(
        &self,
        start: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<ShipmentPage, TurvoError> {
        self.list_queries.write().await.push((start, page_size));
        Ok(self.page.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_registered_locations() {
        let client = MockTurvoClient::new().with_location("Chicago DC", 21);

        assert_eq!(
            client.resolve_location("Chicago DC").await.unwrap(),
            LocationId(21)
        );
        assert!(matches!(
            client.resolve_location("Nowhere").await,
            Err(TurvoError::LocationNotFound(name)) if name == "Nowhere"
        ));
    }

    #[tokio::test]
    async fn records_submissions_and_injects_failure() {
        let client = MockTurvoClient::new().failing_submission(1, 500, "boom");
        let request = ShipmentRequest::default();

        client.submit_load(&request).await.unwrap();
        let err = client.submit_load(&request).await.unwrap_err();
        client.submit_load(&request).await.unwrap();

        assert!(matches!(err, TurvoError::Api { status: 500, .. }));
        assert_eq!(client.attempts().await, 3);
        assert_eq!(client.submitted().await.len(), 2);
    }

    #[tokio::test]
    async fn serves_configured_page() {
        let mut page = ShipmentPage::default();
        page.pagination.more_available = true;
        let client = MockTurvoClient::new().with_shipments(page.clone());

        assert_eq!(client.list_loads(Some(0), None).await.unwrap(), page);
        assert_eq!(client.list_queries().await, vec![(Some(0), None)]);
    }
}

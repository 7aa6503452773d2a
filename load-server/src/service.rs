//! Load submission and listing.
//!
//! [`LoadService`] resolves stop locations, runs the transform and hands
//! each request to a [`LoadGateway`]. Loads are processed strictly in
//! order and the first failure stops the batch; loads already submitted
//! stay submitted.

use std::future::Future;

use tracing::{debug, info};

use crate::domain::{CreateLoadRequest, TransformError};
use crate::turvo::{
    LocationId, ReferenceData, ShipmentPage, ShipmentRequest, TurvoError, transform_load,
};

/// The TMS operations the service depends on.
///
/// This abstraction allows the service to be tested against
/// [`crate::turvo::MockTurvoClient`] without network access.
pub trait LoadGateway {
    /// Id of the first location matching `name`.
    ///
    /// No match is [`TurvoError::LocationNotFound`].
    fn resolve_location(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<LocationId, TurvoError>> + Send;

    /// Submit one fully built shipment.
    fn submit_load(
        &self,
        request: &ShipmentRequest,
    ) -> impl Future<Output = Result<(), TurvoError>> + Send;

    /// Fetch one page of shipments.
    fn list_loads(
        &self,
        start: Option<u32>,
        page_size: Option<u32>,
    ) -> impl Future<Output = Result<ShipmentPage, TurvoError>> + Send;
}

/// Errors from creating or listing loads.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A stop's location name could not be resolved
    #[error("failed to resolve {stop} location {name:?}: {source}")]
    Location {
        stop: &'static str,
        name: String,
        #[source]
        source: TurvoError,
    },

    /// A load failed validation
    #[error("failed to transform load {index}: {source}")]
    Transform {
        index: usize,
        #[source]
        source: TransformError,
    },

    /// The TMS rejected a load or could not be reached
    #[error("failed to create load {index}: {source}")]
    Submit {
        index: usize,
        #[source]
        source: TurvoError,
    },

    /// Listing shipments failed
    #[error("failed to list loads: {0}")]
    List(#[source] TurvoError),
}

/// Creates and lists loads through a [`LoadGateway`].
pub struct LoadService<G> {
    gateway: G,
    reference: ReferenceData,
}

impl<G: LoadGateway> LoadService<G> {
    pub fn new(gateway: G, reference: ReferenceData) -> Self {
        Self { gateway, reference }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Transform one load against already-resolved locations and submit it.
    pub async fn transform_and_submit(
        &self,
        load: &CreateLoadRequest,
        pickup: LocationId,
        delivery: LocationId,
    ) -> Result<(), LoadError> {
        self.submit_at(0, load, pickup, delivery).await
    }

    /// Submit several loads that share the same pickup and delivery.
    ///
    /// Returns how many loads were submitted. Stops at the first load that
    /// fails to transform or submit.
    pub async fn submit_batch(
        &self,
        loads: &[CreateLoadRequest],
        pickup: LocationId,
        delivery: LocationId,
    ) -> Result<usize, LoadError> {
        for (index, load) in loads.iter().enumerate() {
            self.submit_at(index, load, pickup, delivery).await?;
        }
        Ok(loads.len())
    }

    /// Resolve a load's pickup and consignee, then submit it.
    pub async fn create_load(&self, load: &CreateLoadRequest) -> Result<(), LoadError> {
        self.create_at(0, load).await
    }

    /// Create loads one after another, each with its own locations.
    ///
    /// Returns how many loads were created. The first failure ends the
    /// batch.
    pub async fn create_loads(&self, loads: &[CreateLoadRequest]) -> Result<usize, LoadError> {
        for (index, load) in loads.iter().enumerate() {
            self.create_at(index, load).await?;
        }
        Ok(loads.len())
    }

    /// Fetch one page of loads, unchanged.
    pub async fn list_loads(
        &self,
        start: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<ShipmentPage, LoadError> {
        self.gateway
            .list_loads(start, page_size)
            .await
            .map_err(LoadError::List)
    }

    async fn create_at(&self, index: usize, load: &CreateLoadRequest) -> Result<(), LoadError> {
        let pickup = self.resolve("pickup", &load.pickup.name).await?;
        let delivery = self.resolve("consignee", &load.consignee.name).await?;
        self.submit_at(index, load, pickup, delivery).await
    }

    async fn resolve(&self, stop: &'static str, name: &str) -> Result<LocationId, LoadError> {
        let id = self
            .gateway
            .resolve_location(name)
            .await
            .map_err(|source| LoadError::Location {
                stop,
                name: name.to_string(),
                source,
            })?;
        debug!(stop, name, %id, "resolved location");
        Ok(id)
    }

    async fn submit_at(
        &self,
        index: usize,
        load: &CreateLoadRequest,
        pickup: LocationId,
        delivery: LocationId,
    ) -> Result<(), LoadError> {
        let request = transform_load(load, pickup, delivery, &self.reference)
            .map_err(|source| LoadError::Transform { index, source })?;

        self.gateway
            .submit_load(&request)
            .await
            .map_err(|source| LoadError::Submit { index, source })?;

        info!(index, %pickup, %delivery, status = %load.status, "load created");
        Ok(())
    }
}

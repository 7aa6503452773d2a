//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::service::{LoadError, LoadGateway};
use crate::turvo::{ShipmentPage, TurvoError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<G>(state: AppState<G>) -> Router
where
    G: LoadGateway + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/v2/create-load", post(create_loads::<G>))
        .route("/v2/view-loads", get(view_loads::<G>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Create one load or a batch of loads, in order.
///
/// The body is parsed by hand so that malformed JSON gets the same error
/// shape as every other failure.
async fn create_loads<G>(
    State(state): State<AppState<G>>,
    body: Bytes,
) -> Result<Json<CreateLoadsResponse>, AppError>
where
    G: LoadGateway + Send + Sync + 'static,
{
    let payload = LoadsPayload::from_json(&body).map_err(|e| AppError::BadRequest {
        message: format!("invalid request body: {e}"),
    })?;
    let loads = payload.into_loads();

    let created = state.loads.create_loads(&loads).await?;

    Ok(Json(CreateLoadsResponse {
        message: "Loads created successfully".to_string(),
        created,
    }))
}

/// List one page of loads as the TMS returns it.
async fn view_loads<G>(
    State(state): State<AppState<G>>,
    query: Result<Query<ViewLoadsQuery>, QueryRejection>,
) -> Result<Json<ShipmentPage>, AppError>
where
    G: LoadGateway + Send + Sync + 'static,
{
    let Query(query) = query.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let page = state.loads.list_loads(query.start, query.page_size).await?;
    Ok(Json(page))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    /// The TMS failed or rejected the request
    BadGateway { message: String },
}

impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        let message = e.to_string();
        match e {
            LoadError::Transform { .. } => AppError::BadRequest { message },
            LoadError::Location {
                source: TurvoError::LocationNotFound(_),
                ..
            } => AppError::NotFound { message },
            LoadError::Location { .. } | LoadError::Submit { .. } | LoadError::List(_) => {
                AppError::BadGateway { message }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
        };

        error!(status = status.as_u16(), %message, "request failed");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::service::LoadService;
    use crate::turvo::{LocationId, MockTurvoClient, Pagination, ReferenceData, Shipment};

    fn gateway() -> MockTurvoClient {
        MockTurvoClient::new()
            .with_location("Chicago DC", 21)
            .with_location("LA Warehouse", 10)
    }

    fn router(gateway: MockTurvoClient) -> Router {
        create_router(AppState::new(LoadService::new(
            gateway,
            ReferenceData::default(),
        )))
    }

    fn load(status: &str) -> Value {
        json!({
            "externalTMSLoadID": "L-1",
            "status": status,
            "customer": {"externalTMSId": "345", "name": "Acme"},
            "pickup": {
                "name": "Chicago DC",
                "city": "Chicago",
                "state": "IL",
                "apptTime": "2023-10-01T08:00:00-05:00",
                "timezone": "America/Chicago"
            },
            "consignee": {
                "name": "LA Warehouse",
                "city": "Los Angeles",
                "state": "CA",
                "apptTime": "2023-10-02T17:00:00-07:00",
                "timezone": "America/Los_Angeles"
            },
            "rateData": {"customerLhRateUsd": 1200.0},
            "totalWeight": 20000.0,
            "poNums": "PO1, PO2"
        })
    }

    fn post_json(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/v2/create-load")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_check() {
        let response = router(gateway())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn create_single_load() {
        let mock = gateway();
        let (status, body) = send(router(mock.clone()), post_json(load("Covered").to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"message": "Loads created successfully", "created": 1})
        );

        let submitted = mock.submitted().await;
        assert_eq!(submitted.len(), 1);
        let route = &submitted[0].global_route;
        assert_eq!(route[0].location.id, LocationId(21));
        assert_eq!(route[1].location.id, LocationId(10));
        assert_eq!(route[1].po_numbers, vec!["PO1", "PO2"]);
    }

    #[tokio::test]
    async fn create_batch_in_order() {
        let mock = gateway();
        let batch = json!([load("Covered"), load("Tendered")]);

        let (status, body) = send(router(mock.clone()), post_json(batch.to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["created"], 2);
        let codes: Vec<_> = mock
            .submitted()
            .await
            .into_iter()
            .map(|r| r.status.code.key)
            .collect();
        assert_eq!(codes, vec!["2102", "2101"]);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let mock = gateway();
        let (status, body) = send(router(mock.clone()), post_json("{not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("invalid request body"));
        assert_eq!(mock.attempts().await, 0);
    }

    #[tokio::test]
    async fn wrongly_typed_field_reports_position() {
        let mock = gateway();
        let mut body = load("Covered");
        body["totalWeight"] = json!("heavy");

        let (status, body) = send(router(mock.clone()), post_json(body.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("invalid type: string \"heavy\""), "{message}");
        assert!(message.contains("line 1"), "{message}");
        assert_eq!(mock.attempts().await, 0);
    }

    #[tokio::test]
    async fn invalid_load_is_bad_request() {
        let mock = gateway();
        let batch = json!([load("Covered"), load("archived"), load("Covered")]);

        let (status, body) = send(router(mock.clone()), post_json(batch.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "failed to transform load 1: invalid status code: archived"
        );
        assert_eq!(mock.attempts().await, 1);
    }

    #[tokio::test]
    async fn unknown_location_is_not_found() {
        let mock = MockTurvoClient::new().with_location("Chicago DC", 21);

        let (status, body) = send(router(mock.clone()), post_json(load("Covered").to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("LA Warehouse"));
        assert_eq!(mock.attempts().await, 0);
    }

    #[tokio::test]
    async fn upstream_rejection_is_bad_gateway() {
        let mock = gateway().failing_submission(0, 500, "internal error");

        let (status, body) = send(router(mock), post_json(load("Covered").to_string())).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            body["error"],
            "failed to create load 0: API error 500: internal error"
        );
    }

    #[tokio::test]
    async fn view_loads_returns_page() {
        let page = ShipmentPage {
            pagination: Pagination {
                start: 5,
                page_size: 1,
                total_records_in_page: 1,
                more_available: true,
                last_object_key: None,
            },
            shipments: vec![Shipment {
                id: 42,
                custom_id: "SHP-42".into(),
                ..Shipment::default()
            }],
        };
        let mock = gateway().with_shipments(page);

        let request = Request::get("/v2/view-loads?start=5&pageSize=1")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router(mock.clone()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["moreAvailable"], true);
        assert_eq!(body["shipments"][0]["customId"], "SHP-42");
        assert_eq!(mock.list_queries().await, vec![(Some(5), Some(1))]);
    }

    #[tokio::test]
    async fn view_loads_without_paging() {
        let mock = gateway();
        let request = Request::get("/v2/view-loads").body(Body::empty()).unwrap();

        let (status, body) = send(router(mock.clone()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["shipments"], json!([]));
        assert_eq!(mock.list_queries().await, vec![(None, None)]);
    }

    #[tokio::test]
    async fn negative_paging_is_bad_request() {
        let request = Request::get("/v2/view-loads?start=-1")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(router(gateway()), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}

//! JSON REST handlers for the parking ledger.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parklot_app::ports::VehicleRepository;
use parklot_domain::error::ParkingError;
use parklot_domain::vehicle::{VehicleClass, VehicleRecord};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering an entry.
#[derive(Deserialize)]
pub struct EnterRequest {
    pub plate: String,
    pub vehicle_class: String,
}

/// Vehicle as exposed over HTTP.
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub plate: String,
    pub vehicle_class: VehicleClass,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub active: bool,
    pub cost: Option<u64>,
}

impl VehicleResponse {
    fn with_cost(record: &VehicleRecord, cost: Option<u64>) -> Self {
        Self {
            plate: record.plate().to_string(),
            vehicle_class: record.vehicle_class(),
            entry_time: record.entry_time(),
            exit_time: record.exit_time(),
            active: record.is_active(),
            cost,
        }
    }
}

impl From<&VehicleRecord> for VehicleResponse {
    fn from(record: &VehicleRecord) -> Self {
        Self::with_cost(record, None)
    }
}

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<VehicleResponse>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

impl ListResponse {
    fn from_records(records: &[VehicleRecord]) -> Self {
        Self::Ok(Json(records.iter().map(VehicleResponse::from).collect()))
    }
}

/// Possible responses from the entry endpoint.
pub enum EnterResponse {
    Created(Json<VehicleResponse>),
}

impl IntoResponse for EnterResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the exit endpoint.
pub enum ExitResponse {
    Ok(Json<VehicleResponse>),
}

impl IntoResponse for ExitResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the cost endpoint.
pub enum CostResponse {
    Ok(Json<u64>),
}

impl IntoResponse for CostResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/parking/entries`
pub async fn enter<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<EnterRequest>, JsonRejection>,
) -> Result<EnterResponse, ApiError>
where
    R: VehicleRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let vehicle_class = VehicleClass::from_str(&req.vehicle_class).map_err(ParkingError::from)?;
    let record = state
        .parking_service
        .enter(&req.plate, vehicle_class)
        .await?;
    Ok(EnterResponse::Created(Json(VehicleResponse::from(&record))))
}

/// `PUT /api/parking/exits/:plate`
pub async fn exit<R>(
    State(state): State<AppState<R>>,
    Path(plate): Path<String>,
) -> Result<ExitResponse, ApiError>
where
    R: VehicleRepository + Send + Sync + 'static,
{
    let (record, cost) = state.parking_service.checkout(&plate).await?;
    Ok(ExitResponse::Ok(Json(VehicleResponse::with_cost(
        &record,
        Some(cost),
    ))))
}

/// `GET /api/parking/active`
pub async fn list_active<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: VehicleRepository + Send + Sync + 'static,
{
    let records = state.parking_service.list_active().await?;
    Ok(ListResponse::from_records(&records))
}

/// `GET /api/parking/history`
pub async fn list_history<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: VehicleRepository + Send + Sync + 'static,
{
    let records = state.parking_service.list_history().await?;
    Ok(ListResponse::from_records(&records))
}

/// `GET /api/parking/cost/:plate`
pub async fn cost<R>(
    State(state): State<AppState<R>>,
    Path(plate): Path<String>,
) -> Result<CostResponse, ApiError>
where
    R: VehicleRepository + Send + Sync + 'static,
{
    let cost = state.parking_service.cost(&plate).await?;
    Ok(CostResponse::Ok(Json(cost)))
}

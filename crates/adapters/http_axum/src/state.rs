//! Shared application state for axum handlers.

use std::sync::Arc;

use parklot_app::ports::VehicleRepository;
use parklot_app::services::parking_service::ParkingService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Parking ledger service.
    pub parking_service: Arc<ParkingService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            parking_service: Arc::clone(&self.parking_service),
        }
    }
}

impl<R> AppState<R>
where
    R: VehicleRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(parking_service: ParkingService<R>) -> Self {
        Self {
            parking_service: Arc::new(parking_service),
        }
    }
}

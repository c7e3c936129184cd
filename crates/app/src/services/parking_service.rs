//! Parking service — use-cases for vehicles entering and leaving the lot.

use parklot_domain::error::{NotFoundError, ParkingError, StateError};
use parklot_domain::plate::Plate;
use parklot_domain::vehicle::{VehicleClass, VehicleRecord};

use crate::ports::VehicleRepository;

/// Application service for the parking ledger.
///
/// Holds no state of its own; everything lives behind the repository.
pub struct ParkingService<R> {
    repo: R,
}

impl<R: VehicleRepository> ParkingService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a vehicle entering the lot.
    ///
    /// A plate whose previous stay has ended may enter again; the new stay
    /// replaces the old one in the plate's slot.
    ///
    /// # Errors
    ///
    /// - [`ParkingError::Validation`] if `plate` is not a valid plate.
    /// - [`ParkingError::State`] if the vehicle is already parked.
    /// - A storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn enter(
        &self,
        plate: &str,
        vehicle_class: VehicleClass,
    ) -> Result<VehicleRecord, ParkingError> {
        let record = VehicleRecord::create(plate, vehicle_class)?;

        if let Some(existing) = self.repo.find_by_plate(record.plate()).await? {
            if existing.is_active() {
                return Err(StateError::DuplicateActiveVehicle {
                    plate: existing.plate().to_string(),
                }
                .into());
            }
            tracing::debug!(plate = %existing.plate(), "starting a new stay for a returning vehicle");
        }

        let saved = self.repo.save(record).await?;
        tracing::info!(plate = %saved.plate(), vehicle_class = %saved.vehicle_class(), "vehicle entered");
        Ok(saved)
    }

    /// Register a parked vehicle leaving the lot.
    ///
    /// # Errors
    ///
    /// - [`ParkingError::NotFound`] when no active record exists for `plate`.
    /// - A storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn exit(&self, plate: &str) -> Result<VehicleRecord, ParkingError> {
        let record = self
            .find(plate)
            .await?
            .filter(VehicleRecord::is_active)
            .ok_or_else(|| NotFoundError::new(plate))?;

        let saved = self.repo.save(record.mark_exit()?).await?;
        tracing::info!(plate = %saved.plate(), "vehicle exited");
        Ok(saved)
    }

    /// Compute the amount due for the last stay of `plate`.
    ///
    /// # Errors
    ///
    /// - [`ParkingError::NotFound`] when no record exists for `plate`.
    /// - [`ParkingError::State`] while the vehicle is still parked.
    /// - A storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn cost(&self, plate: &str) -> Result<u64, ParkingError> {
        let record = self
            .find(plate)
            .await?
            .ok_or_else(|| NotFoundError::new(plate))?;
        record.parking_fee()
    }

    /// Register a vehicle leaving the lot and return the exited record along
    /// with the amount due.
    ///
    /// # Errors
    ///
    /// Same as [`exit`](Self::exit).
    pub async fn checkout(&self, plate: &str) -> Result<(VehicleRecord, u64), ParkingError> {
        let exited = self.exit(plate).await?;
        let fee = exited.parking_fee()?;
        Ok((exited, fee))
    }

    /// List vehicles currently inside the lot.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_active(&self) -> Result<Vec<VehicleRecord>, ParkingError> {
        self.repo.list_active().await
    }

    /// List every known record, parked or not.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_history(&self) -> Result<Vec<VehicleRecord>, ParkingError> {
        self.repo.list_all().await
    }

    /// Look up by a raw plate string. Text that cannot be a plate has no
    /// record by definition.
    async fn find(&self, plate: &str) -> Result<Option<VehicleRecord>, ParkingError> {
        match Plate::parse(plate) {
            Ok(plate) => self.repo.find_by_plate(&plate).await,
            Err(_) => Ok(None),
        }
    }
}

//! Storage port — repository trait for vehicle records.

use std::future::Future;

use parklot_domain::error::ParkingError;
use parklot_domain::plate::Plate;
use parklot_domain::vehicle::VehicleRecord;

/// Plate-keyed persistence for [`VehicleRecord`]s.
///
/// A plate owns a single slot: saving a record replaces whatever record the
/// plate held before.
pub trait VehicleRepository {
    /// Insert or replace the record stored under the record's plate.
    ///
    /// Implementations must refuse to replace an active record with another
    /// active one ([`StateError::DuplicateActiveVehicle`]) and an exited record
    /// with another exited one ([`StateError::AlreadyExited`]), so concurrent
    /// callers cannot end up with two stays racing for the same slot.
    ///
    /// [`StateError::DuplicateActiveVehicle`]: parklot_domain::error::StateError::DuplicateActiveVehicle
    /// [`StateError::AlreadyExited`]: parklot_domain::error::StateError::AlreadyExited
    fn save(
        &self,
        record: VehicleRecord,
    ) -> impl Future<Output = Result<VehicleRecord, ParkingError>> + Send;

    /// Get the record stored for `plate`, active or not.
    fn find_by_plate(
        &self,
        plate: &Plate,
    ) -> impl Future<Output = Result<Option<VehicleRecord>, ParkingError>> + Send;

    /// Get every record that has no exit time.
    fn list_active(&self) -> impl Future<Output = Result<Vec<VehicleRecord>, ParkingError>> + Send;

    /// Get every record regardless of state.
    fn list_all(&self) -> impl Future<Output = Result<Vec<VehicleRecord>, ParkingError>> + Send;

    /// Remove the record stored for `plate`. Removing a missing plate is not
    /// an error.
    fn delete_by_plate(&self, plate: &Plate)
    -> impl Future<Output = Result<(), ParkingError>> + Send;
}

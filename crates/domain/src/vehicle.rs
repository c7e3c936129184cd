//! Vehicle record — one stay of a vehicle in the lot.
//!
//! A record is created when the vehicle enters and transitions exactly once,
//! irreversibly, to the exited state. Transitions never mutate the record in
//! place: [`VehicleRecord::mark_exit`] returns a new value.

mod class;

pub use class::VehicleClass;

use crate::billing::billable_hours;
use crate::error::{ParkingError, StateError, ValidationError};
use crate::plate::Plate;
use crate::time::{Timestamp, now};

/// A vehicle's stay: who, what class, when it entered and (once it left)
/// when it exited.
///
/// A record is *active* while it has no exit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleRecord {
    plate: Plate,
    vehicle_class: VehicleClass,
    entry_time: Timestamp,
    exit_time: Option<Timestamp>,
}

impl VehicleRecord {
    /// Register a new stay that starts now.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::Validation`] when `plate` is not a valid plate.
    pub fn create(plate: &str, vehicle_class: VehicleClass) -> Result<Self, ParkingError> {
        Self::create_at(plate, vehicle_class, now())
    }

    /// Register a new stay that starts at `entry_time`.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::Validation`] when `plate` is not a valid plate.
    pub fn create_at(
        plate: &str,
        vehicle_class: VehicleClass,
        entry_time: Timestamp,
    ) -> Result<Self, ParkingError> {
        Ok(Self {
            plate: Plate::parse(plate)?,
            vehicle_class,
            entry_time,
            exit_time: None,
        })
    }

    /// Rebuild a record that was previously persisted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ExitBeforeEntry`] if `exit_time` precedes
    /// `entry_time`.
    pub fn restore(
        plate: Plate,
        vehicle_class: VehicleClass,
        entry_time: Timestamp,
        exit_time: Option<Timestamp>,
    ) -> Result<Self, ValidationError> {
        if exit_time.is_some_and(|exit| exit < entry_time) {
            return Err(ValidationError::ExitBeforeEntry);
        }
        Ok(Self {
            plate,
            vehicle_class,
            entry_time,
            exit_time,
        })
    }

    /// Return a copy of this record marked as exited now.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::AlreadyExited`] when the vehicle already left.
    pub fn mark_exit(&self) -> Result<Self, ParkingError> {
        self.mark_exit_at(now())
    }

    /// Return a copy of this record marked as exited at `exit_time`.
    ///
    /// # Errors
    ///
    /// - [`StateError::AlreadyExited`] when the vehicle already left.
    /// - [`ValidationError::ExitBeforeEntry`] when `exit_time` precedes the entry.
    pub fn mark_exit_at(&self, exit_time: Timestamp) -> Result<Self, ParkingError> {
        if !self.is_active() {
            return Err(StateError::AlreadyExited {
                plate: self.plate.to_string(),
            }
            .into());
        }
        if exit_time < self.entry_time {
            return Err(ValidationError::ExitBeforeEntry.into());
        }
        Ok(Self {
            exit_time: Some(exit_time),
            ..self.clone()
        })
    }

    /// Amount due for the finished stay: billable hours times the hourly
    /// rate of the vehicle class.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::VehicleStillParked`] while the vehicle is inside.
    pub fn parking_fee(&self) -> Result<u64, ParkingError> {
        let Some(exit_time) = self.exit_time else {
            return Err(StateError::VehicleStillParked {
                plate: self.plate.to_string(),
            }
            .into());
        };
        let hours = billable_hours(exit_time - self.entry_time);
        Ok(hours.saturating_mul(self.vehicle_class.rate_per_hour()))
    }

    #[must_use]
    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    #[must_use]
    pub fn vehicle_class(&self) -> VehicleClass {
        self.vehicle_class
    }

    #[must_use]
    pub fn entry_time(&self) -> Timestamp {
        self.entry_time
    }

    #[must_use]
    pub fn exit_time(&self) -> Option<Timestamp> {
        self.exit_time
    }

    /// Whether the vehicle is still inside the lot.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.exit_time.is_none()
    }
}

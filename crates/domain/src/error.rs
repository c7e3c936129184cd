//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ParkingError`]
//! via `#[from]`. Adapters wrap their infrastructure errors in
//! [`ParkingError::Storage`].

/// Top-level error returned by domain operations and application services.
#[derive(Debug, thiserror::Error)]
pub enum ParkingError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    State(#[from] StateError),

    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input that violates a shape constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("plate must not be empty")]
    EmptyPlate,

    #[error("plate must have between 6 and 7 characters, got {length}")]
    InvalidPlateLength { length: usize },

    #[error("plate must be alphanumeric, found {character:?}")]
    InvalidPlateCharacter { character: char },

    #[error("unknown vehicle class {value:?}")]
    UnknownVehicleClass { value: String },

    #[error("exit time must not precede entry time")]
    ExitBeforeEntry,
}

/// Operation refused because of the current lifecycle state of a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("vehicle {plate} is already parked")]
    DuplicateActiveVehicle { plate: String },

    #[error("vehicle {plate} has already left the lot")]
    AlreadyExited { plate: String },

    #[error("vehicle {plate} is still parked, the final cost is not known yet")]
    VehicleStillParked { plate: String },
}

/// A vehicle that was required but does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("vehicle {plate} not found")]
pub struct NotFoundError {
    pub plate: String,
}

impl NotFoundError {
    #[must_use]
    pub fn new(plate: impl Into<String>) -> Self {
        Self {
            plate: plate.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_parking_error() {
        let err: ParkingError = ValidationError::EmptyPlate.into();
        assert!(matches!(
            err,
            ParkingError::Validation(ValidationError::EmptyPlate)
        ));
    }

    #[test]
    fn should_display_plate_in_state_error() {
        let err = StateError::DuplicateActiveVehicle {
            plate: "ABC123".to_string(),
        };
        assert_eq!(err.to_string(), "vehicle ABC123 is already parked");
    }

    #[test]
    fn should_display_plate_in_not_found_error() {
        let err: ParkingError = NotFoundError::new("XYZ789").into();
        assert_eq!(err.to_string(), "vehicle XYZ789 not found");
    }
}

//! Vehicle class — the category that decides the hourly rate.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Category of a parked vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    Car,
    Motorcycle,
}

impl VehicleClass {
    /// Price of one billable hour for this class.
    #[must_use]
    pub const fn rate_per_hour(self) -> u64 {
        match self {
            Self::Car => 1000,
            Self::Motorcycle => 500,
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Car => f.write_str("car"),
            Self::Motorcycle => f.write_str("motorcycle"),
        }
    }
}

impl FromStr for VehicleClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(Self::Car),
            "motorcycle" => Ok(Self::Motorcycle),
            other => Err(ValidationError::UnknownVehicleClass {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_charge_car_rate() {
        assert_eq!(VehicleClass::Car.rate_per_hour(), 1000);
    }

    #[test]
    fn should_charge_motorcycle_rate() {
        assert_eq!(VehicleClass::Motorcycle.rate_per_hour(), 500);
    }

    #[test]
    fn should_parse_displayed_name() {
        for class in [VehicleClass::Car, VehicleClass::Motorcycle] {
            assert_eq!(class.to_string().parse::<VehicleClass>().unwrap(), class);
        }
    }

    #[test]
    fn should_reject_unknown_class() {
        let result = "truck".parse::<VehicleClass>();
        assert_eq!(
            result,
            Err(ValidationError::UnknownVehicleClass {
                value: "truck".to_string()
            })
        );
    }

    #[test]
    fn should_serialize_as_snake_case() {
        let json = serde_json::to_string(&VehicleClass::Motorcycle).unwrap();
        assert_eq!(json, "\"motorcycle\"");
    }
}

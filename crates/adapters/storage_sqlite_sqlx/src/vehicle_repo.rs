//! `SQLite` implementation of [`VehicleRepository`].

use std::str::FromStr;

use chrono::SecondsFormat;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use parklot_app::ports::VehicleRepository;
use parklot_domain::error::{ParkingError, StateError};
use parklot_domain::plate::Plate;
use parklot_domain::time::{Timestamp, parse_rfc3339};
use parklot_domain::vehicle::{VehicleClass, VehicleRecord};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(VehicleRecord);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<VehicleRecord> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let plate: String = row.try_get("plate")?;
        let vehicle_class: String = row.try_get("vehicle_class")?;
        let entry_time: String = row.try_get("entry_time")?;
        let exit_time: Option<String> = row.try_get("exit_time")?;

        let plate = Plate::parse(&plate).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let vehicle_class = VehicleClass::from_str(&vehicle_class)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let entry_time =
            parse_rfc3339(&entry_time).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let exit_time = exit_time
            .as_deref()
            .map(parse_rfc3339)
            .transpose()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        VehicleRecord::restore(plate, vehicle_class, entry_time, exit_time)
            .map(Self)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))
    }
}

/// Fixed-width UTC form, so lexical order in SQL matches chronological order.
fn encode_time(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

// The update only applies when the activity flag flips: an exit replaces the
// active stay it was taken from (same entry time), a re-entry replaces a
// finished one. Anything else leaves the row untouched and reports zero
// affected rows.
const UPSERT: &str = r"
    INSERT INTO vehicles (plate, vehicle_class, entry_time, exit_time, active)
    VALUES (?, ?, ?, ?, ?)
    ON CONFLICT (plate) DO UPDATE SET
        vehicle_class = excluded.vehicle_class,
        entry_time = excluded.entry_time,
        exit_time = excluded.exit_time,
        active = excluded.active
    WHERE vehicles.active <> excluded.active
        AND (excluded.active = 1 OR vehicles.entry_time = excluded.entry_time)
";
const SELECT_BY_PLATE: &str = "SELECT * FROM vehicles WHERE plate = ?";
const SELECT_ACTIVE: &str = "SELECT * FROM vehicles WHERE active = 1 ORDER BY entry_time";
const SELECT_ALL: &str = "SELECT * FROM vehicles ORDER BY entry_time";
const DELETE_BY_PLATE: &str = "DELETE FROM vehicles WHERE plate = ?";

/// `SQLite`-backed vehicle repository.
pub struct SqliteVehicleRepository {
    pool: SqlitePool,
}

impl SqliteVehicleRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl VehicleRepository for SqliteVehicleRepository {
    async fn save(&self, record: VehicleRecord) -> Result<VehicleRecord, ParkingError> {
        let result = sqlx::query(UPSERT)
            .bind(record.plate().as_str())
            .bind(record.vehicle_class().to_string())
            .bind(encode_time(record.entry_time()))
            .bind(record.exit_time().map(encode_time))
            .bind(record.is_active())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            let plate = record.plate().to_string();
            tracing::warn!(%plate, active = record.is_active(), "refused to overwrite vehicle slot");
            let err = if record.is_active() {
                StateError::DuplicateActiveVehicle { plate }
            } else {
                StateError::AlreadyExited { plate }
            };
            return Err(err.into());
        }

        Ok(record)
    }

    async fn find_by_plate(&self, plate: &Plate) -> Result<Option<VehicleRecord>, ParkingError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_PLATE)
            .bind(plate.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn list_active(&self) -> Result<Vec<VehicleRecord>, ParkingError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ACTIVE)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn list_all(&self) -> Result<Vec<VehicleRecord>, ParkingError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn delete_by_plate(&self, plate: &Plate) -> Result<(), ParkingError> {
        sqlx::query(DELETE_BY_PLATE)
            .bind(plate.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}

// core/src/package.rs
use std::collections::HashMap;
use std::fmt;

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkoutError};
use crate::training::{Running, SportsWalking, Swimming, Training};

/// Lukket sett av treningstyper som kan leses fra en pakke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Kort kode fra sensoren.
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
        }
    }

    /// Antall posisjonelle verdier konstruktøren tar.
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Swimming => 5,      // action, duration, weight, length_pool, count_pool
            WorkoutKind::Running => 3,       // action, duration, weight
            WorkoutKind::SportsWalking => 4, // action, duration, weight, height
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        WORKOUT_TYPES
            .get(code)
            .map(|(kind, _)| *kind)
            .ok_or_else(|| WorkoutError::UnknownActivityType(code.to_string()))
    }

    fn factory(self) -> Factory {
        match self {
            WorkoutKind::Swimming => build_swimming,
            WorkoutKind::Running => build_running,
            WorkoutKind::SportsWalking => build_walking,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Konstruktør som får ferdig lengdesjekket data.
type Factory = fn(&[f64]) -> Result<Box<dyn Training>>;

// Bygges fra WorkoutKind::ALL + match i `factory`, så ingen type kan mangle.
static WORKOUT_TYPES: Lazy<HashMap<&'static str, (WorkoutKind, Factory)>> = Lazy::new(|| {
    WorkoutKind::ALL
        .iter()
        .map(|&kind| (kind.code(), (kind, kind.factory())))
        .collect()
});

/// Kodene dispatch-tabellen kjenner, sortert.
pub fn known_codes() -> Vec<&'static str> {
    let mut codes: Vec<_> = WORKOUT_TYPES.keys().copied().collect();
    codes.sort_unstable();
    codes
}

/// Ikke-negativt heltall fra en JSON-/sensortallverdi.
fn whole(field: &'static str, value: f64) -> Result<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(WorkoutError::InvalidInteger { field, value })
    }
}

fn build_running(d: &[f64]) -> Result<Box<dyn Training>> {
    Ok(Box::new(Running::new(whole("action", d[0])?, d[1], d[2])))
}

fn build_walking(d: &[f64]) -> Result<Box<dyn Training>> {
    Ok(Box::new(SportsWalking::new(whole("action", d[0])?, d[1], d[2], d[3])))
}

fn build_swimming(d: &[f64]) -> Result<Box<dyn Training>> {
    Ok(Box::new(Swimming::new(
        whole("action", d[0])?,
        d[1],
        d[2],
        d[3],
        whole("count_pool", d[4])?,
    )))
}

/// Les en pakke fra sensoren: kode + posisjonelle verdier -> treningsøkt.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Training>> {
    let (kind, factory) = WORKOUT_TYPES
        .get(workout_type)
        .ok_or_else(|| WorkoutError::UnknownActivityType(workout_type.to_string()))?;

    if data.len() != kind.arity() {
        return Err(WorkoutError::ArityMismatch {
            code: kind.code(),
            expected: kind.arity(),
            got: data.len(),
        });
    }

    let training = factory(data)?;
    debug!("dispatch {} ({} verdier) -> {}", workout_type, data.len(), kind.name());
    Ok(training)
}

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::error::{Result, WorkoutError};

/// Én rå sensorpakke: typekode + posisjonelle verdier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(alias = "workout_type")]
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self { code: code.into(), data }
    }
}

// Prøv OBJECT først, deretter legacy-par ["RUN", [...]]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PackageIn {
    Object(Package),
    Pair(String, Vec<f64>),
}

impl From<PackageIn> for Package {
    fn from(p: PackageIn) -> Self {
        match p {
            PackageIn::Object(p) => p,
            PackageIn::Pair(code, data) => Package { code, data },
        }
    }
}

/// Innebygde eksempelpakker (samme som referansekjøringen).
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parser en JSON-liste med pakker. Feil peker på stien til elementet som feilet.
pub fn parse_packages(json_str: &str) -> Result<Vec<Package>> {
    let mut de = serde_json::Deserializer::from_str(json_str);
    let raw: Vec<PackageIn> = spte::deserialize(&mut de).map_err(|e| WorkoutError::InvalidInput {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })?;
    de.end().map_err(|e| WorkoutError::InvalidInput {
        path: ".".into(),
        message: e.to_string(),
    })?;

    Ok(raw.into_iter().map(Package::from).collect())
}

/// Leser pakker fra fil (JSON).
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let contents = std::fs::read_to_string(path)?;
    let packages = parse_packages(&contents)?;
    info!("{} pakker lest fra {}", packages.len(), path.display());
    Ok(packages)
}

//! Treningsstatistikk (distanse, snittfart, kcal) fra rå sensorpakker
//! for løping, gange og svømming, med fast tekstoppsummering.

pub mod driver;
pub mod error;
pub mod input;
pub mod message;
pub mod metrics;
pub mod package;
pub mod training;

#[cfg(feature = "python")]
mod py;

pub use driver::{render, run_packages, summarize, OutputFormat, RunOptions, RunReport};
pub use error::{Result, WorkoutError};
pub use input::{load_packages, parse_packages, sample_packages, Package};
pub use message::InfoMessage;
pub use metrics::Metrics;
pub use package::{known_codes, read_package, WorkoutKind};
pub use training::{floor_div, Running, SportsWalking, Swimming, Training, TrainingBase};

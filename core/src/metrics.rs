use once_cell::sync::OnceCell;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

/// Prosesslokale tellere for driveren.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    processed: IntCounterVec,
    rejected: IntCounterVec,
}

static GLOBAL: OnceCell<Metrics> = OnceCell::new();

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let processed = IntCounterVec::new(
            Opts::new("workout_packages_processed_total", "Pakker oppsummert, per treningstype"),
            &["kind"],
        )?;
        let rejected = IntCounterVec::new(
            Opts::new("workout_packages_rejected_total", "Pakker som feilet, per årsak"),
            &["reason"],
        )?;

        registry.register(Box::new(processed.clone()))?;
        registry.register(Box::new(rejected.clone()))?;

        Ok(Self { registry, processed, rejected })
    }

    /// Delt instans for prosessen (CLI og Python-modulen).
    pub fn global() -> prometheus::Result<&'static Metrics> {
        GLOBAL.get_or_try_init(Metrics::new)
    }

    pub fn processed(&self, kind: &str) -> IntCounter {
        self.processed.with_label_values(&[kind])
    }

    pub fn rejected(&self, reason: &str) -> IntCounter {
        self.rejected.with_label_values(&[reason])
    }

    /// Tekstformat (Prometheus exposition).
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

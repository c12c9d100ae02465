// core/src/training.rs
use std::fmt::Debug;

use crate::message::InfoMessage;

pub const LEN_STEP: f64 = 0.65;      // km per bevegelse (skritt/tak), generisk
pub const M_IN_KM: f64 = 1000.0;     // meter per km
pub const MIN_IN_HOUR: f64 = 60.0;   // minutter per time

pub const RUN_CALORIE_COEFF_1: f64 = 18.0;
pub const RUN_CALORIE_COEFF_2: f64 = 20.0;

pub const WLK_CALORIE_COEFF_1: f64 = 0.035;
pub const WLK_CALORIE_COEFF_2: f64 = 0.029;

pub const SWM_LEN_STEP: f64 = 1.38;  // km per svømmetak
pub const SWM_CALORIE_COEFF_1: f64 = 1.1;
pub const SWM_CALORIE_COEFF_2: f64 = 2.0;

/// Gulvdivisjon for flyttall, avrundet mot -∞ (ikke trunkering).
///
/// Samme resultat som `//` for floats: regnes via rest (`%`) slik at
/// f.eks. `floor_div(1.0, 0.1)` blir 9.0 og ikke 10.0.
/// `b == 0` gir `a / b` (±inf eller NaN).
pub fn floor_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return a / b;
    }
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div != 0.0 {
        let mut q = div.floor();
        if div - q > 0.5 {
            q += 1.0;
        }
        q
    } else {
        0.0_f64.copysign(a / b)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Råverdier som alle treningstyper har felles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    pub action: u64,     // antall skritt/tak
    pub duration_h: f64, // timer, > 0
    pub weight_kg: f64,
}

/// Felles oppførsel for treningstyper.
///
/// Traiten er forseglet: bare `Running`, `SportsWalking` og `Swimming`
/// implementerer den, og kaloriberegningen har ingen default.
pub trait Training: sealed::Sealed + Debug {
    /// Visningsnavn, f.eks. "Running".
    fn training_type(&self) -> &'static str;

    fn base(&self) -> &TrainingBase;

    /// Skrittlengde i km per bevegelse.
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distanse i km.
    fn distance(&self) -> f64 {
        self.base().action as f64 * self.len_step() / M_IN_KM
    }

    /// Snittfart i km/t.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration_h
    }

    /// Forbrukte kcal.
    fn spent_calories(&self) -> f64;

    fn summary(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.training_type().to_string(),
            duration_h: self.base().duration_h,
            distance_km: self.distance(),
            speed_kmh: self.mean_speed(),
            calories_kcal: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    pub fn new(action: u64, duration_h: f64, weight_kg: f64) -> Self {
        Self { base: TrainingBase { action, duration_h, weight_kg } }
    }
}

impl sealed::Sealed for Running {}

impl Training for Running {
    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let b = &self.base;
        (RUN_CALORIE_COEFF_1 * self.mean_speed() - RUN_CALORIE_COEFF_2)
            * b.weight_kg
            / M_IN_KM
            * b.duration_h
            * MIN_IN_HOUR
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action: u64, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            base: TrainingBase { action, duration_h, weight_kg },
            height_cm,
        }
    }
}

impl sealed::Sealed for SportsWalking {}

impl Training for SportsWalking {
    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let b = &self.base;
        // NB: gulvdivisjon av v²/høyde, ikke vanlig divisjon
        (WLK_CALORIE_COEFF_1 * b.weight_kg
            + floor_div(self.mean_speed().powi(2), self.height_cm) * WLK_CALORIE_COEFF_2 * b.weight_kg)
            * b.duration_h
            * MIN_IN_HOUR
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    pub length_pool_m: f64,
    pub count_pool: u64,
}

impl Swimming {
    pub fn new(action: u64, duration_h: f64, weight_kg: f64, length_pool_m: f64, count_pool: u64) -> Self {
        Self {
            base: TrainingBase { action, duration_h, weight_kg },
            length_pool_m,
            count_pool,
        }
    }
}

impl sealed::Sealed for Swimming {}

impl Training for Swimming {
    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn len_step(&self) -> f64 {
        SWM_LEN_STEP
    }

    /// Basseng-lengde × antall lengder; uavhengig av antall tak.
    fn mean_speed(&self) -> f64 {
        self.length_pool_m * self.count_pool as f64 / M_IN_KM / self.base.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + SWM_CALORIE_COEFF_1) * SWM_CALORIE_COEFF_2 * self.base.weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(380.25, 170.0), 2.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
        assert_eq!(floor_div(7.0, -2.0), -4.0);
        assert_eq!(floor_div(-7.5, -2.0), 3.0);
        // (1.0 / 0.1).floor() ville gitt 10.0
        assert_eq!(floor_div(1.0, 0.1), 9.0);
    }

    #[test]
    fn floor_div_by_zero_is_non_finite() {
        assert!(floor_div(1.0, 0.0).is_infinite());
        assert!(floor_div(0.0, 0.0).is_nan());
    }

    #[test]
    fn swimming_overrides_step_length() {
        let s = Swimming::new(1000, 2.0, 70.0, 50.0, 30);
        assert!((s.distance() - 1.38).abs() < 1e-12);
        assert!((s.mean_speed() - 0.75).abs() < 1e-12);
    }
}

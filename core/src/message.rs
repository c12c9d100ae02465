use std::fmt;

use serde::{Deserialize, Serialize};

/// Oppsummering av én treningsøkt. Lages én gang per økt og endres aldri.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

impl InfoMessage {
    /// Fast tekstmal; alle tall med 3 desimaler (fastpunkt).
    ///
    /// Avrunding følger `{:.3}` i std: nærmeste verdi av den eksakte binære
    /// verdien, og eksakte halvveis-tilfeller rundes til partall
    /// (0.0625 -> "0.062", 0.1875 -> "0.188").
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration_h, self.distance_km, self.speed_kmh, self.calories_kcal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(calories: f64) -> InfoMessage {
        InfoMessage {
            training_type: "Running".into(),
            duration_h: 1.0,
            distance_km: 9.75,
            speed_kmh: 9.75,
            calories_kcal: calories,
        }
    }

    #[test]
    fn renders_fixed_template() {
        assert_eq!(
            msg(699.75).get_message(),
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Avg. speed: 9.750 km/h; Calories burned: 699.750."
        );
    }

    #[test]
    fn rounds_at_half_boundary() {
        // 701.9265 lagres som 701.92650000000003... -> rundes opp
        assert!(msg(701.9265).get_message().ends_with("Calories burned: 701.927."));
        // 1.0005 lagres som 1.00049999... -> rundes ned
        assert!(msg(1.0005).get_message().ends_with("Calories burned: 1.000."));
        // eksakte halvveis-verdier: partall
        assert!(msg(0.0625).get_message().ends_with("Calories burned: 0.062."));
        assert!(msg(0.1875).get_message().ends_with("Calories burned: 0.188."));
    }

    #[test]
    fn large_values_stay_fixed_point() {
        let s = msg(1.0e7).get_message();
        assert!(s.ends_with("Calories burned: 10000000.000."), "{s}");
    }
}

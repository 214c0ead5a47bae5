use serde::{Deserialize, Deserializer};

/// Calculation results returned by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalculationResult {
    /// Thrust needed to overcome drag at cruise speed, N.
    pub required_thrust: f64,
    /// Power needed to hold cruise speed, W.
    pub required_power: f64,
    /// Theoretical airflow speed produced by the propeller, m/s.
    pub prop_theoretical_speed: f64,
    /// Electric flight time, h. `null` when the system is not electric.
    #[serde(deserialize_with = "nullable")]
    pub flight_time_electric: Option<f64>,
    /// Combustion flight time, h. `null` when the system is not combustion.
    #[serde(deserialize_with = "nullable")]
    pub flight_time_ice: Option<f64>,
    pub thrust_explained: String,
    pub power_explained: String,
    pub prop_speed_explained: String,
    pub flight_time_explained: String,
}

/// Accepts `null` but, unlike a plain `Option`, requires the key to be present.
fn nullable<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Option::<f64>::deserialize(deserializer)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn electric_response() -> serde_json::Value {
        json!({
            "required_thrust": 10,
            "required_power": 200,
            "prop_theoretical_speed": 5,
            "flight_time_electric": 1.5,
            "flight_time_ice": null,
            "thrust_explained": "a",
            "power_explained": "b",
            "prop_speed_explained": "c",
            "flight_time_explained": "d"
        })
    }

    #[test]
    fn parses_electric_response() {
        let result: CalculationResult = serde_json::from_value(electric_response()).unwrap();
        assert_eq!(result.required_thrust, 10.0);
        assert_eq!(result.flight_time_electric, Some(1.5));
        assert_eq!(result.flight_time_ice, None);
        assert_eq!(result.flight_time_explained, "d");
    }

    #[test]
    fn missing_nullable_key_is_an_error() {
        let mut body = electric_response();
        body.as_object_mut().unwrap().remove("flight_time_ice");
        assert!(serde_json::from_value::<CalculationResult>(body).is_err());
    }

    #[test]
    fn null_required_number_is_an_error() {
        let mut body = electric_response();
        body["required_power"] = serde_json::Value::Null;
        assert!(serde_json::from_value::<CalculationResult>(body).is_err());
    }

    #[test]
    fn unknown_keys_ignored() {
        let mut body = electric_response();
        body["extra"] = json!("ignored");
        assert!(serde_json::from_value::<CalculationResult>(body).is_ok());
    }
}

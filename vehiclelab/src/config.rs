use thiserror::Error;

/// Valores literales que la pagina pasaba a cada boton
#[derive(Debug, Clone, PartialEq)]
pub struct LabConfig {
    pub vehicle_name: String,
    pub vehicle_speed: f64,
    pub car_name: String,
    pub car_speed: f64,
    pub car_fuel: f64,
    pub refuel_amount: f64,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            vehicle_name: "Truck".to_string(),
            vehicle_speed: 80.0,
            car_name: "Sedan".to_string(),
            car_speed: 120.0,
            car_fuel: 2.0,
            refuel_amount: 20.0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: expected a number")]
    InvalidNumber { key: &'static str, value: String },
}

pub const ENV_VEHICLE_NAME: &str = "VEHICLELAB_VEHICLE_NAME";
pub const ENV_VEHICLE_SPEED: &str = "VEHICLELAB_VEHICLE_SPEED";
pub const ENV_CAR_NAME: &str = "VEHICLELAB_CAR_NAME";
pub const ENV_CAR_SPEED: &str = "VEHICLELAB_CAR_SPEED";
pub const ENV_CAR_FUEL: &str = "VEHICLELAB_CAR_FUEL";
pub const ENV_REFUEL_AMOUNT: &str = "VEHICLELAB_REFUEL_AMOUNT";

impl LabConfig {
    /// Valores por defecto pisados por las variables `VEHICLELAB_*` presentes.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(name) = lookup(ENV_VEHICLE_NAME) {
            cfg.vehicle_name = name;
        }
        if let Some(name) = lookup(ENV_CAR_NAME) {
            cfg.car_name = name;
        }
        read_number(&lookup, ENV_VEHICLE_SPEED, &mut cfg.vehicle_speed)?;
        read_number(&lookup, ENV_CAR_SPEED, &mut cfg.car_speed)?;
        read_number(&lookup, ENV_CAR_FUEL, &mut cfg.car_fuel)?;
        read_number(&lookup, ENV_REFUEL_AMOUNT, &mut cfg.refuel_amount)?;

        Ok(cfg)
    }
}

fn read_number<F>(lookup: &F, key: &'static str, slot: &mut f64) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(());
    };
    *slot = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidNumber { key, value: raw.clone() })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_refuel_is_twenty() {
        assert_eq!(LabConfig::default().refuel_amount, 20.0);
    }

    #[test]
    fn test_no_overrides_gives_defaults() {
        let cfg = LabConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, LabConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let cfg = LabConfig::from_lookup(lookup_from(&[
            (ENV_CAR_NAME, "Coupe"),
            (ENV_CAR_FUEL, " 7.5 "),
            (ENV_REFUEL_AMOUNT, "-3"),
        ]))
        .unwrap();

        assert_eq!(cfg.car_name, "Coupe");
        assert_eq!(cfg.car_fuel, 7.5);
        assert_eq!(cfg.refuel_amount, -3.0);
        assert_eq!(cfg.vehicle_name, "Truck");
    }

    #[test]
    fn test_bad_number_is_reported() {
        let err = LabConfig::from_lookup(lookup_from(&[(ENV_VEHICLE_SPEED, "fast")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber { key: ENV_VEHICLE_SPEED, value: "fast".to_string() }
        );
        assert!(err.to_string().contains(ENV_VEHICLE_SPEED));
    }
}

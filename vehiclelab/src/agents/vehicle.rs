use crate::lab_log;
use crate::log::Logger;

/// Etiqueta compartida por todos los vehiculos, solo para mostrar.
pub const VEHICLE_TYPE: &str = "Land vehicle";

// interfaz comun de vehiculo y auto
pub trait Drivable {
    fn vehicle(&self) -> &Vehicle;
    fn drive(&mut self) -> String;
    fn describe(&self) -> String;

    fn name(&self) -> &str {
        self.vehicle().name()
    }
}

#[derive(Debug, Clone)]
pub struct Vehicle {
    pub(crate) name: String,
    pub(crate) speed: f64,
    pub(crate) log: Logger,
}

impl Vehicle {
    /// Crea un vehiculo que escribe en el logger global.
    pub fn new(name: impl Into<String>, speed: f64) -> Self {
        Self::with_logger(name, speed, Logger::global())
    }

    /// Guarda los campos tal cual, sin validar (velocidad negativa incluida).
    pub fn with_logger(name: impl Into<String>, speed: f64, log: Logger) -> Self {
        let name = name.into();
        lab_log!(log, "Vehicle created: {} ({} km/h)", name, speed);
        Self { name, speed, log }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn drive(&self) -> String {
        let msg = format!("{} is moving at {} km/h", self.name, self.speed);
        lab_log!(self.log, "{}", msg);
        msg
    }

    pub fn describe(&self) -> String {
        format!(
            "Name: {}\nSpeed: {} km/h\nType: {}",
            self.name, self.speed, VEHICLE_TYPE
        )
    }
}

impl Drivable for Vehicle {
    fn vehicle(&self) -> &Vehicle { self }
    fn drive(&mut self) -> String { Vehicle::drive(self) }
    fn describe(&self) -> String { Vehicle::describe(self) }
}

/// Compara las velocidades de dos vehiculos. No depende de ninguna instancia
/// en particular ni modifica nada.
pub fn compare_speed(a: &Vehicle, b: &Vehicle) -> String {
    if a.speed > b.speed {
        format!("{} is faster than {}", a.name, b.name)
    } else if a.speed < b.speed {
        format!("{} is faster than {}", b.name, a.name)
    } else {
        format!("{} and {} have the same speed ({} km/h)", a.name, b.name, a.speed)
    }
}

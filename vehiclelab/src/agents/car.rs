// auto con tanque de combustible, envuelve un Vehicle

use super::{Drivable, Vehicle};
use crate::lab_log;
use crate::log::Logger;

/// Combustible gastado por cada llamada a drive(), sin importar la velocidad.
pub const FUEL_PER_MOVE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelState {
    Fueled,
    Empty,
}

#[derive(Debug, Clone)]
pub struct Car {
    pub(crate) inner: Vehicle,
    pub(crate) fuel: f64,
}

impl Car {
    pub fn new(name: impl Into<String>, speed: f64, fuel: f64) -> Self {
        Self::with_logger(name, speed, fuel, Logger::global())
    }

    // el Vehicle interno registra su propia creacion antes que el auto
    pub fn with_logger(name: impl Into<String>, speed: f64, fuel: f64, log: Logger) -> Self {
        let inner = Vehicle::with_logger(name, speed, log);
        lab_log!(inner.log, "Car created: {} with {}L of fuel", inner.name, fuel);
        Self { inner, fuel }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.inner
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn speed(&self) -> f64 {
        self.inner.speed()
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn state(&self) -> FuelState {
        if self.fuel > 0.0 {
            FuelState::Fueled
        } else {
            FuelState::Empty
        }
    }

    /// Con tanque vacio (`fuel <= 0`) no se mueve y el combustible queda igual.
    pub fn drive(&mut self) -> String {
        if self.fuel > 0.0 {
            self.fuel -= FUEL_PER_MOVE;
            let moved = self.inner.drive();
            let consumed = format!(
                "Fuel consumed: {}L, {}L remaining",
                FUEL_PER_MOVE, self.fuel
            );
            lab_log!(self.inner.log, "{}", consumed);
            format!("{}\n{}", moved, consumed)
        } else {
            let msg = format!("{} cannot move: the fuel tank is empty", self.inner.name);
            lab_log!(self.inner.log, "{}", msg);
            msg
        }
    }

    // sin limites: montos negativos o cero tambien se suman
    pub fn refuel(&mut self, amount: f64) -> String {
        self.fuel += amount;
        let msg = format!(
            "{} refueled: {}L added, current fuel {}L",
            self.inner.name, amount, self.fuel
        );
        lab_log!(self.inner.log, "{}", msg);
        msg
    }

    pub fn describe(&self) -> String {
        format!("{}\nFuel: {}L", self.inner.describe(), self.fuel)
    }
}

impl AsRef<Vehicle> for Car {
    fn as_ref(&self) -> &Vehicle {
        &self.inner
    }
}

impl Drivable for Car {
    fn vehicle(&self) -> &Vehicle { &self.inner }
    fn drive(&mut self) -> String { Car::drive(self) }
    fn describe(&self) -> String { Car::describe(self) }
}

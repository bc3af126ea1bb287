// panel de botones sin interfaz grafica
// cada accion equivale a un boton de la pagina y devuelve el texto a mostrar

use thiserror::Error;

use crate::agents::{compare_speed, Car, Vehicle};
use crate::config::LabConfig;
use crate::log::Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CreateVehicle,
    CreateCar,
    MoveVehicle,
    MoveCar,
    RefuelCar,
    CompareSpeed,
}

impl Action {
    /// En el orden en que aparecen en la pagina.
    pub const ALL: [Action; 6] = [
        Action::CreateVehicle,
        Action::CreateCar,
        Action::MoveVehicle,
        Action::MoveCar,
        Action::RefuelCar,
        Action::CompareSpeed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::CreateVehicle => "Create vehicle",
            Action::CreateCar => "Create car",
            Action::MoveVehicle => "Move vehicle",
            Action::MoveCar => "Move car",
            Action::RefuelCar => "Refuel car",
            Action::CompareSpeed => "Compare speed",
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PanelError {
    #[error("no vehicle yet: press \"Create vehicle\" first")]
    MissingVehicle,
    #[error("no car yet: press \"Create car\" first")]
    MissingCar,
}

#[derive(Debug)]
pub struct Panel {
    config: LabConfig,
    logger: Logger,
    vehicle: Option<Vehicle>,
    car: Option<Car>,
}

impl Panel {
    pub fn new(config: LabConfig, logger: Logger) -> Self {
        Self { config, logger, vehicle: None, car: None }
    }

    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    pub fn car(&self) -> Option<&Car> {
        self.car.as_ref()
    }

    /// Ejecuta un boton. Crear de nuevo reemplaza la entidad anterior.
    pub fn press(&mut self, action: Action) -> Result<String, PanelError> {
        tracing::debug!(action = action.label(), "button pressed");

        match action {
            Action::CreateVehicle => {
                let v = Vehicle::with_logger(
                    self.config.vehicle_name.clone(),
                    self.config.vehicle_speed,
                    self.logger.clone(),
                );
                let info = v.describe();
                self.vehicle = Some(v);
                Ok(info)
            }
            Action::CreateCar => {
                let car = Car::with_logger(
                    self.config.car_name.clone(),
                    self.config.car_speed,
                    self.config.car_fuel,
                    self.logger.clone(),
                );
                let info = car.describe();
                self.car = Some(car);
                Ok(info)
            }
            Action::MoveVehicle => {
                let v = self.vehicle.as_ref().ok_or(PanelError::MissingVehicle)?;
                Ok(v.drive())
            }
            Action::MoveCar => {
                let car = self.car.as_mut().ok_or(PanelError::MissingCar)?;
                Ok(car.drive())
            }
            Action::RefuelCar => {
                let amount = self.config.refuel_amount;
                let car = self.car.as_mut().ok_or(PanelError::MissingCar)?;
                Ok(car.refuel(amount))
            }
            Action::CompareSpeed => {
                let v = self.vehicle.as_ref().ok_or(PanelError::MissingVehicle)?;
                let car = self.car.as_ref().ok_or(PanelError::MissingCar)?;
                Ok(compare_speed(v, car.vehicle()))
            }
        }
    }
}

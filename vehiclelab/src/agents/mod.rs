mod vehicle;
mod car;

pub use vehicle::{compare_speed, Drivable, Vehicle, VEHICLE_TYPE};
pub use car::{Car, FuelState, FUEL_PER_MOVE};

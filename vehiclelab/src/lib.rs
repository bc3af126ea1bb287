// modulo raiz de vehiclelab
// vehiculo base, auto que lo envuelve y el panel de botones que los maneja

pub mod log;
pub mod agents;
pub mod config;
pub mod panel;

// reexports comodos
pub use agents::*;
pub use config::{ConfigError, LabConfig};
pub use log::{LogBuffer, Logger};
pub use panel::{Action, Panel, PanelError};

// ============================================================================
// main.rs - recorre los botones de la pagina en orden y muestra cada salida
// ============================================================================

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use vehiclelab::{Action, LabConfig, Logger, Panel};

// el primer "Move car" cae en el chequeo de presencia a proposito
const DEMO_SEQUENCE: [Action; 10] = [
    Action::MoveCar,
    Action::CreateVehicle,
    Action::CreateCar,
    Action::MoveVehicle,
    Action::MoveCar,
    Action::MoveCar,
    Action::MoveCar,
    Action::RefuelCar,
    Action::MoveCar,
    Action::CompareSpeed,
];

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = LabConfig::from_env().context("reading VEHICLELAB_* settings")?;
    let mut panel = Panel::new(config, Logger::tracing());

    println!("\n╔════════════════════════════════════════╗");
    println!("║              VehicleLab                ║");
    println!("╚════════════════════════════════════════╝\n");

    for action in DEMO_SEQUENCE {
        println!("▶ [{}]", action.label());
        match panel.press(action) {
            Ok(text) => println!("{}\n", text),
            Err(e) => println!("⚠️  {}\n", e),
        }
    }

    Ok(())
}

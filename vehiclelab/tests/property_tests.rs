// Propiedades de comparacion, recarga y consumo

use proptest::prelude::*;
use vehiclelab::*;

fn quiet_vehicle(name: &str, speed: f64) -> Vehicle {
    Vehicle::with_logger(name, speed, Logger::silent())
}

proptest! {
    #[test]
    fn compare_speed_names_same_winner_both_ways(sa in 0u32..500, sb in 0u32..500) {
        let a = quiet_vehicle("A", sa as f64);
        let b = quiet_vehicle("B", sb as f64);

        let ab = compare_speed(&a, &b);
        let ba = compare_speed(&b, &a);

        if sa == sb {
            prop_assert!(ab.contains("same speed"));
            prop_assert!(ba.contains("same speed"));
        } else {
            prop_assert_eq!(&ab, &ba);
            let winner = if sa > sb { "A is faster" } else { "B is faster" };
            prop_assert!(ab.starts_with(winner));
        }
    }

    #[test]
    fn refuel_is_additive(start in 0u32..100, a in -50i32..50, b in -50i32..50) {
        let mut split = Car::with_logger("S", 100.0, start as f64, Logger::silent());
        split.refuel(a as f64);
        split.refuel(b as f64);

        let mut joined = Car::with_logger("J", 100.0, start as f64, Logger::silent());
        joined.refuel((a + b) as f64);

        prop_assert_eq!(split.fuel(), joined.fuel());
    }

    #[test]
    fn moves_exactly_fuel_times_for_whole_liters(fuel in 0u32..30, moves in 0usize..60) {
        let mut car = Car::with_logger("M", 100.0, fuel as f64, Logger::silent());
        let mut moved = 0u32;
        for _ in 0..moves {
            if car.drive().contains("Fuel consumed") {
                moved += 1;
            }
        }

        prop_assert_eq!(moved as usize, moves.min(fuel as usize));
        prop_assert_eq!(car.fuel(), fuel.saturating_sub(moved) as f64);
        prop_assert!(car.fuel() >= 0.0);
    }
}

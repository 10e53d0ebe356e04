//! # Seed Data Generator
//!
//! Populates the database with test inventory for development.
//!
//! ## Usage
//! ```bash
//! # Generate the full matrix (default)
//! cargo run -p pitstop-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p pitstop-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p pitstop-db --bin seed -- --db ./data/pitstop.db
//! ```
//!
//! ## Generated Parts
//! Creates realistic rows across a car × part matrix:
//! - Common cars (Toyota Corolla, Honda Civic, ...)
//! - Common consumables (brake pads, filters, belts, ...)
//! - Deterministic quantity and price per cell (no RNG, reruns identical)
//!
//! Also registers a development login (admin / admin) when no user exists.

use std::env;

use pitstop_core::NewPart;
use pitstop_db::{Database, DbConfig};
use tracing_subscriber::EnvFilter;

/// Car/model pairs for realistic test data.
const CARS: &[(&str, &str)] = &[
    ("Toyota", "Corolla"),
    ("Toyota", "Hilux"),
    ("Honda", "Civic"),
    ("Honda", "Accord"),
    ("Ford", "Focus"),
    ("Hyundai", "Elantra"),
    ("Kia", "Sportage"),
    ("Mazda", "3"),
    ("Nissan", "Sunny"),
    ("Volkswagen", "Golf"),
];

/// Part names with their category code and a base price.
const PARTS: &[(&str, &str, f64)] = &[
    ("Brake Pad Set", "1", 45.0),
    ("Brake Disc", "1", 60.0),
    ("Oil Filter", "2", 8.5),
    ("Air Filter", "2", 12.0),
    ("Cabin Filter", "2", 14.0),
    ("Fuel Pump", "2", 95.0),
    ("Spark Plug", "2", 6.0),
    ("Timing Belt", "2", 38.0),
    ("Water Pump", "2", 55.0),
    ("Radiator", "2", 120.0),
    ("Alternator", "4", 180.0),
    ("Starter Motor", "4", 150.0),
    ("Shock Absorber", "5", 70.0),
    ("Control Arm", "5", 85.0),
    ("Wheel Bearing", "5", 40.0),
    ("Clutch Kit", "6", 210.0),
    ("Wiper Blade", "3", 9.0),
    ("Headlight Bulb", "3", 11.0),
    ("Battery 60Ah", "3", 110.0),
    ("Coolant 1L", "3", 7.5),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = CARS.len() * PARTS.len();
    let mut db_path = String::from("./pitstop_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(count);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Pitstop Inventory Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of parts to generate (default: full matrix)");
                println!("  -d, --db <PATH>    Database file path (default: ./pitstop_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Pitstop Inventory Seed Data Generator");
    println!("========================================");
    println!("Database: {}", db_path);
    println!("Parts:    {}", count);
    println!();

    // Connect to database (runs migrations, seeds default settings)
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing parts
    let existing = db.parts().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} parts", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Development login for the gate screen
    if db.users().count().await? == 0 && db.users().add("admin", "admin").await? {
        println!("✓ Registered development login (admin / admin)");
    }

    // Generate parts
    println!();
    println!("Generating parts...");

    let mut generated = 0;
    let start = std::time::Instant::now();

    'outer: for (car_idx, (car, model)) in CARS.iter().enumerate() {
        for (part_idx, (name, category, base_price)) in PARTS.iter().enumerate() {
            if generated >= count {
                break 'outer;
            }

            let seed = car_idx * PARTS.len() + part_idx;
            // Spread quantities so low-stock views have something to show
            let quantity = (seed * 7) % 40;
            // Nudge the base price per car so prices aren't uniform
            let price = base_price + (car_idx as f64) * 1.25;

            let new_part = NewPart::from_form(
                category,
                car,
                model,
                name,
                &quantity.to_string(),
                &format!("{:.2}", price),
            )?;

            if let Err(e) = db.parts().add(new_part).await {
                eprintln!("Failed to insert {} for {} {}: {}", name, car, model, e);
                continue;
            }

            generated += 1;

            if generated % 50 == 0 {
                println!("  Generated {} parts...", generated);
            }
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} parts in {:?}", generated, elapsed);

    // Verify search paths
    println!();
    println!("Verifying search...");
    let hits = db.parts().search("brake").await?;
    println!("  Search 'brake': {} results", hits.len());

    let names = db.parts().search_prefix("oil", 5).await?;
    println!("  Autocomplete 'oil': {} suggestions", names.len());

    let cars = db.parts().distinct_cars().await?;
    println!("  Distinct cars: {}", cars.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

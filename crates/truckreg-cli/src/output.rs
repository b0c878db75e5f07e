//! Output formatting module

use truckreg_types::{OutputFormat, Result, TruckRecord};

pub fn print_trucks(
    output_format: OutputFormat,
    owner: &str,
    trucks: &[&TruckRecord],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(trucks)?;
        println!("{}", content);
    } else {
        // Table format
        println!("\nRegistered trucks for {}", owner);
        println!("==============================");

        if trucks.is_empty() {
            println!("No trucks registered yet.");
            return Ok(());
        }

        for truck in trucks {
            println!("Truck number: {}", truck.truck_number);
            println!("Driver:       {}", truck.driver_name);
            println!("Contact:      {}", truck.contact_number);
            println!("Registered:   {}", truck.registration_date);
            println!("---");
        }
        println!("{} truck(s)", trucks.len());
    }

    Ok(())
}

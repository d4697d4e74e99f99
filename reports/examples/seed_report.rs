//! Print the seed record and its rendered fragments.
//!
//! Run with: `cargo run -p footprint-report --example seed_report`

use footprint_report::types::{Category, FootprintRecord};
use footprint_report::{render_building_details, render_land_chart};

fn main() {
    let record = FootprintRecord::default();

    match serde_json::to_string_pretty(&record) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize record: {e}"),
    }

    for category in Category::ALL {
        println!("\n<!-- {category} -->");
        println!("{}", render_building_details(category, &record));
    }

    println!("\n<!-- land types -->\n{}", render_land_chart());
}

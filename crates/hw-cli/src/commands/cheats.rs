use comfy_table::{ContentArrangement, Table};

use hw_mechanics::CheatMode;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Mode", "Effect on each 4d6 die"]);
    for mode in CheatMode::ALL {
        table.add_row(vec![mode.index().to_string(), mode.description().to_string()]);
    }
    println!("{table}");
    println!();
    println!("  Pass --cheat <mode> or type 'cheat' in `hw create` to cycle.");
    Ok(())
}

// Dry-run checker for a simulation request file: validates the pass design,
// builds the initial profile and the unit sequence, and prints a summary.
// No solver is invoked.
//
// Usage:
//   cargo run --bin check_pass_design -- <request.json> [config_db_path]
//
// Without a config DB path the built-in defaults are used.

use rolling_sim::config::{ConfigManager, SimulationConfigReader, SimulationDefaults};
use rolling_sim::engine::{build_profile, SequenceBuilder, SequenceValidator, SolveInstruction};
use rolling_sim::{logging, SimulationRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let request_path = args
        .next()
        .ok_or("usage: check_pass_design <request.json> [config_db_path]")?;

    let defaults = match args.next() {
        Some(db_path) => ConfigManager::new(&db_path)?.load_defaults().await?,
        None => SimulationDefaults::default(),
    };

    let raw = std::fs::read_to_string(&request_path)?;
    let request: SimulationRequest = serde_json::from_str(&raw)?;

    let validation = SequenceValidator::validate(&request.pass_design_data);
    for issue in &validation.issues {
        println!("[issue] {}", issue);
    }

    let instruction = SolveInstruction::resolve(&request.solve_method, &request.solve_params)?;
    let profile = build_profile(&request.in_profile)?;
    let built = SequenceBuilder::new(defaults.clone()).build_sequence(&request.pass_design_data)?;

    println!("validation_policy={}", defaults.validation_policy);
    println!("solve_method={}", instruction.method());
    println!("in_profile={} temperature={}", profile.shape(), profile.temperature);
    for (index, unit) in built.sequence.iter().enumerate() {
        println!(
            "unit {}: {} {}",
            index + 1,
            unit.kind(),
            unit.label().unwrap_or("-")
        );
    }
    for entry in &built.skipped {
        println!(
            "skipped {}: {}",
            entry.index + 1,
            entry.unit_type.as_deref().unwrap_or("<missing type>")
        );
    }

    if !validation.is_ok() {
        return Err(validation.reason().into());
    }
    Ok(())
}

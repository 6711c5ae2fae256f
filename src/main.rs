use calicon::config::{IconPlan, PLAN_FILE};
use calicon::generate;
use calicon::utils::log_line;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let plan = IconPlan::load_or_default(Path::new(PLAN_FILE))?;

    let generated = generate::run(&plan, |msg| log_line(&generate::describe(msg)))?;
    let verified = generate::verify(&generated)?;
    log_line(&format!("Verified {} icon files", verified));

    log_line("All icons generated successfully!");
    Ok(())
}

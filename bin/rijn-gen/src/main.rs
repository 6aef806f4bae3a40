use anyhow::Context;
use colored::Colorize;
use log::info;
use rijn_emit::{fs, render};
use rijn_tables::TableSet;
use std::path::Path;

// Output paths are fixed: this generator takes no flags and no
// configuration. Consumers import the module artifact verbatim.
const MODULE_PATH: &str = "aes_base.rs";
const LOG_PATH: &str = "aes_base.log";

fn main() -> anyhow::Result<()> {
    env_logger::init();
    info!(">>> RIJN-GEN v0.2.0 (AES TABLE FORGE) <<<");
    info!(
        "Field: GF(2^8) mod {:#05X}, generator {:#04X}",
        rijn_core::REDUCTION_POLY,
        rijn_core::GENERATOR
    );

    let tables = TableSet::generate();
    info!(
        "Derivation complete: S-box, inverse S-box, {} product tables, {} round constants",
        tables.mul.len(),
        tables.rcon.len()
    );

    let module = render::module_source(&tables).context("rendering module artifact")?;
    fs::write_atomic(Path::new(MODULE_PATH), &module)
        .with_context(|| format!("writing {}", MODULE_PATH))?;
    info!("Module artifact written: {}", MODULE_PATH);

    let log_text = render::log_text(&tables).context("rendering log artifact")?;
    fs::write_atomic(Path::new(LOG_PATH), &log_text)
        .with_context(|| format!("writing {}", LOG_PATH))?;
    info!("Log artifact written: {}", LOG_PATH);

    println!("{} {}", "Generated".green().bold(), MODULE_PATH);
    println!("{} {}", "Generated".green().bold(), LOG_PATH);

    Ok(())
}

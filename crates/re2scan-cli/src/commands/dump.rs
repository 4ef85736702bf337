//! Dump command implementation.

use anyhow::Result;
use re2scan_core::{Scanner, find_process};
use tracing::info;

/// Run the dump command: one refresh, snapshot out as JSON.
pub fn run(process_name: &str, output: Option<&str>) -> Result<()> {
    let process = find_process(process_name)?;
    info!(
        "Found {} (pid {}, base {:#x})",
        process_name, process.pid, process.base_address
    );

    let mut scanner = Scanner::attach(&process)?;
    info!("Detected game version: {}", scanner.version());

    let snapshot = scanner.refresh()?;
    let json = serde_json::to_string_pretty(snapshot)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Snapshot saved to {}", path);
        }
        None => println!("{json}"),
    }

    Ok(())
}

//! Watch command implementation.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use owo_colors::OwoColorize;
use re2scan_core::{Error, GameSnapshot, Scanner, find_process};
use tracing::{error, info, warn};

use crate::shutdown::StopFlag;

const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Run the watch command: attach, refresh on an interval, and print a
/// status line per tick. Reconnects if the game is restarted.
pub fn run(process_name: &str, interval_ms: u64) -> Result<()> {
    let stop = Arc::new(StopFlag::new());
    let handler_stop = Arc::clone(&stop);
    ctrlc::set_handler(move || handler_stop.stop())?;

    let interval = Duration::from_millis(interval_ms);

    while !stop.is_stopped() {
        let process = match find_process(process_name) {
            Ok(process) => process,
            Err(_) => {
                info!("Waiting for {} process...", process_name);
                if stop.sleep(RECONNECT_DELAY) {
                    break;
                }
                continue;
            }
        };

        info!(
            "Found {} (pid {}, base {:#x})",
            process_name, process.pid, process.base_address
        );

        let mut scanner = match Scanner::attach(&process) {
            Ok(scanner) => scanner,
            Err(e @ Error::UnsupportedVersion(_)) => return Err(e.into()),
            Err(e) => {
                error!("Failed to attach: {}", e);
                if stop.sleep(RECONNECT_DELAY) {
                    break;
                }
                continue;
            }
        };

        info!("Detected game version: {}", scanner.version());

        while !stop.is_stopped() {
            match scanner.refresh() {
                Ok(snapshot) => print_status(snapshot),
                Err(e @ Error::ProcessTerminated { .. }) => {
                    warn!("{}", e);
                    break;
                }
                Err(e) => {
                    error!("Refresh failed: {}", e);
                    break;
                }
            }

            if stop.sleep(interval) {
                break;
            }
        }

        if !stop.is_stopped() {
            info!("Process disconnected, waiting for reconnect...");
        }
    }

    Ok(())
}

fn print_status(snapshot: &GameSnapshot) {
    let hp = snapshot.player.hp;
    let health = format!("{}/{}", hp.current, hp.max);
    let health = match snapshot.player.health_percentage() {
        p if p < 25.0 => health.red().to_string(),
        p if p < 60.0 => health.yellow().to_string(),
        _ => health.green().to_string(),
    };

    let equipped = snapshot.equipped_main.display_name();

    println!(
        "[{}] {} / {} | HP {} | rank {} ({:.0} pts) | items {}/{} | {} | enemies {} (kills {})",
        snapshot.timer.formatted().bold(),
        snapshot.location_name,
        snapshot.map_name,
        health,
        snapshot.rank.rank,
        snapshot.rank.rank_point,
        snapshot.occupied_items().count(),
        snapshot.inventory_max_count,
        equipped,
        snapshot.live_enemies().count(),
        snapshot.enemy_kill_count,
    );
}

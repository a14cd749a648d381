//! Native driver: poll the ball feed, plan, emit the best shot
//!
//! Usage: `pool-planner [settings.json]`
//!
//! Each tick prints one JSON line: `[angle, force, elevation]`, or `null`
//! when no shot is available.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use pool_planner::feed::decode_frame;
use pool_planner::{Pocket, RatingPolicy, Settings, ShotCommand, best_shot};

fn main() {
    env_logger::init();
    log::info!("Pool Planner starting...");

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());
    log::info!(
        "policy {}, feed {:?}, {} ticks at {} Hz",
        settings.rating_policy.as_str(),
        settings.feed,
        settings.ticks,
        settings.poll_hz
    );

    let pockets = Pocket::standard_table();
    let mut feed = settings.open_feed();
    let interval = Duration::from_secs_f32(settings.poll_interval());

    for tick in 0..settings.ticks {
        if let Some(frame) = feed.poll() {
            if let Some(line) = plan_frame(&frame, &pockets, settings.rating_policy) {
                println!("{line}");
            }
        }
        if tick + 1 < settings.ticks {
            thread::sleep(interval);
        }
    }
}

/// Plan one frame and serialize the result, or `None` if the frame was bad
fn plan_frame(frame: &[f32], pockets: &[Pocket], policy: RatingPolicy) -> Option<String> {
    let snapshot = match decode_frame(frame) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("Dropping frame: {}", e);
            return None;
        }
    };

    let command: Option<ShotCommand> = best_shot(&snapshot, pockets, policy).map(|s| s.command());
    match serde_json::to_string(&command) {
        Ok(json) => Some(json),
        Err(e) => {
            log::error!("Could not serialize shot: {}", e);
            None
        }
    }
}

//! Osmos headless runner
//!
//! Runs a session without a window: loads settings, steps frames with a
//! scripted input, logs the debug console and prints a JSON summary.
//!
//! Usage: `osmos [settings.json]`

use std::path::PathBuf;

use osmos::DebugStats;
use osmos::Settings;
use osmos::renderer::RedrawCounter;
use osmos::sim::{GameState, Outcome, TickInput, frame};

/// Frames between scripted nudges
const NUDGE_PERIOD: u64 = 120;

fn main() {
    env_logger::init();
    log::info!("Osmos (headless) starting...");

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());
    log::debug!("settings: {}", settings.to_json());

    let mut state = GameState::new(&settings);
    let mut renderer = RedrawCounter::default();

    for frame_index in 0..settings.frames {
        let input = scripted_input(&state, frame_index);
        frame(&mut state, &input);
        state.population.draw(&mut renderer);

        if settings.debug
            && settings.report_every > 0
            && frame_index % settings.report_every == 0
        {
            for line in DebugStats::collect(&state).lines() {
                log::info!("{line}");
            }
        }

        if matches!(state.outcome, Some(Outcome::Won | Outcome::Terminated)) {
            log::info!("stopping after frame {}", frame_index);
            break;
        }
    }

    log::info!(
        "rendered {} sprites, {} redrawn ({} layers)",
        renderer.sprites,
        renderer.redraws,
        renderer.layers
    );

    let stats = DebugStats::collect(&state);
    match serde_json::to_string_pretty(&stats) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize summary: {err}"),
    }
}

/// Every `NUDGE_PERIOD` frames, push the player away from the nearest heavier life form
fn scripted_input(state: &GameState, frame_index: u64) -> TickInput {
    if frame_index % NUDGE_PERIOD != 0 {
        return TickInput::default();
    }
    let player = state.population.player();
    let threat = state
        .population
        .iter()
        .filter(|lf| lf.mass() > player.mass())
        .map(|lf| lf.position())
        .min_by(|a, b| {
            a.distance(player.position())
                .total_cmp(&b.distance(player.position()))
        });

    TickInput {
        click: threat,
        ..Default::default()
    }
}

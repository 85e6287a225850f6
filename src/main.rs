//! Gravity Travel headless host
//!
//! Plays one level on the fixed-step loop with a scripted drag toward the
//! goal and logs how it went.

use std::path::PathBuf;

use glam::Vec2;

use gravity_travel::audio::AudioManager;
use gravity_travel::consts::{MAX_SUBSTEPS, SIM_DT};
use gravity_travel::levels::{DirLevels, EmbeddedLevels, LevelSource};
use gravity_travel::sim::{HitTarget, PointerEvent, PointerPhase};
use gravity_travel::{FlowError, FlowEvent, Game, Scene, Settings, Theme, Tuning};

/// Host frame rate for the scripted run
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after this much simulated time
const MAX_RUN_SECS: f64 = 60.0;

struct Host {
    game: Game,
    accumulator: f32,
    clock: f64,
}

impl Host {
    fn new(game: Game) -> Self {
        Self {
            game,
            accumulator: 0.0,
            clock: 0.0,
        }
    }

    /// Run simulation ticks for one host frame
    fn update(&mut self, dt: f32) -> Result<(), FlowError> {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.game.update(self.clock, SIM_DT)?;
            self.clock += SIM_DT as f64;
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        Ok(())
    }

    /// Press on the actor and drag toward the goal
    fn drag_toward_goal(&mut self) -> Result<(), FlowError> {
        let Some(session) = self.game.session() else {
            return Ok(());
        };
        let actor = session.actor.pos;
        let goal_x = session.goal_rect().center().x;
        let pointer = Vec2::new(goal_x, actor.y);

        self.game
            .pointer(&PointerEvent::new(PointerPhase::Press, actor, Some(HitTarget::Actor)))?;
        self.game
            .pointer(&PointerEvent::new(PointerPhase::Move, pointer, None))?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "gravity-travel")]
#[command(about = "Play one Gravity Travel level headless with a scripted drag")]
struct Cli {
    /// Level number to play
    #[arg(default_value_t = 1)]
    level: u32,

    /// Settings file; written back when the theme changes
    settings: Option<PathBuf>,

    /// Read level{n}.json files from this directory instead of the built-in set
    #[arg(long)]
    levels: Option<PathBuf>,

    /// JSON file overriding physics and input constants
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Switch to this theme (neon or bold)
    #[arg(long)]
    theme: Option<Theme>,

    /// Music volume, 0.0 to 1.0
    #[arg(long, default_value_t = 0.8)]
    volume: f32,
}

#[cfg(not(target_arch = "wasm32"))]
fn run(cli: Cli, tuning: Tuning) -> Result<(), FlowError> {
    let settings = cli.settings.as_deref().map(Settings::load).unwrap_or_default();
    let levels: Box<dyn LevelSource> = match cli.levels {
        Some(dir) => Box::new(DirLevels::new(dir)),
        None => Box::new(EmbeddedLevels),
    };
    let mut audio = AudioManager::default();
    audio.set_master_volume(cli.volume);

    let mut game = Game::new(levels, settings, audio).with_tuning(tuning);
    if let Some(path) = cli.settings {
        game = game.with_settings_path(path);
    }
    if let Some(theme) = cli.theme {
        game.change_theme(theme);
    }

    let level = cli.level;
    game.dispatch(FlowEvent::Start)?;
    game.dispatch(FlowEvent::SelectLevel(level))?;

    let mut host = Host::new(game);
    host.drag_toward_goal()?;

    while host.clock < MAX_RUN_SECS {
        host.update(FRAME_DT)?;
        if !matches!(host.game.scene(), Scene::Play { .. }) {
            break;
        }
    }

    log::info!(
        "Last frame: {} drawable(s) on {:?}",
        host.game.drawables().len(),
        host.game.clear_color()
    );
    match host.game.last_completion() {
        Some(done) => log::info!(
            "Level {} finished in {:.2}s with {} star(s)",
            done.level,
            done.elapsed,
            done.rating.stars()
        ),
        None => {
            let pos = host.game.session().map(|s| s.actor.pos);
            log::info!("Level {level} not finished after {MAX_RUN_SECS}s (actor at {pos:?})");
        }
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Gravity Travel (headless) starting...");

    let cli = Cli::parse();
    let tuning = match cli.tuning.as_deref().map(Tuning::load).transpose() {
        Ok(tuning) => tuning.unwrap_or_default(),
        Err(e) => {
            log::error!("Bad tuning file: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, tuning) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on the web
}

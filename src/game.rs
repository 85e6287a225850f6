//! Game driver
//!
//! Owns the active scene and, while in `Play`, the session for that level.
//! Flow events go through `flow::transition`; a level is loaded before the
//! new scene is committed, so a missing or corrupt level leaves the game in
//! the scene it was in.

use std::path::PathBuf;

use crate::audio::AudioManager;
use crate::error::FlowResult;
use crate::flow::{self, FlowEffect, FlowEvent, Scene};
use crate::levels::LevelSource;
use crate::platform::ThemedAssets;
use crate::settings::{Settings, Theme};
use crate::sim::input::PointerEvent;
use crate::sim::rating::Completion;
use crate::sim::state::{PlaySession, SessionEvent};
use crate::sim::tick::{apply_pointer, tick};
use crate::tuning::Tuning;
use crate::view::{self, Drawable};

pub struct Game {
    scene: Scene,
    session: Option<PlaySession>,
    settings: Settings,
    /// Where settings are saved on change; `None` keeps them in memory
    settings_path: Option<PathBuf>,
    audio: AudioManager,
    levels: Box<dyn LevelSource>,
    tuning: Tuning,
    last_completion: Option<Completion>,
}

impl Game {
    pub fn new(levels: Box<dyn LevelSource>, settings: Settings, mut audio: AudioManager) -> Self {
        audio.set_enabled(settings.music_enabled);
        Self {
            scene: Scene::Menu,
            session: None,
            settings,
            settings_path: None,
            audio,
            levels,
            tuning: Tuning::default(),
            last_completion: None,
        }
    }

    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = Some(path.into());
        self
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn session(&self) -> Option<&PlaySession> {
        self.session.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    pub fn level_count(&self) -> u32 {
        self.levels.level_count()
    }

    /// The most recent completion, kept for the completion screen
    pub fn last_completion(&self) -> Option<Completion> {
        self.last_completion
    }

    /// Whether the completion screen should show "next"
    pub fn offers_next(&self) -> bool {
        match self.scene {
            Scene::LevelCompletion { level, .. } => flow::offers_next(level, self.level_count()),
            _ => false,
        }
    }

    /// Apply a flow event. On error nothing changes.
    pub fn dispatch(&mut self, event: FlowEvent) -> FlowResult<()> {
        let result = self.try_dispatch(event);
        if let Err(e) = &result {
            log::error!("{e}; staying in {:?}", self.scene);
        }
        result
    }

    fn try_dispatch(&mut self, event: FlowEvent) -> FlowResult<()> {
        let transition = flow::transition(self.scene, event, self.level_count())?;

        let mut loaded = None;
        let mut end_session = false;
        for effect in &transition.effects {
            match *effect {
                FlowEffect::LoadLevel(level) => {
                    let model = self.levels.load(level)?;
                    loaded = Some(PlaySession::new(model, self.tuning.clone()));
                }
                FlowEffect::EndSession => end_session = true,
            }
        }

        if end_session {
            self.session = None;
        }
        if loaded.is_some() {
            self.session = loaded;
        }
        log::info!("Scene {:?} -> {:?}", self.scene, transition.scene);
        self.scene = transition.scene;
        Ok(())
    }

    /// Feed a pointer event to the active session
    pub fn pointer(&mut self, event: &PointerEvent) -> FlowResult<Vec<SessionEvent>> {
        let Some(session) = self.session.as_mut() else {
            return Ok(Vec::new());
        };
        let events = apply_pointer(session, event);
        for event in &events {
            match event {
                SessionEvent::ResetRequested => self.dispatch(FlowEvent::Reset)?,
                SessionEvent::BackRequested => self.dispatch(FlowEvent::Back)?,
                _ => {}
            }
        }
        Ok(events)
    }

    /// Run one fixed simulation step; `now` is the host clock in seconds
    pub fn update(&mut self, now: f64, dt: f32) -> FlowResult<Vec<SessionEvent>> {
        let Some(session) = self.session.as_mut() else {
            return Ok(Vec::new());
        };
        let events = tick(session, now, dt);
        for event in &events {
            if let SessionEvent::Completed(done) = event {
                self.last_completion = Some(*done);
                self.dispatch(FlowEvent::Completed {
                    level: done.level,
                    rating: done.rating,
                })?;
            }
        }
        Ok(events)
    }

    /// Draw list for the active session in the current theme
    pub fn drawables(&self) -> Vec<Drawable> {
        let resolver = ThemedAssets::new(self.settings.theme);
        self.session
            .as_ref()
            .map(|session| view::drawables(session, &resolver))
            .unwrap_or_default()
    }

    /// Background colour for the current theme (RGB)
    pub fn clear_color(&self) -> [f32; 3] {
        self.settings.theme.background_color()
    }

    pub fn toggle_music(&mut self, enabled: bool) {
        self.settings.music_enabled = enabled;
        self.audio.set_enabled(enabled);
        self.save_settings();
    }

    /// Switch theme; returns false if it was already active
    pub fn change_theme(&mut self, theme: Theme) -> bool {
        if self.settings.theme == theme {
            return false;
        }
        log::info!("Theme {:?} -> {:?}", self.settings.theme, theme);
        self.settings.theme = theme;
        self.save_settings();
        true
    }

    fn save_settings(&self) {
        if let Some(path) = &self.settings_path {
            self.settings.save(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::SIM_DT;
    use crate::error::FlowError;
    use crate::levels::{EmbeddedLevels, MemoryLevels};
    use crate::sim::input::{HitTarget, PointerPhase};
    use crate::sim::rating::Rating;

    const LEVEL: &str = r#"{
        "level_num": 0,
        "layout": {
            "bounds": { "x": 0, "y": 0, "w": 400, "h": 300 },
            "start_position": [40, 17.5],
            "finish_position": [140, 32]
        },
        "rating": { "single": 30, "double": 20, "triple": 10 }
    }"#;

    /// Switch "a" in reach of the start, bridge "A" further along
    const SWITCH_LEVEL: &str = r#"{
        "level_num": 1,
        "layout": {
            "bounds": { "x": 0, "y": 0, "w": 400, "h": 300 },
            "start_position": [40, 17.5],
            "finish_position": [340, 32]
        },
        "rating": { "single": 30, "double": 20, "triple": 10 },
        "switches": [
            { "key": "A", "color": { "r": 1, "g": 0, "b": 0 }, "position": [90, 15],
              "name": "a", "is_active": false }
        ],
        "bridges": [
            { "key": "A", "color": { "r": 1, "g": 0, "b": 0 },
              "rect": { "x": 200, "y": 0, "w": 20, "h": 100 } }
        ]
    }"#;

    fn level(n: u32) -> String {
        LEVEL.replace("\"level_num\": 0", &format!("\"level_num\": {n}"))
    }

    /// Level 1 and 3 are fine, level 2 is corrupt
    fn game() -> Game {
        let levels = MemoryLevels::new(vec![level(1), "{ nope".to_string(), level(3)]);
        Game::new(Box::new(levels), Settings::default(), AudioManager::default())
    }

    fn walk_right(game: &mut Game) {
        let at = game.session().unwrap().actor.pos;
        game.pointer(&PointerEvent::new(PointerPhase::Press, at, Some(HitTarget::Actor)))
            .unwrap();
        game.pointer(&PointerEvent::new(PointerPhase::Move, at + Vec2::new(300.0, 0.0), None))
            .unwrap();
    }

    fn run(game: &mut Game, ticks: u32) {
        for i in 0..ticks {
            game.update(i as f64 * SIM_DT as f64, SIM_DT).unwrap();
        }
    }

    #[test]
    fn test_menu_to_play() {
        let mut game = game();
        game.dispatch(FlowEvent::Start).unwrap();
        game.dispatch(FlowEvent::SelectLevel(1)).unwrap();
        assert_eq!(game.scene(), Scene::Play { level: 1 });
        assert_eq!(game.session().unwrap().level_num(), 1);
    }

    #[test]
    fn test_corrupt_level_keeps_prior_scene() {
        let mut game = game();
        game.dispatch(FlowEvent::Start).unwrap();
        let err = game.dispatch(FlowEvent::SelectLevel(2)).unwrap_err();
        assert!(matches!(err, FlowError::Level(_)));
        assert_eq!(game.scene(), Scene::LevelSelect);
        assert!(game.session().is_none());
    }

    #[test]
    fn test_completion_then_next_fails_closed() {
        let mut game = game();
        game.dispatch(FlowEvent::Start).unwrap();
        game.dispatch(FlowEvent::SelectLevel(1)).unwrap();
        walk_right(&mut game);
        run(&mut game, 120 * 3);

        let done = game.last_completion().unwrap();
        assert_eq!(done.level, 1);
        assert_eq!(done.rating, Rating::Triple);
        assert_eq!(
            game.scene(),
            Scene::LevelCompletion {
                level: 1,
                rating: Rating::Triple
            }
        );
        assert!(game.session().is_none());
        assert!(game.offers_next());

        // Level 2 is corrupt: stay on the completion screen
        assert!(game.dispatch(FlowEvent::Next).is_err());
        assert!(matches!(game.scene(), Scene::LevelCompletion { level: 1, .. }));

        game.dispatch(FlowEvent::Retry).unwrap();
        assert_eq!(game.scene(), Scene::Play { level: 1 });
    }

    #[test]
    fn test_reset_button_reloads_level_fresh() {
        let mut game = game();
        game.dispatch(FlowEvent::Start).unwrap();
        game.dispatch(FlowEvent::SelectLevel(3)).unwrap();
        walk_right(&mut game);
        run(&mut game, 30);
        let start = Vec2::new(40.0, 17.5);
        assert_ne!(game.session().unwrap().actor.pos, start);

        let reset = PointerEvent::new(PointerPhase::Press, Vec2::ZERO, Some(HitTarget::ResetButton));
        let events = game.pointer(&reset).unwrap();
        assert_eq!(events, vec![SessionEvent::ResetRequested]);
        assert_eq!(game.scene(), Scene::Play { level: 3 });
        let session = game.session().unwrap();
        assert_eq!(session.actor.pos, start);
        assert_eq!(session.time_ticks, 0);
    }

    #[test]
    fn test_reset_discards_switch_and_gravity_state() {
        let levels = MemoryLevels::new(vec![SWITCH_LEVEL.to_string()]);
        let mut game = Game::new(Box::new(levels), Settings::default(), AudioManager::default());
        game.dispatch(FlowEvent::Start).unwrap();
        game.dispatch(FlowEvent::SelectLevel(1)).unwrap();
        game.update(0.0, SIM_DT).unwrap();

        let tap_switch = PointerEvent::new(
            PointerPhase::Press,
            Vec2::new(90.0, 15.0),
            Some(HitTarget::Switch("a".into())),
        );
        game.pointer(&tap_switch).unwrap();
        let at = game.session().unwrap().actor.pos;
        game.pointer(&PointerEvent::new(PointerPhase::Press, at, Some(HitTarget::Actor)))
            .unwrap();
        game.pointer(&PointerEvent::new(PointerPhase::Release, at, Some(HitTarget::Actor)))
            .unwrap();
        run(&mut game, 20);

        let session = game.session().unwrap();
        assert!(session.network.switches()[0].is_activated);
        assert!(session.network.bridges()[0].is_enabled);
        assert!(session.gravity.is_reversed());
        assert!(session.cue.arrows().is_some());

        let reset = PointerEvent::new(PointerPhase::Press, Vec2::ZERO, Some(HitTarget::ResetButton));
        game.pointer(&reset).unwrap();
        assert_eq!(game.scene(), Scene::Play { level: 1 });

        let session = game.session().unwrap();
        assert_eq!(session.actor.pos, Vec2::new(40.0, 17.5));
        assert!(!session.actor.is_reversed);
        assert!(!session.gravity.is_reversed());
        assert!(session.cue.arrows().is_none());
        assert!(session.network.switches().iter().all(|s| !s.is_activated && !s.is_in_range));
        assert!(session.network.bridges().iter().all(|b| !b.is_enabled));
        assert_eq!(session.time_ticks, 0);
        assert!(session.is_running());
    }

    #[test]
    fn test_back_button_abandons_level() {
        let mut game = game();
        game.dispatch(FlowEvent::Start).unwrap();
        game.dispatch(FlowEvent::SelectLevel(1)).unwrap();
        let back = PointerEvent::new(PointerPhase::Press, Vec2::ZERO, Some(HitTarget::BackButton));
        game.pointer(&back).unwrap();
        assert_eq!(game.scene(), Scene::Menu);
        assert!(game.session().is_none());
    }

    #[test]
    fn test_no_next_after_last_embedded_level() {
        let mut game = Game::new(Box::new(EmbeddedLevels), Settings::default(), AudioManager::default());
        game.dispatch(FlowEvent::Start).unwrap();
        game.dispatch(FlowEvent::SelectLevel(5)).unwrap();
        game.update(0.0, SIM_DT).unwrap();
        assert!(!game.offers_next());
        assert!(game.dispatch(FlowEvent::Next).is_err());
        assert_eq!(game.scene(), Scene::Play { level: 5 });
    }

    #[test]
    fn test_settings_commands() {
        let mut game = game();
        assert!(game.audio().is_playing());
        game.toggle_music(false);
        assert!(!game.settings().music_enabled);
        assert!(!game.audio().is_playing());

        assert!(!game.change_theme(Theme::Bold));
        assert!(game.change_theme(Theme::Neon));
        assert_eq!(game.settings().theme, Theme::Neon);

        game.dispatch(FlowEvent::OpenSettings).unwrap();
        assert_eq!(game.scene(), Scene::Settings);
        game.dispatch(FlowEvent::Back).unwrap();
        assert_eq!(game.scene(), Scene::Menu);
    }

    #[test]
    fn test_drawables_follow_theme() {
        let mut game = game();
        assert!(game.drawables().is_empty());
        game.dispatch(FlowEvent::Start).unwrap();
        game.dispatch(FlowEvent::SelectLevel(1)).unwrap();
        game.change_theme(Theme::Neon);
        assert!(game.drawables().iter().all(|d| d.asset.starts_with("Neon/")));
        assert_eq!(game.clear_color(), Theme::Neon.background_color());
    }
}

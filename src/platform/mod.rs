//! Platform abstraction layer
//!
//! The simulation never draws. It describes what is on screen as `Visual`s
//! and asks a `VisualResolver` supplied by the host for the asset behind
//! each one.

use crate::settings::Theme;
use crate::sim::gravity::CueArrows;

/// Anything the host may need to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visual {
    Actor { walking: bool, reversed: bool },
    Switch { activated: bool },
    Bridge,
    Goal,
    Arrow,
    Rainbow,
    /// Level-provided asset path (overlay, border)
    LevelAsset(String),
    GravityArrows(CueArrows),
    DragIndicator,
    ResetButton,
    BackButton,
}

/// Resolves a visual to an asset identifier
pub trait VisualResolver {
    fn resolve(&self, visual: &Visual) -> String;
}

/// Asset paths under a theme directory, e.g. `Bold/Levels/Assets/Goal`
#[derive(Debug, Clone, Copy)]
pub struct ThemedAssets {
    pub theme: Theme,
}

impl ThemedAssets {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl VisualResolver for ThemedAssets {
    fn resolve(&self, visual: &Visual) -> String {
        let path = match visual {
            Visual::Actor { walking, reversed } => match (walking, reversed) {
                (false, false) => "Traveler/Stand",
                (false, true) => "Traveler/StandReversed",
                (true, false) => "Traveler/Walk",
                (true, true) => "Traveler/WalkReversed",
            },
            Visual::Switch { activated: true } => "Levels/Assets/PowerOn",
            Visual::Switch { activated: false } => "Levels/Assets/PowerOff",
            Visual::Bridge => "Levels/Assets/Bridge",
            Visual::Goal => "Levels/Assets/Goal",
            Visual::Arrow => "Levels/Assets/Arrow",
            Visual::Rainbow => "Levels/Assets/Rainbow",
            Visual::LevelAsset(path) => path.as_str(),
            Visual::GravityArrows(CueArrows::Up) => "Levels/Assets/ArrowUp",
            Visual::GravityArrows(CueArrows::Down) => "Levels/Assets/ArrowDown",
            Visual::DragIndicator => "Traveler/DragSprite",
            Visual::ResetButton => "Levels/Assets/ResetButton",
            Visual::BackButton => "Levels/Assets/BackButton",
        };
        self.theme.file_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_theme_prefixed() {
        let bold = ThemedAssets::new(Theme::Bold);
        let neon = ThemedAssets::new(Theme::Neon);
        assert_eq!(bold.resolve(&Visual::Goal), "Bold/Levels/Assets/Goal");
        assert_eq!(
            neon.resolve(&Visual::Actor {
                walking: true,
                reversed: true
            }),
            "Neon/Traveler/WalkReversed"
        );
        assert_eq!(
            bold.resolve(&Visual::LevelAsset("Levels/Level2/Overlay".into())),
            "Bold/Levels/Level2/Overlay"
        );
    }
}

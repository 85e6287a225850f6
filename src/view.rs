//! Draw list for a play session
//!
//! Flattens session state into drawables, back to front, with every asset
//! resolved through the host's `VisualResolver`.

use glam::Vec2;

use crate::platform::{Visual, VisualResolver};
use crate::sim::geom::Rect;
use crate::sim::level::Color;
use crate::sim::state::PlaySession;

/// Alpha of a bridge that is currently pass-through
pub const DISABLED_BRIDGE_ALPHA: f32 = 0.2;
/// Alpha of a switch the actor cannot reach
pub const OUT_OF_RANGE_SWITCH_ALPHA: f32 = 0.5;
/// Button inset from the top corners of the level
const BUTTON_INSET: f32 = 40.0;

/// One sprite or shape to draw
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub asset: String,
    /// Center in world space
    pub pos: Vec2,
    /// Size for shapes; zero means the asset's natural size
    pub size: Vec2,
    pub tint: Option<Color>,
    pub alpha: f32,
    /// Horizontal scale sign
    pub mirror_x: f32,
    /// Vertical flip (upside-down sprites)
    pub flip_y: bool,
    /// Radians
    pub rotation: f32,
    /// Outline drawn dashed instead of solid
    pub dashed: bool,
}

impl Drawable {
    fn sprite(asset: String, pos: Vec2) -> Self {
        Self {
            asset,
            pos,
            size: Vec2::ZERO,
            tint: None,
            alpha: 1.0,
            mirror_x: 1.0,
            flip_y: false,
            rotation: 0.0,
            dashed: false,
        }
    }

    fn shape(asset: String, rect: Rect, color: Color) -> Self {
        Self {
            size: Vec2::new(rect.w, rect.h),
            tint: Some(color),
            ..Self::sprite(asset, rect.center())
        }
    }
}

/// Build the draw list, back to front
pub fn drawables(session: &PlaySession, resolver: &dyn VisualResolver) -> Vec<Drawable> {
    let level = &session.level;
    let layout = &level.layout;
    let mut out = Vec::new();

    for path in [&layout.physics_border_path, &layout.overlay_path] {
        if !path.is_empty() {
            out.push(Drawable::sprite(
                resolver.resolve(&Visual::LevelAsset(path.clone())),
                layout.bounds.center(),
            ));
        }
    }

    for bridge in session.network.bridges() {
        let mut drawable = Drawable::shape(resolver.resolve(&Visual::Bridge), bridge.rect, bridge.color);
        if !bridge.is_enabled {
            drawable.alpha = DISABLED_BRIDGE_ALPHA;
            drawable.dashed = true;
        }
        out.push(drawable);
    }

    for rainbow in &level.rainbows {
        out.push(Drawable {
            rotation: rainbow.rotation,
            ..Drawable::sprite(resolver.resolve(&Visual::Rainbow), rainbow.position)
        });
    }

    for arrow in &level.arrows {
        out.push(Drawable {
            flip_y: arrow.reversed,
            mirror_x: if arrow.alternative { -1.0 } else { 1.0 },
            ..Drawable::sprite(resolver.resolve(&Visual::Arrow), arrow.position)
        });
    }

    for switch in session.network.switches() {
        let visual = Visual::Switch {
            activated: switch.is_activated,
        };
        out.push(Drawable {
            tint: Some(switch.color),
            flip_y: switch.reversed,
            alpha: if switch.is_in_range {
                1.0
            } else {
                OUT_OF_RANGE_SWITCH_ALPHA
            },
            ..Drawable::sprite(resolver.resolve(&visual), switch.position)
        });
    }

    let goal = session.goal_rect();
    out.push(Drawable {
        size: Vec2::new(goal.w, goal.h),
        flip_y: layout.finish_reversed,
        ..Drawable::sprite(resolver.resolve(&Visual::Goal), goal.center())
    });

    let indicator = session.gestures.indicator();
    if indicator.visible {
        let actor = session.actor.pos;
        let dir = Vec2::from_angle(indicator.angle);
        out.push(Drawable {
            size: Vec2::new(indicator.length, 0.0),
            rotation: indicator.angle,
            ..Drawable::sprite(
                resolver.resolve(&Visual::DragIndicator),
                actor + dir * (indicator.length / 2.0),
            )
        });
    }

    let actor = &session.actor;
    let visual = Visual::Actor {
        walking: actor.is_moving,
        reversed: actor.is_reversed,
    };
    out.push(Drawable {
        mirror_x: actor.mirror_x(),
        rotation: actor.orientation,
        ..Drawable::sprite(resolver.resolve(&visual), actor.pos)
    });

    if let Some(arrows) = session.cue.arrows() {
        out.push(Drawable::sprite(
            resolver.resolve(&Visual::GravityArrows(arrows)),
            layout.bounds.center(),
        ));
    }

    let top = layout.bounds.max().y - BUTTON_INSET;
    out.push(Drawable::sprite(
        resolver.resolve(&Visual::BackButton),
        Vec2::new(layout.bounds.x + BUTTON_INSET, top),
    ));
    out.push(Drawable::sprite(
        resolver.resolve(&Visual::ResetButton),
        Vec2::new(layout.bounds.max().x - BUTTON_INSET, top),
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ThemedAssets;
    use crate::settings::Theme;
    use crate::sim::gravity::CueArrows;
    use crate::sim::testing::{bridge, level_with, switch};
    use crate::tuning::Tuning;

    fn find<'a>(list: &'a [Drawable], asset: &str) -> Vec<&'a Drawable> {
        list.iter().filter(|d| d.asset == asset).collect()
    }

    #[test]
    fn test_bridge_and_switch_alpha() {
        let level = level_with(
            vec![switch("A", "a", 60.0, true), switch("B", "b", 700.0, false)],
            vec![bridge("A", 200.0), bridge("B", 400.0)],
        );
        let mut session = PlaySession::new(level, Tuning::default());
        session.network.update_proximity(session.actor.pos, 60.0);

        let list = drawables(&session, &ThemedAssets::new(Theme::Bold));
        let bridges = find(&list, "Bold/Levels/Assets/Bridge");
        assert_eq!(bridges.len(), 2);
        assert_eq!(bridges[0].alpha, 1.0);
        assert!(!bridges[0].dashed);
        assert_eq!(bridges[1].alpha, DISABLED_BRIDGE_ALPHA);
        assert!(bridges[1].dashed);

        let on = find(&list, "Bold/Levels/Assets/PowerOn");
        let off = find(&list, "Bold/Levels/Assets/PowerOff");
        assert_eq!(on.len(), 1);
        assert_eq!(on[0].alpha, 1.0);
        assert_eq!(off[0].alpha, OUT_OF_RANGE_SWITCH_ALPHA);
    }

    #[test]
    fn test_actor_drawn_after_goal_and_cue_over_actor() {
        let mut session = PlaySession::new(level_with(vec![], vec![]), Tuning::default());
        session.invert_gravity();
        let list = drawables(&session, &ThemedAssets::new(Theme::Neon));

        let goal = list
            .iter()
            .position(|d| d.asset == "Neon/Levels/Assets/Goal")
            .unwrap();
        let actor = list
            .iter()
            .position(|d| d.asset == "Neon/Traveler/StandReversed")
            .unwrap();
        let cue_asset = ThemedAssets::new(Theme::Neon).resolve(&Visual::GravityArrows(CueArrows::Up));
        let cue = list.iter().position(|d| d.asset == cue_asset).unwrap();
        assert!(goal < actor);
        assert!(actor < cue);
        assert_eq!(list.last().unwrap().asset, "Neon/Levels/Assets/ResetButton");
    }

    #[test]
    fn test_level_assets_drawn_first() {
        let mut level = level_with(vec![], vec![]);
        level.layout.overlay_path = "Levels/Level1/Overlay".into();
        level.layout.physics_border_path = "Levels/Level1/Border".into();
        let session = PlaySession::new(level, Tuning::default());
        let list = drawables(&session, &ThemedAssets::new(Theme::Bold));
        assert_eq!(list[0].asset, "Bold/Levels/Level1/Border");
        assert_eq!(list[1].asset, "Bold/Levels/Level1/Overlay");
        assert_eq!(list[0].pos, Vec2::new(500.0, 300.0));
    }
}

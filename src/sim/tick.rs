//! Simulation tick and input application
//!
//! The host calls `apply_pointer` for each input event and `tick` once per
//! fixed step. Both are no-ops once the session has completed.

use super::input::{GestureCommand, PointerEvent};
use super::physics;
use super::state::{PlaySession, SessionEvent, SessionPhase};

/// Advance the session by one step. `now` is the host clock in seconds.
pub fn tick(session: &mut PlaySession, now: f64, dt: f32) -> Vec<SessionEvent> {
    if session.phase == SessionPhase::Completed {
        return Vec::new();
    }

    session.completion.observe_tick(now);
    session.time_ticks += 1;

    let goal = session.goal_rect();
    let level_num = session.level_num();
    if let Some(done) =
        session
            .completion
            .check(level_num, session.actor.pos, &goal, &session.level.rating, now)
    {
        session.phase = SessionPhase::Completed;
        session.actor.stop();
        log::info!(
            "level {} completed in {:.2}s: {:?}",
            done.level,
            done.elapsed,
            done.rating
        );
        return vec![SessionEvent::Completed(done)];
    }

    session
        .network
        .update_proximity(session.actor.pos, session.tuning.switch_range);

    let solids = session.solids();
    let bounds = session.bounds();
    physics::step(
        &mut session.actor,
        &session.gravity,
        &solids,
        &bounds,
        &session.tuning,
        dt,
    );
    session
        .actor
        .advance_orientation(dt, session.tuning.flip_duration);

    let mut events = Vec::new();
    if session.cue.advance(dt) {
        events.push(SessionEvent::GravityCueCleared);
    }
    events
}

/// Apply one pointer event to the session
pub fn apply_pointer(session: &mut PlaySession, event: &PointerEvent) -> Vec<SessionEvent> {
    if session.phase == SessionPhase::Completed {
        return Vec::new();
    }

    let commands = session
        .gestures
        .handle(event, session.actor.pos, &session.tuning);

    let mut events = Vec::new();
    for command in commands {
        match command {
            GestureCommand::Drive(direction) => session.actor.walk(direction),
            GestureCommand::Stop => session.actor.stop(),
            GestureCommand::InvertGravity => {
                let reversed = session.invert_gravity();
                events.push(SessionEvent::GravityInverted { reversed });
            }
            GestureCommand::ToggleSwitch(name) => {
                let toggled = session
                    .network
                    .switch_index(&name)
                    .and_then(|index| session.network.toggle(index));
                if let Some(activated) = toggled {
                    events.push(SessionEvent::SwitchToggled { name, activated });
                }
            }
            GestureCommand::Reset => events.push(SessionEvent::ResetRequested),
            GestureCommand::Back => events.push(SessionEvent::BackRequested),
        }
    }
    events
}

//! Milestone ladder and celebration/consolation message catalog.
//!
//! Process-wide immutable constants. The only nondeterminism in the whole
//! domain layer lives here, in [`random_break_message`]; everything else is
//! pure lookup and arithmetic.

use rand::seq::SliceRandom;

/// Streak lengths that trigger a celebration, ascending.
pub const MILESTONES: [u32; 4] = [3, 7, 14, 30];

/// Consolation messages shown when a streak has broken.
pub const STREAK_BREAK_MESSAGES: [&str; 8] = [
    "Our streak paused, but our love didn't 💕",
    "A little break — let's start a new streak today 🔥",
    "Missed a day, but more memories await ✨",
    "Every love story has intermissions 🎬💖",
    "Distance makes the heart grow fonder 💝",
    "The pause just means the next moment is even sweeter 🍬",
    "A break in routine, never in love 💗",
    "New day, new streak, same love 💘",
];

/// Returns the celebration message for an exact milestone rung.
#[must_use]
pub fn milestone_message(milestone: u32) -> Option<&'static str> {
    match milestone {
        3 => Some("3 days of love — you're on fire! 🔥"),
        7 => Some("7 days of love unlocked 💖"),
        14 => Some("Two weeks of romance! 🌹"),
        30 => Some("A whole month of love! You're legendary 👑💕"),
        _ => None,
    }
}

/// Picks a consolation message uniformly at random.
#[must_use]
pub fn random_break_message() -> &'static str {
    STREAK_BREAK_MESSAGES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("New day, new streak, same love 💘")
}

/// Returns the smallest ladder value strictly greater than `current_streak`,
/// or `None` at or beyond the top rung.
#[must_use]
pub fn next_milestone(current_streak: u32) -> Option<u32> {
    MILESTONES.iter().copied().find(|m| current_streak < *m)
}

/// Percentage (0–100) of the way from the previous rung (or 0) to the next
/// milestone. 100 when there is no next milestone.
#[must_use]
pub fn milestone_progress(current_streak: u32) -> f64 {
    let Some(next) = next_milestone(current_streak) else {
        return 100.0;
    };
    let prev = MILESTONES
        .iter()
        .copied()
        .take_while(|m| *m < next)
        .last()
        .unwrap_or(0);

    let range = f64::from(next - prev);
    let progress = f64::from(current_streak.saturating_sub(prev));
    (progress / range * 100.0).min(100.0)
}

//! Hardcoded terminal UI settings.

use crossterm::style::Color;

pub const COLOR_PROMPT: Color = Color::Green;
pub const COLOR_BANNER: Color = Color::DarkGrey;

/// How long the key reader blocks in `event::poll` before checking for
/// shutdown.
pub const KEY_POLL_MS: u64 = 80;
/// Capacity of the key and response channels between tasks.
pub const CHANNEL_CAPACITY: usize = 64;

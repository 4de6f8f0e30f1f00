//! Hero tagline typing schedule.
//!
//! Everything is a pure function of the milliseconds elapsed since mount, so
//! the hero only needs to sleep until [`next_change_ms`] and re-render.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Pause before the first character appears.
pub const START_DELAY_MS: f64 = 500.0;
/// Time between characters.
pub const CHAR_INTERVAL_MS: f64 = 70.0;
/// Caret on/off period once typing has finished.
pub const CARET_BLINK_MS: f64 = 500.0;

/// Moment the caret first appears, one interval after the last character.
#[allow(clippy::cast_precision_loss)]
fn finished_at_ms(char_count: usize) -> f64 {
    START_DELAY_MS + CHAR_INTERVAL_MS * char_count as f64
}

/// Number of characters of a `char_count`-long text visible at `elapsed_ms`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn typed_chars(char_count: usize, elapsed_ms: f64) -> usize {
    if elapsed_ms < START_DELAY_MS {
        return 0;
    }
    let steps = ((elapsed_ms - START_DELAY_MS) / CHAR_INTERVAL_MS).floor() as usize + 1;
    steps.min(char_count)
}

/// The visible prefix of `text`, split on a char boundary.
pub fn visible_text(text: &str, elapsed_ms: f64) -> &str {
    let n = typed_chars(text.chars().count(), elapsed_ms);
    text.char_indices().nth(n).map_or(text, |(at, _)| &text[..at])
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Caret {
    /// Still typing.
    Hidden,
    On,
    Off,
}

pub fn caret(text: &str, elapsed_ms: f64) -> Caret {
    let done = finished_at_ms(text.chars().count());
    if elapsed_ms < done {
        return Caret::Hidden;
    }
    let phase = ((elapsed_ms - done) / CARET_BLINK_MS).floor();
    if phase.rem_euclid(2.0) < 1.0 { Caret::On } else { Caret::Off }
}

/// Milliseconds until the next visible change after `elapsed_ms`.
pub fn next_change_ms(text: &str, elapsed_ms: f64) -> f64 {
    let elapsed = elapsed_ms.max(0.0);
    if elapsed < START_DELAY_MS {
        return START_DELAY_MS - elapsed;
    }
    let done = finished_at_ms(text.chars().count());
    if elapsed < done {
        return CHAR_INTERVAL_MS - (elapsed - START_DELAY_MS).rem_euclid(CHAR_INTERVAL_MS);
    }
    CARET_BLINK_MS - (elapsed - done).rem_euclid(CARET_BLINK_MS)
}

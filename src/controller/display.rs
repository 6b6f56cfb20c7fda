//! Text helpers for view layers.
//!
//! These reproduce the game's on-screen strings so every front end shows
//! the same text. None of them are used for game logic.

use crate::core::Word;

/// Separator between words in the chain display.
pub const CHAIN_SEPARATOR: &str = " → ";

/// Upper-case the first character.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalized words joined with an arrow.
#[must_use]
pub fn chain_text<'a, I>(words: I) -> String
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .map(|w| capitalize(w.as_str()))
        .collect::<Vec<_>>()
        .join(CHAIN_SEPARATOR)
}

/// Whole seconds to show for `remaining`, rounded up.
#[must_use]
pub fn countdown_display(remaining: f64) -> u32 {
    remaining.max(0.0).ceil() as u32
}

/// Countdown label.
#[must_use]
pub fn time_text(seconds: u32) -> String {
    format!("Thời gian: {seconds}s")
}

/// Score label.
#[must_use]
pub fn score_text(score: u32) -> String {
    format!("Điểm: {score}")
}

/// Label shown above the starting word.
#[must_use]
pub fn start_word_text(word: &Word) -> String {
    format!("Từ bắt đầu: {}", capitalize(word.as_str()))
}

/// Label shown above the word to chain from.
#[must_use]
pub fn current_word_text(word: &Word) -> String {
    format!("Nối tiếp từ: {}", capitalize(word.as_str()))
}

/// Game-over panel text.
#[must_use]
pub fn game_over_text(reason: &str, final_score: u32) -> String {
    format!("Thua rồi!\n{reason}\nĐiểm cuối cùng: {final_score}")
}

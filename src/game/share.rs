//! Share text for finished games.

use crate::core::Score;

/// The one-line summary handed to a share button.
///
/// ```
/// use twenty48::game::share_text;
///
/// assert_eq!(share_text("2048", "Slide tiles.", 1024), "2048 Slide tiles. Score: 1024");
/// ```
#[must_use]
pub fn share_text(title: &str, description: &str, score: Score) -> String {
    format!("{title} {description} Score: {score}")
}

/// Headline shown when the game ends.
#[must_use]
pub fn outcome_message(won: bool) -> &'static str {
    if won {
        "You win!"
    } else {
        "Game over"
    }
}

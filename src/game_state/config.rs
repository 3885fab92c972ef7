//! Rule switches for game termination.
//!
//! Defaults end the game on checkmate (counted with legal moves) and on
//! stalemate. Both can be switched back to the engine's older behaviour,
//! either in code or through environment variables read by
//! [`GameConfig::from_env`].

use tracing::warn;

/// Environment variable selecting [`MateDetection`] (`legal` | `pseudo`).
pub const MATE_DETECTION_ENV: &str = "CHESS_REFEREE_MATE_DETECTION";

/// Environment variable toggling [`GameConfig::stalemate_ends_game`].
pub const STALEMATE_ENV: &str = "CHESS_REFEREE_STALEMATE";

/// How "the checked side has no moves" is counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MateDetection {
    /// Count moves that survive the self-check filter.
    #[default]
    Legal,
    /// Count pseudo-legal moves. A checked side whose every move still walks
    /// into check is then not considered mated.
    PseudoLegal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub mate_detection: MateDetection,
    /// End the game when the side to move has a king, is not in check and
    /// has no legal move.
    pub stalemate_ends_game: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mate_detection: MateDetection::Legal,
            stalemate_ends_game: true,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by [`MATE_DETECTION_ENV`] and [`STALEMATE_ENV`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(MATE_DETECTION_ENV) {
            match parse_mate_detection(&value) {
                Some(mode) => config.mate_detection = mode,
                None => warn!(
                    variable = MATE_DETECTION_ENV,
                    value = %value,
                    "unrecognised mate detection mode, keeping default"
                ),
            }
        }

        if let Some(value) = lookup(STALEMATE_ENV) {
            match parse_switch(&value) {
                Some(enabled) => config.stalemate_ends_game = enabled,
                None => warn!(
                    variable = STALEMATE_ENV,
                    value = %value,
                    "unrecognised switch value, keeping default"
                ),
            }
        }

        config
    }
}

fn parse_mate_detection(value: &str) -> Option<MateDetection> {
    match value.trim() {
        v if v.eq_ignore_ascii_case("legal") => Some(MateDetection::Legal),
        v if v.eq_ignore_ascii_case("pseudo") || v.eq_ignore_ascii_case("pseudo-legal") => {
            Some(MateDetection::PseudoLegal)
        }
        _ => None,
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

//! Personal best score
//!
//! Persisted to LocalStorage under the configured key; the game-over screen
//! reads it, the session end updates it.

use serde::{Deserialize, Serialize};

/// Best score achieved on this device
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BestScore {
    pub score: u32,
}

impl BestScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a finished round beats the stored best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.score
    }

    /// Record a finished round. Returns true if it set a new best.
    pub fn update(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.score = score;
        true
    }

    /// Load the best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(storage_key: &str) -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(storage_key) {
                if let Ok(score) = raw.parse::<u32>() {
                    log::info!("Loaded best score {}", score);
                    return Self { score };
                }
            }
        }

        log::info!("No best score found, starting fresh");
        Self::new()
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self, storage_key: &str) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(storage_key, &self.score.to_string());
            log::info!("Best score saved ({})", self.score);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(_storage_key: &str) -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, _storage_key: &str) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_keeps_the_maximum() {
        let mut best = BestScore::new();

        assert!(best.update(5));
        assert_eq!(best.score, 5);

        assert!(!best.update(3));
        assert_eq!(best.score, 5);

        assert!(best.update(12));
        assert_eq!(best.score, 12);
    }

    #[test]
    fn test_equal_score_is_not_a_new_best() {
        let mut best = BestScore { score: 7 };
        assert!(!best.qualifies(7));
        assert!(!best.update(7));
        assert_eq!(best.score, 7);
    }

    #[test]
    fn test_zero_never_qualifies_on_fresh_board() {
        let best = BestScore::new();
        assert!(!best.qualifies(0));
    }
}

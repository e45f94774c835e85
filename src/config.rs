//! Game configuration
//!
//! One immutable parameter table read by every other component. Values are
//! fixed after load; the simulation never mutates them.

use serde::{Deserialize, Serialize};

/// Physics integration parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravity in pixels/s²
    pub gravity: f32,
    /// Multiplicative velocity decay per step (0-1]
    pub air_resistance: f32,
    /// Multiplicative spin decay per step (0-1]
    pub angular_damping: f32,
    /// Spin-curvature (Magnus) force scale
    pub magnus_strength: f32,
    /// Energy retained on wall/ceiling bounces [0-1]
    pub bounce_damping: f32,
    /// Below this speed the Magnus force is suppressed
    pub min_velocity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 2800.0,
            air_resistance: 0.98,
            angular_damping: 0.995,
            magnus_strength: 0.05,
            bounce_damping: 0.6,
            min_velocity: 5.0,
        }
    }
}

/// Fraction of pre-kick velocity preserved through a kick
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MomentumRetention {
    pub horizontal: f32,
    pub vertical: f32,
}

/// Kick (impulse) tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KickConfig {
    /// Base impulse magnitude
    pub base_force: f32,
    /// Upward tendency of the kick direction (0.5 = neutral, 1 = straight up)
    pub vertical_bias: f32,
    /// Spin imparted per unit of horizontal contact offset
    pub spin_factor: f32,
    /// Clamp on |angular velocity| after a kick
    pub max_spin: f32,
    /// Hit-test radius = ball radius * this multiplier
    pub touch_radius_multiplier: f32,
    pub momentum_retention: MomentumRetention,
}

impl Default for KickConfig {
    fn default() -> Self {
        Self {
            base_force: 1500.0,
            vertical_bias: 0.7,
            spin_factor: 0.03,
            max_spin: 25.0,
            touch_radius_multiplier: 1.5,
            momentum_retention: MomentumRetention {
                horizontal: 0.2,
                vertical: 0.1,
            },
        }
    }
}

/// Ball sizing and spawn parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BallConfig {
    pub min_radius: f32,
    pub max_radius: f32,
    /// Radius as a fraction of the smaller viewport dimension
    pub radius_ratio: f32,
    /// Upward velocity applied when a round starts
    pub initial_velocity_y: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            min_radius: 40.0,
            max_radius: 70.0,
            radius_ratio: 0.1,
            initial_velocity_y: -200.0,
        }
    }
}

impl BallConfig {
    /// Ball radius for a viewport, clamped to [min_radius, max_radius]
    pub fn radius_for(&self, width: f32, height: f32) -> f32 {
        (width.min(height) * self.radius_ratio).clamp(self.min_radius, self.max_radius)
    }
}

/// Squash-and-stretch deformation triggered by kicks
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SquashConfig {
    /// Effect duration in seconds
    pub duration: f32,
    /// Deformation intensity at full strength
    pub amount: f32,
}

/// Ground-contact shadow shaping
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShadowConfig {
    pub max_alpha: f32,
    pub min_alpha: f32,
    pub min_scale: f32,
    pub height_ratio: f32,
    pub offset_y: f32,
}

/// Drop shadow painted under the ball itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallShadowConfig {
    pub color: String,
    pub blur: f32,
    pub offset_y: f32,
}

/// Visual effect parameters (no feedback into physics)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualsConfig {
    pub squash: SquashConfig,
    pub shadow: ShadowConfig,
    pub ball_shadow: BallShadowConfig,
}

impl Default for VisualsConfig {
    fn default() -> Self {
        Self {
            squash: SquashConfig {
                duration: 0.15,
                amount: 0.25,
            },
            shadow: ShadowConfig {
                max_alpha: 0.4,
                min_alpha: 0.1,
                min_scale: 0.3,
                height_ratio: 0.3,
                offset_y: 5.0,
            },
            ball_shadow: BallShadowConfig {
                color: "rgba(0, 0, 0, 0.3)".into(),
                blur: 20.0,
                offset_y: 10.0,
            },
        }
    }
}

/// Background gradient stops
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundColors {
    pub top: String,
    pub middle: String,
    pub bottom: String,
}

/// Ground line and gradient colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundColors {
    pub line: String,
    pub gradient_start: String,
    pub gradient_end: String,
}

/// Fallback ball styling when no sprite is available
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackColors {
    pub ball_fill: String,
    pub ball_stroke: String,
}

/// Palette consumed only by the presentation adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorsConfig {
    pub background: BackgroundColors,
    pub ground: GroundColors,
    pub fallback: FallbackColors,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            background: BackgroundColors {
                top: "#1a1a2e".into(),
                middle: "#16213e".into(),
                bottom: "#0f3460".into(),
            },
            ground: GroundColors {
                line: "rgba(255, 255, 255, 0.1)".into(),
                gradient_start: "rgba(231, 76, 60, 0.3)".into(),
                gradient_end: "rgba(231, 76, 60, 0.1)".into(),
            },
            fallback: FallbackColors {
                ball_fill: "#ffffff".into(),
                ball_stroke: "#333333".into(),
            },
        }
    }
}

/// Viewport layout
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Distance from the viewport bottom to the playable floor
    pub ground_offset: f32,
    /// Initial ball Y as a fraction of viewport height
    pub ball_start_y_ratio: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            ground_offset: 30.0,
            ball_start_y_ratio: 0.3,
        }
    }
}

/// Gameplay-level knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameplayConfig {
    /// Hard clamp on per-frame elapsed seconds (tab backgrounding protection)
    pub max_delta_time: f32,
    /// LocalStorage key for the personal best
    pub storage_key: String,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            max_delta_time: 0.1,
            storage_key: "keepy-uppy-best".into(),
        }
    }
}

/// Haptic feedback tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Vibration pulse on a successful kick, in milliseconds
    pub vibration_duration_ms: u32,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            vibration_duration_ms: 10,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub physics: PhysicsConfig,
    pub kick: KickConfig,
    pub ball: BallConfig,
    pub visuals: VisualsConfig,
    pub colors: ColorsConfig,
    pub screen: ScreenConfig,
    pub gameplay: GameplayConfig,
    pub feedback: FeedbackConfig,
}

impl Config {
    /// LocalStorage key for config overrides (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "keepy_uppy_config";

    /// Load config overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(config) = serde_json::from_str(&json) {
                    log::info!("Loaded config overrides from LocalStorage");
                    return config;
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

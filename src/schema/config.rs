//! Configuration types for playback and joint bindings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_fps() -> u32 {
    60
}

fn default_speed_multiplier() -> f32 {
    1.0
}

fn default_hold_seconds() -> f32 {
    0.15
}

fn default_hand_gain() -> f32 {
    1.0
}

fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn default_clamp_deg() -> [f32; 3] {
    [60.0, 60.0, 60.0]
}

/// Top-level player configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Playback tick rate in frames per second.
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Tick-cadence scaling. Changes wall-clock playback speed only;
    /// frame content is never resampled.
    #[serde(default = "default_speed_multiplier")]
    pub speed_multiplier: f32,
    /// Seconds of hold (repeated final frame) appended after each clip.
    #[serde(default = "default_hold_seconds")]
    pub inter_token_hold_seconds: f32,
    /// Gain applied to both hand channel ranges each tick.
    #[serde(default = "default_hand_gain")]
    pub hand_gain: f32,
    /// Exponential smoothing factor for the face channel range, in [0, 1].
    /// Zero disables face smoothing.
    #[serde(default)]
    pub face_smooth: f32,
    /// Joint bindings driven each tick.
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            speed_multiplier: default_speed_multiplier(),
            inter_token_hold_seconds: default_hold_seconds(),
            hand_gain: default_hand_gain(),
            face_smooth: 0.0,
            bindings: Vec::new(),
        }
    }
}

/// Configuration for one joint binding: maps a channel triplet starting at
/// `start_index` onto the named joint's local rotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingConfig {
    /// Name of the target joint in the host scene graph.
    pub joint: String,
    /// First channel of the (x, y, z) degree triplet.
    pub start_index: usize,
    /// Additive per-axis offset in degrees, applied after scaling.
    #[serde(default)]
    pub add_offset: [f32; 3],
    /// Per-axis scale applied to the raw channel values.
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
    /// Exponential smoothing factor for this joint, in [0, 1].
    #[serde(default)]
    pub smooth: f32,
    /// Symmetric per-axis clamp in degrees (each axis limited to ±clamp).
    #[serde(default = "default_clamp_deg")]
    pub clamp_deg: [f32; 3],
}

impl BindingConfig {
    /// Binding with defaults for everything but the joint name and start
    /// channel.
    pub fn new(joint: impl Into<String>, start_index: usize) -> Self {
        Self {
            joint: joint.into(),
            start_index,
            add_offset: [0.0; 3],
            scale: default_scale(),
            smooth: 0.0,
            clamp_deg: default_clamp_deg(),
        }
    }
}

impl PlayerConfig {
    /// Wall-clock interval between ticks: `1/fps` scaled down by the speed
    /// multiplier.
    pub fn tick_interval(&self) -> Duration {
        let fps = self.fps.max(1) as f32;
        let speed = self.speed_multiplier.max(0.01);
        Duration::from_secs_f32((1.0 / fps) / speed)
    }

    /// Number of hold frames appended after each clip.
    pub fn hold_frames(&self) -> usize {
        let hold = (self.inter_token_hold_seconds * self.fps as f32).round();
        hold.max(0.0) as usize
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::InvalidFps);
        }
        if self.speed_multiplier <= 0.0 {
            return Err(ConfigError::InvalidSpeedMultiplier);
        }
        if self.inter_token_hold_seconds < 0.0 {
            return Err(ConfigError::InvalidHoldSeconds);
        }
        if self.hand_gain < 0.0 {
            return Err(ConfigError::InvalidHandGain);
        }
        if !(0.0..=1.0).contains(&self.face_smooth) {
            return Err(ConfigError::InvalidFaceSmooth);
        }
        for (i, binding) in self.bindings.iter().enumerate() {
            if binding.joint.is_empty() {
                return Err(ConfigError::EmptyJointName { binding: i });
            }
            if !(0.0..=1.0).contains(&binding.smooth) {
                return Err(ConfigError::InvalidSmoothing { binding: i });
            }
            if binding.clamp_deg.iter().any(|&c| c < 0.0) {
                return Err(ConfigError::InvalidClamp { binding: i });
            }
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Tick rate (fps) must be non-zero")]
    InvalidFps,
    #[error("Speed multiplier must be positive")]
    InvalidSpeedMultiplier,
    #[error("Inter-token hold seconds must be non-negative")]
    InvalidHoldSeconds,
    #[error("Hand gain must be non-negative")]
    InvalidHandGain,
    #[error("Face smoothing factor must lie in [0, 1]")]
    InvalidFaceSmooth,
    #[error("Binding {binding} has an empty joint name")]
    EmptyJointName { binding: usize },
    #[error("Binding {binding} smoothing factor must lie in [0, 1]")]
    InvalidSmoothing { binding: usize },
    #[error("Binding {binding} clamp must be non-negative on every axis")]
    InvalidClamp { binding: usize },
}

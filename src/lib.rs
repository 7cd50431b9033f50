//! Glossplay - Token-driven avatar clip sequencing and playback.
//!
//! This crate drives a 3D avatar's skeletal pose from precomputed per-frame
//! rotation data. Tokens (e.g. sign-language glosses) resolve to clip files
//! through a mapping table, clips concatenate into a play sequence with
//! inter-token holds, and a fixed-tick engine applies per-joint rotation
//! deltas — gain-scaled, clamped, and smoothed — on top of each joint's
//! captured bind pose.
//!
//! # Architecture
//!
//! - `schema`: configuration types and the frame channel layout
//! - `clip`: frame decoding, the token→clip map, and the file-access seam
//! - `sequence`: token list → concatenated frame buffer
//! - `player`: the fixed-tick playback engine and the scene-graph sink
//! - `transport`: inbound payload parsing and the command surface
//!
//! # Example
//!
//! ```rust
//! use glossplay::{
//!     clip::{ClipMap, MemorySource},
//!     player::{Player, PlaybackState, RecordingSink},
//!     schema::{BindingConfig, PlayerConfig},
//!     sequence::SequenceBuilder,
//!     transport::{Adapter, Command},
//! };
//!
//! // One clip, reachable through the default naming convention.
//! let mut source = MemorySource::new();
//! source.insert_clip("wave_normalized.csv", "0,0,0\n10,0,0\n20,0,0\n");
//!
//! let config = PlayerConfig {
//!     inter_token_hold_seconds: 0.0,
//!     bindings: vec![BindingConfig::new("spine", 0)],
//!     ..Default::default()
//! };
//!
//! let mut sink = RecordingSink::new();
//! sink.add_joint("spine");
//!
//! let mut player = Player::new(config.clone(), &sink).unwrap();
//! let map = ClipMap::empty();
//! let adapter = Adapter::new(SequenceBuilder::new(&map, &source, &config));
//!
//! adapter.dispatch(&mut player, &mut sink, Command::PlayTokens(vec!["wave".into()]));
//! while player.state() == PlaybackState::Playing {
//!     player.tick(&mut sink);
//! }
//! ```

pub mod clip;
pub mod player;
pub mod schema;
pub mod sequence;
pub mod transport;

// Re-export commonly used types
pub use clip::{ClipMap, ClipSource, DirSource, Frame};
pub use player::{JointId, JointSink, PlaybackState, Player, RecordingSink};
pub use schema::{BindingConfig, PlayerConfig};
pub use sequence::{Sequence, SequenceBuilder};
pub use transport::{Adapter, Command, parse_tokens};

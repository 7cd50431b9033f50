//! Transport adapter: inbound token payloads and the command surface.
//!
//! Hosts deliver tokens in whatever shape their bridge produces: a JSON
//! array of strings, or a pipe/space/comma-delimited line. Parsing is a
//! two-stage sniff, not real JSON parsing — a payload that merely looks
//! like an array but is malformed still yields its quoted tokens, and
//! anything else falls back to the delimiter split. Commands never fail:
//! bad input degrades to "nothing to play" with a log line.

use std::sync::OnceLock;

use log::warn;
use regex::Regex;

use crate::player::{JointSink, Player};
use crate::sequence::SequenceBuilder;

fn quoted() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]+)""#).expect("quoted-token pattern"))
}

fn delimiters() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[|\s,]+").expect("delimiter pattern"))
}

/// Normalize a heterogeneous token payload into an ordered token list.
///
/// A payload starting with `[` is scanned for quoted substrings (tolerant
/// of malformed JSON); when that yields nothing, or for any other payload,
/// the text splits on runs of `|`, whitespace, or `,`. Blank tokens are
/// discarded in both stages.
pub fn parse_tokens(payload: &str) -> Vec<String> {
    let trimmed = payload.trim();

    if trimmed.starts_with('[') {
        let extracted: Vec<&str> = quoted()
            .captures_iter(trimmed)
            .map(|c| c.get(1).expect("capture group 1").as_str())
            .collect();
        // Any quoted content means the payload really was an array; blank
        // tokens inside it are discarded, not re-split.
        if !extracted.is_empty() {
            return extracted
                .into_iter()
                .filter(|t| !t.trim().is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    delimiters()
        .split(trimmed)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Commands exposed to host/transport collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build a sequence for the tokens and start playing.
    PlayTokens(Vec<String>),
    /// Parse a raw payload into tokens, build, and auto-start playback.
    PlayTokensJson(String),
    /// Restart the current sequence from frame zero (no rebuild).
    Play,
    /// Stop ticking; the built sequence is retained.
    Pause,
    /// Discard the sequence and restore every bound joint's bind pose.
    ResetPose,
}

/// Dispatches commands onto a player, building sequences as needed. Every
/// dispatch returns normally; failures are logged and observable only as
/// absent playback.
pub struct Adapter<'a> {
    builder: SequenceBuilder<'a>,
}

impl<'a> Adapter<'a> {
    pub fn new(builder: SequenceBuilder<'a>) -> Self {
        Self { builder }
    }

    pub fn dispatch(&self, player: &mut Player, sink: &mut dyn JointSink, command: Command) {
        match command {
            Command::PlayTokens(tokens) => self.play_tokens(player, &tokens),
            Command::PlayTokensJson(payload) => {
                let tokens = parse_tokens(&payload);
                self.play_tokens(player, &tokens);
            }
            Command::Play => player.play(),
            Command::Pause => player.pause(),
            Command::ResetPose => player.reset_pose(sink),
        }
    }

    fn play_tokens(&self, player: &mut Player, tokens: &[String]) {
        let tokens: Vec<&str> = tokens
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            warn!("play request with no usable tokens; state unchanged");
            return;
        }
        player.set_sequence(self.builder.build(tokens));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::{ClipMap, MemorySource};
    use crate::player::{PlaybackState, RecordingSink};
    use crate::schema::PlayerConfig;

    #[test]
    fn test_parse_json_array() {
        assert_eq!(
            parse_tokens(r#"["hello","world"]"#),
            vec!["hello", "world"]
        );
    }

    #[test]
    fn test_parse_json_array_unicode() {
        // Scenario C payload shape.
        assert_eq!(parse_tokens(r#"["안녕","감사"]"#), vec!["안녕", "감사"]);
    }

    #[test]
    fn test_parse_malformed_json_still_extracts_quotes() {
        assert_eq!(parse_tokens(r#"["a", "b" garbage"#), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_array_without_quotes_falls_back_to_delimiters() {
        assert_eq!(parse_tokens("[a|b c]"), vec!["[a", "b", "c]"]);
    }

    #[test]
    fn test_parse_delimited_runs() {
        assert_eq!(parse_tokens("a||b , c  d"), vec!["a", "b", "c", "d"]);
        assert_eq!(parse_tokens("안녕하세요 감사합니다"), vec!["안녕하세요", "감사합니다"]);
    }

    #[test]
    fn test_parse_blank_payload() {
        assert!(parse_tokens("").is_empty());
        assert!(parse_tokens("  |, ").is_empty());
        assert!(parse_tokens(r#"["  "]"#).is_empty());
    }

    fn fixture() -> (ClipMap, MemorySource, PlayerConfig) {
        let mut source = MemorySource::new();
        source.insert_clip("안녕_normalized.csv", "1,2,3\n4,5,6\n");
        source.insert_clip("감사_normalized.csv", "7,8,9\n");
        (
            ClipMap::empty(),
            source,
            PlayerConfig {
                inter_token_hold_seconds: 0.0,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_play_tokens_json_auto_starts() {
        // Scenario C: build from the JSON payload and begin playback.
        let (map, source, config) = fixture();
        let mut sink = RecordingSink::new();
        let mut player = Player::new(config.clone(), &sink).unwrap();
        let adapter = Adapter::new(SequenceBuilder::new(&map, &source, &config));

        adapter.dispatch(
            &mut player,
            &mut sink,
            Command::PlayTokensJson(r#"["안녕","감사"]"#.to_string()),
        );

        assert_eq!(player.state(), PlaybackState::Playing);
        assert_eq!(player.cursor(), 0);
        assert_eq!(player.sequence_len(), Some(3));
    }

    #[test]
    fn test_empty_payload_leaves_state_untouched() {
        let (map, source, config) = fixture();
        let mut sink = RecordingSink::new();
        let mut player = Player::new(config.clone(), &sink).unwrap();
        let adapter = Adapter::new(SequenceBuilder::new(&map, &source, &config));

        adapter.dispatch(
            &mut player,
            &mut sink,
            Command::PlayTokens(vec!["안녕".to_string()]),
        );
        assert_eq!(player.state(), PlaybackState::Playing);

        // A payload with no usable tokens does not supersede anything.
        adapter.dispatch(
            &mut player,
            &mut sink,
            Command::PlayTokensJson("  | ,  ".to_string()),
        );
        assert_eq!(player.state(), PlaybackState::Playing);
        assert_eq!(player.sequence_len(), Some(2));
    }

    #[test]
    fn test_pause_and_play_commands() {
        let (map, source, config) = fixture();
        let mut sink = RecordingSink::new();
        let mut player = Player::new(config.clone(), &sink).unwrap();
        let adapter = Adapter::new(SequenceBuilder::new(&map, &source, &config));

        adapter.dispatch(
            &mut player,
            &mut sink,
            Command::PlayTokens(vec!["감사".to_string()]),
        );
        adapter.dispatch(&mut player, &mut sink, Command::Pause);
        assert_eq!(player.state(), PlaybackState::Idle);

        adapter.dispatch(&mut player, &mut sink, Command::Play);
        assert_eq!(player.state(), PlaybackState::Playing);
        assert_eq!(player.cursor(), 0);
    }

    #[test]
    fn test_reset_pose_command() {
        let (map, source, config) = fixture();
        let mut sink = RecordingSink::new();
        let mut player = Player::new(config.clone(), &sink).unwrap();
        let adapter = Adapter::new(SequenceBuilder::new(&map, &source, &config));

        adapter.dispatch(
            &mut player,
            &mut sink,
            Command::PlayTokens(vec!["안녕".to_string()]),
        );
        adapter.dispatch(&mut player, &mut sink, Command::ResetPose);
        assert_eq!(player.state(), PlaybackState::Idle);
        assert_eq!(player.sequence_len(), None);
    }
}

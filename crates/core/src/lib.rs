//! # Dubbing Core
//!
//! Turns a tabular dubbing script into a per-shot breakdown.
//!
//! The pipeline runs strictly left to right, each stage a pure function of the previous
//! stage's output:
//!
//! ```text
//! rows ─▶ normalise ─▶ tag ─▶ segment ─▶ group ─▶ (align prompts + match roles) ─▶ records
//! ```
//!
//! - [`normalize`]: strips line breaks and rewrites the legacy `^` marker to `。`
//! - [`tagger`]: flattens rows into a stream of characters tagged with their speaker
//! - [`segment`]: cuts the stream into shots at every `。`
//! - [`group`]: collapses each shot into runs of a single speaker
//! - [`prompts`]: positional lookup of image/video prompt lines per shot
//! - [`roles`]: substring matching of character names against a shot's prompts
//! - [`record`]: final record assembly
//!
//! **No I/O**: reading workbooks, prompt files and writing exports lives in `dubbing-sheets`.

pub mod chunk;
pub mod config;
pub mod constants;
pub mod error;
pub mod group;
pub mod normalize;
pub mod prompts;
pub mod record;
pub mod roles;
pub mod row;
pub mod segment;
pub mod service;
pub mod tagger;

pub use chunk::{chunk_lines, Chunk};
pub use config::ScriptConfig;
pub use error::{ScriptError, ScriptResult};
pub use group::Run;
pub use prompts::{AlignedPrompt, PromptBlock};
pub use record::{ensure_exportable, FinalRecord};
pub use roles::RoleNames;
pub use row::Row;
pub use segment::Shot;
pub use service::{ScriptBreakdown, ScriptService};
pub use tagger::TaggedChar;

pub use dubbing_types::{NonEmptyText, ShotId};

//! QuickRec Session Core
//!
//! The configuration-to-command pipeline: resolve one screen, one audio
//! combination, and one quality preset, then synthesize the `CommandSpec`
//! the executor runs. Everything here is synchronous and pure over
//! already-enumerated data; the interactive surface is reached only
//! through the `Chooser` trait.

pub mod quality;
pub mod select;
pub mod summary;
pub mod synth;

pub use quality::resolve_quality;
pub use select::{resolve_audio, resolve_screen, Chooser};
pub use summary::render_summary;
pub use synth::synthesize;

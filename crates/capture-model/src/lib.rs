//! QuickRec Capture Model
//!
//! The immutable data model resolved once per session:
//! - `Screen`: a capturable display region
//! - `AudioDevice` / `AudioSelection`: audio sources and the closed set of
//!   combinations the session may record
//! - `QualityPreset`: the fixed three-row encoding table
//! - `CommandSpec`: the fully-resolved capture description and its derived
//!   stream plan
//!
//! Nothing here performs I/O; enumeration and execution live in the
//! platform and CLI crates.

pub mod audio;
pub mod command;
pub mod quality;
pub mod screen;

pub use audio::*;
pub use command::*;
pub use quality::*;
pub use screen::*;

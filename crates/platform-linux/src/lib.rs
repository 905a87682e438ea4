//! QuickRec Linux Platform Integration
//!
//! External collaborators the session core stays agnostic to:
//! - **Display enumeration:** connected outputs via `xrandr --query`
//! - **Audio enumeration:** PulseAudio/PipeWire sources via `pactl`,
//!   split into capture and monitor pools
//! - **Capabilities:** tool availability and session checks for `check`
//!
//! All text parsing is pure so it can be tested against captured tool
//! output without the tools installed.

pub mod audio;
pub mod capabilities;
pub mod display;

pub use audio::*;
pub use display::*;

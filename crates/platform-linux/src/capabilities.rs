//! Capability detection for the `check` subcommand.

use std::process::Command;

use crate::display::{detect_display_server, DisplayServer};

/// A system capability QuickRec needs or benefits from.
#[derive(Debug, Clone)]
pub struct Capability {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub required: bool,
    pub fix_instructions: Option<String>,
}

/// Check all capabilities and report status.
pub fn check_capabilities() -> Vec<Capability> {
    vec![
        check_display_server(),
        check_tool("ffmpeg", "Transcoder that performs the capture and encode", true),
        check_tool("xrandr", "Display enumeration", true),
        check_tool("pactl", "Audio source enumeration", false),
    ]
}

fn check_display_server() -> Capability {
    let server = detect_display_server();
    let available = server == DisplayServer::X11;

    Capability {
        name: "X11 session".to_string(),
        description: "x11grab screen capture requires an X11 display".to_string(),
        available,
        required: true,
        fix_instructions: match server {
            DisplayServer::X11 => None,
            DisplayServer::Wayland => Some(
                "Log into an X11 session, or run under XWayland with $DISPLAY set".to_string(),
            ),
            DisplayServer::Unknown => {
                Some("Ensure you are running a graphical desktop session".to_string())
            }
        },
    }
}

fn check_tool(binary: &str, description: &str, required: bool) -> Capability {
    let available = command_exists(binary);

    Capability {
        name: binary.to_string(),
        description: description.to_string(),
        available,
        required,
        fix_instructions: if available {
            None
        } else {
            Some(format!("Install {binary} and ensure it is on PATH"))
        },
    }
}

fn command_exists(binary: &str) -> bool {
    Command::new("sh")
        .arg("-c")
        .arg(format!("command -v {binary} >/dev/null 2>&1"))
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Print a user-friendly capability report.
pub fn print_capability_report(capabilities: &[Capability]) {
    println!("QuickRec System Capabilities:");
    println!("{}", "-".repeat(60));

    for cap in capabilities {
        let status = if cap.available {
            "[OK]"
        } else if cap.required {
            "[MISSING - REQUIRED]"
        } else {
            "[MISSING - OPTIONAL]"
        };

        println!("  {} {}: {}", status, cap.name, cap.description);

        if let Some(ref fix) = cap.fix_instructions {
            println!("    Fix: {fix}");
        }
    }
}

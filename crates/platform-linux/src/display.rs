//! Display/monitor enumeration via xrandr.

use std::process::Command;

use quickrec_capture_model::Screen;
use quickrec_common::error::{QuickrecError, QuickrecResult};

/// Enumerate connected screens.
///
/// May return an empty list; the selection engine decides what that means.
pub fn detect_screens() -> QuickrecResult<Vec<Screen>> {
    tracing::debug!("Enumerating screens via xrandr");

    let output = Command::new("xrandr")
        .arg("--query")
        .output()
        .map_err(|e| QuickrecError::platform(format!("Failed to run xrandr: {e}")))?;

    if !output.status.success() {
        return Err(QuickrecError::platform(format!(
            "xrandr exited with status {}",
            output.status
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let screens = parse_xrandr_query(&stdout);
    tracing::debug!(count = screens.len(), "Screens enumerated");
    Ok(screens)
}

/// Parse `xrandr --query` output into screens.
///
/// Connected outputs look like:
/// `eDP-1 connected primary 1920x1080+0+0 (normal ...) 344mm x 193mm`
/// Disconnected outputs and connected outputs without an active mode are
/// skipped.
pub fn parse_xrandr_query(output: &str) -> Vec<Screen> {
    let mut screens = Vec::new();

    for line in output.lines() {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };
        if tokens.next() != Some("connected") {
            continue;
        }

        let mut primary = false;
        let Some(mut geometry_token) = tokens.next() else {
            continue;
        };
        if geometry_token == "primary" {
            primary = true;
            let Some(next) = tokens.next() else {
                continue;
            };
            geometry_token = next;
        }

        let Some((width, height, offset_x, offset_y)) = parse_geometry(geometry_token) else {
            // Connected but no active mode.
            continue;
        };

        screens.push(Screen {
            name: name.to_string(),
            width,
            height,
            offset_x,
            offset_y,
            primary,
        });
    }

    screens
}

/// Parse a `WxH+X+Y` geometry. Negative offsets appear as `+-N`.
fn parse_geometry(token: &str) -> Option<(u32, u32, i32, i32)> {
    let (size, offsets) = token.split_once('+')?;
    let (width, height) = size.split_once('x')?;
    let (offset_x, offset_y) = offsets.split_once('+')?;

    let width = width.parse::<u32>().ok().filter(|w| *w > 0)?;
    let height = height.parse::<u32>().ok().filter(|h| *h > 0)?;
    let offset_x = offset_x.parse::<i32>().ok()?;
    let offset_y = offset_y.parse::<i32>().ok()?;

    Some((width, height, offset_x, offset_y))
}

/// Detect the current display server.
pub fn detect_display_server() -> DisplayServer {
    if std::env::var("WAYLAND_DISPLAY").is_ok() {
        DisplayServer::Wayland
    } else if std::env::var("DISPLAY").is_ok() {
        DisplayServer::X11
    } else {
        DisplayServer::Unknown
    }
}

/// Display server type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServer {
    Wayland,
    X11,
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    const XRANDR_FIXTURE: &str = "\
Screen 0: minimum 320 x 200, current 4480 x 1440, maximum 16384 x 16384
eDP-1 connected primary 1920x1080+0+360 (normal left inverted right x axis y axis) 344mm x 193mm
   1920x1080     60.01*+  59.97    59.96
   1680x1050     59.95    59.88
HDMI-1 connected 2560x1440+1920+0 (normal left inverted right x axis y axis) 597mm x 336mm
   2560x1440     59.95*+
DP-1 disconnected (normal left inverted right x axis y axis)
DP-2 connected (normal left inverted right x axis y axis)
";

    #[test]
    fn test_parses_connected_outputs_with_modes() {
        let screens = parse_xrandr_query(XRANDR_FIXTURE);
        assert_eq!(screens.len(), 2);

        assert_eq!(screens[0].name, "eDP-1");
        assert!(screens[0].primary);
        assert_eq!(
            (screens[0].width, screens[0].height),
            (1920, 1080)
        );
        assert_eq!((screens[0].offset_x, screens[0].offset_y), (0, 360));

        assert_eq!(screens[1].name, "HDMI-1");
        assert!(!screens[1].primary);
        assert_eq!((screens[1].offset_x, screens[1].offset_y), (1920, 0));
    }

    #[test]
    fn test_skips_disconnected_and_modeless_outputs() {
        let screens = parse_xrandr_query(XRANDR_FIXTURE);
        assert!(!screens.iter().any(|s| s.name == "DP-1"));
        assert!(!screens.iter().any(|s| s.name == "DP-2"));
    }

    #[test]
    fn test_negative_offsets() {
        let geometry = parse_geometry("1366x768+-1+-200").unwrap();
        assert_eq!(geometry, (1366, 768, -1, -200));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(parse_geometry("0x1080+0+0").is_none());
        assert!(parse_geometry("1920x0+0+0").is_none());
    }

    #[test]
    fn test_empty_output_parses_to_empty_list() {
        assert!(parse_xrandr_query("").is_empty());
    }
}

//! Check system capabilities.

use quickrec_platform_linux::capabilities::{check_capabilities, print_capability_report};
use quickrec_platform_linux::display::{detect_display_server, detect_screens, DisplayServer};

pub fn run() -> anyhow::Result<()> {
    println!("QuickRec System Check");
    println!("{}", "=".repeat(50));

    let ds = detect_display_server();
    match ds {
        DisplayServer::X11 => println!("[OK] Display server: X11"),
        DisplayServer::Wayland => println!("[WARN] Display server: Wayland (x11grab unavailable)"),
        _ => println!("[WARN] Display server: Unknown"),
    }

    match detect_screens() {
        Ok(screens) => {
            println!("[OK] Screens detected: {}", screens.len());
            for s in &screens {
                println!(
                    "     {} {} {}",
                    s.name,
                    s.geometry(),
                    if s.primary { "(primary)" } else { "" }
                );
            }
        }
        Err(e) => println!("[WARN] Screen enumeration failed: {e}"),
    }

    let capabilities = check_capabilities();
    println!();
    print_capability_report(&capabilities);

    let all_required_ok = capabilities
        .iter()
        .filter(|c| c.required)
        .all(|c| c.available);

    println!();
    if all_required_ok {
        println!("All required capabilities are available. QuickRec is ready.");
    } else {
        println!("Some required capabilities are missing. See above for fixes.");
    }

    Ok(())
}

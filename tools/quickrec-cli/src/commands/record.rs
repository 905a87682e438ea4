//! The interactive recording flow.
//!
//! Sequential pipeline: enumerate, resolve screen, resolve audio, resolve
//! quality, synthesize, execute. Aborting any resolution step ends the
//! session before a spec exists; partial configurations are never run.

use chrono::Local;

use quickrec_common::config::AppConfig;
use quickrec_common::paths::{ensure_output_dir, session_output_path};
use quickrec_platform_linux::audio::{detect_audio_devices, AudioPools};
use quickrec_platform_linux::display::detect_screens;
use quickrec_session_core::{
    render_summary, resolve_audio, resolve_quality, resolve_screen, synthesize,
};

use crate::chooser::TerminalChooser;
use crate::executor;

pub async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load();
    let mut chooser = TerminalChooser::new();

    let screens = detect_screens()?;
    let pools = match detect_audio_devices() {
        Ok(pools) => pools,
        Err(e) => {
            tracing::warn!("Audio enumeration failed ({e}); continuing without audio devices");
            AudioPools::default()
        }
    };

    let screen = resolve_screen(&mut chooser, &screens)?;
    let audio = resolve_audio(&mut chooser, &pools.capture, &pools.monitor)?;
    let quality = resolve_quality(&mut chooser);

    ensure_output_dir(&config.recordings_dir)?;
    let output_path = session_output_path(
        &config.recordings_dir,
        Local::now(),
        &config.recording.container,
    );

    let spec = synthesize(screen, audio, quality, output_path);

    println!();
    print!("{}", render_summary(&spec));
    println!();
    println!("Press Ctrl+C to stop recording...");
    println!();

    let report = executor::run(&spec).await?;

    println!();
    println!(
        "Recording saved to: {} ({})",
        report.output_path.display(),
        executor::format_size(report.size_bytes)
    );

    Ok(())
}

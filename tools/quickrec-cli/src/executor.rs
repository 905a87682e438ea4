//! CommandSpec execution via ffmpeg.
//!
//! Translates the stream index plan into an x11grab/pulse ffmpeg
//! invocation, runs it until the user stops, and reports the finished
//! file.

use std::path::PathBuf;
use std::process::Stdio;

use quickrec_capture_model::{CommandSpec, InputStream, StreamMap};
use quickrec_common::error::{QuickrecError, QuickrecResult};
use tokio::io::AsyncWriteExt;

/// The finished recording, reported back for the exit summary.
#[derive(Debug, Clone)]
pub struct RecordingReport {
    pub output_path: PathBuf,
    pub size_bytes: u64,
}

/// Translate a spec's stream plan into ffmpeg arguments.
///
/// Input order follows the plan exactly; filter and map clauses reference
/// the plan's indices, so this translation never renumbers anything.
pub fn ffmpeg_args(spec: &CommandSpec, display: &str) -> Vec<String> {
    let plan = spec.stream_plan();
    let mut args = vec![
        "-y".to_string(),
        "-hide_banner".to_string(),
        "-loglevel".to_string(),
        "error".to_string(),
    ];

    for input in &plan.inputs {
        match input {
            InputStream::VideoCapture {
                width,
                height,
                offset_x,
                offset_y,
                fps,
            } => {
                args.push("-f".to_string());
                args.push("x11grab".to_string());
                args.push("-framerate".to_string());
                args.push(fps.to_string());
                args.push("-video_size".to_string());
                args.push(format!("{width}x{height}"));
                args.push("-i".to_string());
                args.push(format!("{display}+{offset_x},{offset_y}"));
            }
            InputStream::AudioCapture { backend_id } => {
                args.push("-f".to_string());
                args.push("pulse".to_string());
                args.push("-i".to_string());
                args.push(backend_id.clone());
            }
        }
    }

    if let Some(filter) = &plan.filter {
        let [a, b] = filter.input_indices;
        args.push("-filter_complex".to_string());
        args.push(format!(
            "[{a}:a][{b}:a]amix=inputs=2:duration=longest:normalize=0[aout]"
        ));
    }

    for map in &plan.maps {
        args.push("-map".to_string());
        match map {
            StreamMap::Video { input } => args.push(format!("{input}:v")),
            StreamMap::AudioInput { input } => args.push(format!("{input}:a")),
            StreamMap::MixOutput => args.push("[aout]".to_string()),
        }
    }

    args.push("-c:v".to_string());
    args.push("libx264".to_string());
    args.push("-preset".to_string());
    args.push(spec.quality.encoder_preset.as_str().to_string());
    args.push("-crf".to_string());
    args.push(spec.quality.crf.to_string());
    args.push("-pix_fmt".to_string());
    args.push("yuv420p".to_string());

    if plan.audio_input_count() > 0 {
        args.push("-c:a".to_string());
        args.push("aac".to_string());
        args.push("-b:a".to_string());
        args.push(format!("{}k", spec.quality.audio_bitrate_kbps));
    }

    args.push("-movflags".to_string());
    args.push("+faststart".to_string());

    args.push(spec.output_path.display().to_string());
    args
}

/// Run the recording until Ctrl+C, then finalize and report.
pub async fn run(spec: &CommandSpec) -> QuickrecResult<RecordingReport> {
    let display = std::env::var("DISPLAY")
        .map_err(|_| QuickrecError::executor("DISPLAY is not set; x11grab needs an X11 session"))?;

    let args = ffmpeg_args(spec, &display);
    tracing::debug!(args = ?args, "Launching ffmpeg");

    let mut child = tokio::process::Command::new("ffmpeg")
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| QuickrecError::executor(format!("Failed to start ffmpeg: {e}")))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| QuickrecError::executor("Failed to open ffmpeg stdin"))?;

    let exited = tokio::select! {
        status = child.wait() => Some(status),
        _ = tokio::signal::ctrl_c() => None,
    };

    let status = match exited {
        Some(status) => {
            status.map_err(|e| QuickrecError::executor(format!("Failed to wait on ffmpeg: {e}")))?
        }
        None => {
            tracing::info!("Stop requested; finalizing recording");
            // 'q' asks ffmpeg to finish the container cleanly.
            stdin.write_all(b"q\n").await.ok();
            drop(stdin);
            child
                .wait()
                .await
                .map_err(|e| QuickrecError::executor(format!("Failed to wait on ffmpeg: {e}")))?
        }
    };

    // An interrupted recording exits non-zero even after a clean finalize;
    // the output file existing is what decides success.
    let metadata = std::fs::metadata(&spec.output_path).map_err(|_| {
        QuickrecError::executor(format!(
            "ffmpeg exited with status {status} and no output was written"
        ))
    })?;

    Ok(RecordingReport {
        output_path: spec.output_path.clone(),
        size_bytes: metadata.len(),
    })
}

/// Human-readable file size for the exit summary.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

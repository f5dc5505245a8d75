//! Helpers shared by the figure builder and the renderer.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::{HonenError, HonenResult};

/// Environment variables that indicate a graphical session on Unix.
const DISPLAY_VARS: [&str; 2] = ["DISPLAY", "WAYLAND_DISPLAY"];

/// Returns true if an interactive display can be reached from this process.
pub fn display_available() -> bool {
    display_available_with(|key| std::env::var_os(key))
}

/// Display detection against an arbitrary environment lookup.
///
/// macOS and Windows always have a display; elsewhere one of
/// `DISPLAY` / `WAYLAND_DISPLAY` must be set and non-empty.
pub fn display_available_with<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<OsString>,
{
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }
    DISPLAY_VARS
        .iter()
        .any(|key| lookup(key).is_some_and(|value| !value.is_empty()))
}

/// Command that opens `path` in the platform's default image viewer.
pub fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Run a viewer launcher to completion.
///
/// `xdg-open`, `open` and `start` hand the file to the viewer and exit, so
/// waiting here only reaps the launcher process.
///
/// # Errors
/// [`HonenError::Io`] if the launcher cannot be started or exits unsuccessfully.
pub fn launch_viewer(mut command: Command) -> HonenResult<()> {
    let status = command.status()?;
    if !status.success() {
        return Err(HonenError::Io(std::io::Error::other(format!(
            "viewer launcher exited with {status}"
        ))));
    }
    Ok(())
}

/// Convert a size in typographic points to pixels at `dpi`.
pub fn pt_to_px(pt: f64, dpi: u32) -> u32 {
    (pt * f64::from(dpi) / 72.0).round().max(1.0) as u32
}

/// Convert a length in inches to pixels at `dpi`.
pub fn inches_to_px(inches: f64, dpi: u32) -> u32 {
    (inches * f64::from(dpi)).round().max(1.0) as u32
}

/// Format a tick value.
///
/// With a precision the value is printed with exactly that many decimals.
/// Without one, integers print bare and other values keep at most four
/// significant decimals with trailing zeros trimmed.
pub fn format_tick(value: f64, precision: Option<usize>) -> String {
    // avoid "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    match precision {
        Some(p) => format!("{value:.p$}"),
        None if value.fract() == 0.0 && value.abs() < 1e15 => format!("{value:.0}"),
        None => {
            let text = format!("{value:.4}");
            let text = text.trim_end_matches('0').trim_end_matches('.');
            if text == "-0" { "0".to_string() } else { text.to_string() }
        }
    }
}

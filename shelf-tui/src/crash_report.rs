use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Capture backtrace as raw instruction pointer addresses.
///
/// Release builds are stripped, so resolving symbols at capture time gives
/// nothing useful. Raw addresses can be symbolicated offline.
fn capture_backtrace() -> String {
    let mut out = String::new();
    let mut frame_no = 0usize;

    backtrace::trace(|frame| {
        let ip = frame.ip() as usize;
        let _ = writeln!(out, "  {frame_no:>3}: 0x{ip:016x}");
        frame_no += 1;
        true
    });

    out
}

fn format_report(message: &str, location: &str, backtrace: &str) -> String {
    let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    let version = env!("CARGO_PKG_VERSION");
    format!(
        "shelf crash report\n==================\nTime: {now}\nVersion: {version}\n\nPanic: {message}\nLocation: {location}\n\nBacktrace:\n{backtrace}",
    )
}

/// Write a crash report to `crash_log` on panic, then run the previous hook.
pub fn install_panic_hook(crash_log: PathBuf) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = (|| -> std::io::Result<()> {
            if let Some(parent) = crash_log.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };

            let location = info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown".to_string());

            let report = format_report(&message, &location, &capture_backtrace());
            std::fs::write(&crash_log, report)?;
            Ok(())
        })();

        default_hook(info);
    }));
}

/// Take the report left by a previous crashed session, if any. The file is removed.
pub fn check_for_crash_report(crash_log: &Path) -> Option<String> {
    if !crash_log.exists() {
        return None;
    }
    let report = std::fs::read_to_string(crash_log).ok()?;
    let _ = std::fs::remove_file(crash_log);
    Some(report)
}

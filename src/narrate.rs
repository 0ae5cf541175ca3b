//! Console narration for the samples.
//!
//! Narration is the visible output of every program, so it goes to stdout.
//! Each line is mirrored as a `tracing` event with target `narration` and
//! the speaker as a field; the subscriber writes to stderr and stays quiet
//! unless `RUST_LOG` asks for more.

use std::cell::RefCell;
use std::fmt::Display;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::config::OutputConfig;

thread_local! {
    static CAPTURED: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

/// Installs the stderr tracing subscriber. Call before loading config so
/// config diagnostics are not lost.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when samples run inside tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Applies output settings. Colour can only be switched off here;
/// otherwise `colored` decides from the terminal and `NO_COLOR`.
pub fn apply_output(output: &OutputConfig) {
    if !output.color {
        colored::control::set_override(false);
    }
}

pub fn say(speaker: &str, message: impl Display) {
    let message = message.to_string();
    tracing::info!(target: "narration", speaker, "{message}");

    let captured = CAPTURED.with(|slot| match slot.borrow_mut().as_mut() {
        Some(lines) => {
            lines.push(format!("{speaker}: {message}"));
            true
        }
        None => false,
    });
    if !captured {
        println!("{}: {}", speaker.cyan().bold(), message);
    }
}

pub fn blank() {
    println!();
}

/// Runs `f` with this thread's narration collected instead of printed.
/// Lines come back uncoloured, as `Speaker: message`.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let previous = CAPTURED.with(|slot| slot.replace(Some(Vec::new())));
    let result = f();
    let lines = CAPTURED.with(|slot| slot.replace(previous)).unwrap_or_default();
    (result, lines)
}

/// Runs `f` under a thread-local subscriber and returns what it logged.
#[cfg(test)]
pub(crate) fn record_tracing<R>(f: impl FnOnce() -> R) -> (R, String) {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let logged = String::from_utf8_lossy(&buf.0.lock().unwrap()).into_owned();
    (result, logged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narration_event_shape() {
        let (_, logged) = record_tracing(|| capture(|| say("Proxy", "access granted")));
        assert!(logged.contains("narration"));
        assert!(logged.contains("speaker=\"Proxy\""));
        assert!(logged.contains("access granted"));
    }

    #[test]
    fn test_capture_collects_lines_in_order() {
        let ((), lines) = capture(|| {
            say("Client", "first");
            say("Proxy", 2);
        });
        assert_eq!(lines, vec!["Client: first", "Proxy: 2"]);
    }

    #[test]
    fn test_nested_capture_restores_outer() {
        let ((), outer) = capture(|| {
            say("A", "outer");
            let ((), inner) = capture(|| say("B", "inner"));
            assert_eq!(inner, vec!["B: inner"]);
            say("A", "again");
        });
        assert_eq!(outer, vec!["A: outer", "A: again"]);
    }

    #[test]
    fn test_color_off_overrides() {
        apply_output(&OutputConfig { color: false });
        assert_eq!("Client".cyan().bold().to_string(), "Client");
    }
}

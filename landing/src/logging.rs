//! Console logging for the browser build.
//!
//! A regular `tracing_subscriber::fmt` subscriber whose writer hands each
//! formatted event to the matching `console.*` method. No timestamps: there is no
//! wall clock on `wasm32-unknown-unknown`.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Install the global subscriber. `filter` uses `EnvFilter` directive syntax;
/// an unparsable filter falls back to `info`.
pub fn init(filter: &str) {
    let env_filter = match EnvFilter::try_new(filter) {
        Ok(env_filter) => env_filter,
        Err(err) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "invalid log filter {filter:?} ({err}), using \"info\""
            )));
            EnvFilter::new("info")
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(err) = installed {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "logger already installed: {err}"
        )));
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and flushes it to the console on drop.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        let message = JsValue::from_str(line.trim_end());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&message),
            Level::WARN => web_sys::console::warn_1(&message),
            Level::INFO => web_sys::console::info_1(&message),
            _ => web_sys::console::debug_1(&message),
        }
    }
}

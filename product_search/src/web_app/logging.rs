// web_app/logging.rs - tracing subscriber setup
//
// Same fmt subscriber shape everywhere. In the browser there is no stdout
// and no system clock, so on wasm32 the formatted lines go to the devtools
// console at their own level and timestamps are left out.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logging(filter: &str) {
    let (env_filter, bad_directive) = match EnvFilter::try_new(filter) {
        Ok(env_filter) => (env_filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e.to_string())),
    };

    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_ansi(false)
        .without_time()
        .with_env_filter(env_filter);

    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    let builder = builder.with_writer(console::ConsoleMakeWriter);

    if builder.try_init().is_err() {
        tracing::debug!("Logging already initialized");
        return;
    }

    if let Some(e) = bad_directive {
        tracing::warn!("Invalid log filter '{}' ({}), using 'info'", filter, e);
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;
    use web_sys::console;

    #[derive(Clone, Copy, Debug, Default)]
    pub struct ConsoleMakeWriter;

    /// Buffers one formatted event and emits it on drop
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl ConsoleWriter {
        fn new(level: Level) -> Self {
            Self {
                level,
                buffer: Vec::with_capacity(128),
            }
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buffer.is_empty() {
                return;
            }
            let text = String::from_utf8_lossy(&self.buffer);
            let line = JsValue::from_str(text.trim_end());
            if self.level == Level::ERROR {
                console::error_1(&line);
            } else if self.level == Level::WARN {
                console::warn_1(&line);
            } else if self.level == Level::INFO {
                console::info_1(&line);
            } else {
                console::debug_1(&line);
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::new(Level::INFO)
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter::new(*meta.level())
        }
    }
}

use std::io::{self, Write};
use std::sync::Mutex;

use tracing_subscriber::fmt::MakeWriter;

static LATEST_LINE: Mutex<Option<String>> = Mutex::new(None);

fn commit_line(line: &str) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }
    let Ok(mut guard) = LATEST_LINE.lock() else { return };
    *guard = Some(line.to_string());
}

/// Most recent log line, shown in the status bar.
pub fn latest_line() -> Option<String> {
    LATEST_LINE.lock().ok()?.clone()
}

/// Installs the global subscriber. Only the last line is kept, in memory,
/// so output cannot scribble over the alternate screen.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(AppLogMakeWriter)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .init();
}

#[derive(Clone, Default)]
pub struct AppLogMakeWriter;

impl<'a> MakeWriter<'a> for AppLogMakeWriter {
    type Writer = AppLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        AppLogWriter { line_buf: String::new() }
    }
}

/// Collects bytes until a full line arrives; the formatter may split one
/// event across several `write()` calls.
pub struct AppLogWriter {
    line_buf: String,
}

impl Write for AppLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.line_buf.push_str(&String::from_utf8_lossy(buf));

        while let Some(pos) = self.line_buf.find('\n') {
            let line = self.line_buf.drain(..=pos).collect::<String>();
            commit_line(&line);
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.line_buf.is_empty() {
            let line = std::mem::take(&mut self.line_buf);
            commit_line(&line);
        }
        Ok(())
    }
}

impl Drop for AppLogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

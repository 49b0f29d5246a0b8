//! Output channels for dispatch.
//!
//! The dispatcher's only boundary is text: one channel for normal output,
//! one for errors. The sink trait keeps the dispatch core unaware of where
//! either channel goes.

/// A sink for the dispatcher's two text channels.
pub trait OutputSink {
    /// Writes one line of normal output.
    fn line(&mut self, text: &str);

    /// Writes one line of error output.
    fn error(&mut self, text: &str);
}

/// Writes normal output to stdout and errors to stderr.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleSink {
    color: bool,
}

impl ConsoleSink {
    /// Creates a console sink with colored error output.
    #[must_use]
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Disables ANSI color on the error channel.
    #[must_use]
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for ConsoleSink {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }

    fn error(&mut self, text: &str) {
        if self.color {
            eprintln!("\x1b[31mError: {text}\x1b[0m");
        } else {
            eprintln!("Error: {text}");
        }
    }
}

/// Buffers both channels in memory.
///
/// Used by tests and transcript capture.
#[derive(Clone, Debug, Default)]
pub struct BufferSink {
    /// Captured normal output, one entry per line.
    pub lines: Vec<String>,
    /// Captured error output, one entry per error.
    pub errors: Vec<String>,
}

impl BufferSink {
    /// Creates an empty buffer sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for BufferSink {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn error(&mut self, text: &str) {
        self.errors.push(text.to_string());
    }
}

/// Discards both channels.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn line(&mut self, _text: &str) {}

    fn error(&mut self, _text: &str) {}
}

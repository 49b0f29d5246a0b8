//! Configuration for the interactive console.

/// Configuration for the interactive console.
///
/// Controls presentation only; dispatch semantics live in the dispatcher.
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    /// Primary prompt.
    pub prompt: String,

    /// Whether to show the welcome banner.
    pub banner: bool,

    /// Whether banner and prompt use ANSI color.
    pub color: bool,

    /// Line-history capacity for interactive editors.
    pub history_size: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            banner: true,
            color: true,
            history_size: 1000,
        }
    }
}

impl ConsoleConfig {
    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to enable/disable the banner.
    #[must_use]
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Builder method to enable/disable ANSI color.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder method to set the history capacity.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }
}

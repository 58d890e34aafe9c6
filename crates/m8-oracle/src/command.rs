//! Parsing of interactive input lines.

/// Export formats for the history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Markdown.
    Markdown,
    /// Plain text.
    Text,
}

impl ExportFormat {
    /// Parse a format name, defaulting to markdown when empty.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" | "" => Some(Self::Markdown),
            "text" | "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything that is not a keyword is a question for the ball.
    Ask(String),
    /// Show the history log.
    History,
    /// Show the counters.
    Stats,
    /// Export the history log.
    Export(ExportFormat),
    /// Show help.
    Help,
    /// Leave the session.
    Quit,
}

impl Command {
    /// Parse a line of input.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let (word, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

        match word.to_lowercase().as_str() {
            "history" if rest.is_empty() => Self::History,
            "stats" if rest.is_empty() => Self::Stats,
            "export" => match ExportFormat::parse(rest) {
                Some(format) => Self::Export(format),
                None => Self::Ask(input.to_string()),
            },
            "help" if rest.is_empty() => Self::Help,
            "quit" | "q" if rest.is_empty() => Self::Quit,
            _ => Self::Ask(input.to_string()),
        }
    }
}

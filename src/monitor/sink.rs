//! Styled text sinks for qualitative samples.

use std::io::{self, Write};

use super::color::{ColorMode, Rgb, KEY, MUTED, VALUE};

/// Semantic style of a text segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    /// Emphasised key, e.g. the question of a problem
    Key,
    /// De-emphasised separator
    Subtle,
    /// Highlighted value, e.g. a score
    Value,
    /// Unstyled
    #[default]
    None,
}

impl TextStyle {
    fn color(self) -> Option<Rgb> {
        match self {
            Self::Key => Some(KEY),
            Self::Subtle => Some(MUTED),
            Self::Value => Some(VALUE),
            Self::None => None,
        }
    }

    fn is_bold(self) -> bool {
        matches!(self, Self::Key | Self::Value)
    }

    /// `text` wrapped in ANSI escapes for this style, plain in mono mode
    pub fn paint(self, text: &str, mode: ColorMode) -> String {
        if mode == ColorMode::Mono {
            return text.to_string();
        }
        let mut params = Vec::with_capacity(2);
        if self.is_bold() {
            params.push("1".to_string());
        }
        params.extend(self.color().and_then(|rgb| mode.foreground(rgb)));
        if params.is_empty() {
            return text.to_string();
        }
        format!("\x1b[{}m{text}\x1b[0m", params.join(";"))
    }
}

/// One styled piece of a log line
pub type Segment = (String, TextStyle);

/// Receiver of styled log lines
pub trait StyledSink {
    /// Write one line made of styled segments
    fn log(&mut self, segments: &[Segment]);
}

/// Render segments as a single line for a given color mode
pub fn render(segments: &[Segment], mode: ColorMode) -> String {
    segments
        .iter()
        .map(|(text, style)| style.paint(text, mode))
        .collect()
}

/// Writes styled lines to stdout
#[derive(Debug, Clone, Copy)]
pub struct TerminalSink {
    mode: ColorMode,
}

impl TerminalSink {
    pub fn new(mode: ColorMode) -> Self {
        Self { mode }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new(ColorMode::detect())
    }
}

impl StyledSink for TerminalSink {
    fn log(&mut self, segments: &[Segment]) {
        let line = render(segments, self.mode);
        let mut out = io::stdout().lock();
        // A closed stdout is not worth failing an evaluation over
        let _ = writeln!(out, "{line}");
    }
}

/// Keeps every logged line in memory
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    lines: Vec<Vec<Segment>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Vec<Segment>] {
        &self.lines
    }

    /// Logged lines with styles stripped
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| render(line, ColorMode::Mono))
            .collect()
    }
}

impl StyledSink for BufferSink {
    fn log(&mut self, segments: &[Segment]) {
        self.lines.push(segments.to_vec());
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl StyledSink for NullSink {
    fn log(&mut self, _segments: &[Segment]) {}
}

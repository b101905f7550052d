//! Styled console output
//!
//! Qualitative samples are logged as lines of [`TextStyle`]d segments. A
//! [`StyledSink`] decides where they go: the terminal (ANSI colors with
//! `NO_COLOR`/`TERM` detection), an in-memory buffer, or nowhere.

pub mod color;
mod sink;

pub use color::ColorMode;
pub use sink::{render, BufferSink, NullSink, Segment, StyledSink, TerminalSink, TextStyle};

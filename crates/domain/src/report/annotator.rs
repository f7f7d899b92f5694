//! Staircase explanations rendered beneath a table.
//!
//! For `N` captions the annotator emits `N` levels. Level `i` (from `N` down
//! to `1`) is a connector line of `i` rails followed by a corner line of
//! `i - 1` rails, the `└>` marker and `captions[i - 1]`. Rails are
//! tab-terminated cells, so when the lines are laid out in the same grid as
//! the table above, each `|` lines up with the start of a column and the last
//! caption hangs from the deepest step.

use std::io::{self, Write};

use super::layout::{self, TabLayout};

pub const CORNER: &str = "└>";
const RAIL: &str = "|\t";

/// Column captions paired with the paragraph printed after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    captions: Vec<String>,
    text: String,
}

impl Explanation {
    pub fn new<I, S>(captions: I, text: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            captions: captions.into_iter().map(Into::into).collect(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn captions(&self) -> &[String] {
        &self.captions
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The paragraph without surrounding newlines, `None` when it is blank.
    #[must_use]
    pub fn paragraph(&self) -> Option<&str> {
        paragraph(&self.text)
    }
}

/// Appends the connector and corner lines for `captions` to `lines`.
pub fn annotate<S: AsRef<str>>(lines: &mut Vec<String>, captions: &[S]) {
    for level in (1..=captions.len()).rev() {
        let caption = captions[level - 1].as_ref();
        lines.push(RAIL.repeat(level));
        lines.push(format!("{}{CORNER} {caption}", RAIL.repeat(level - 1)));
    }
}

fn paragraph(text: &str) -> Option<&str> {
    let text = text.trim_matches('\n');
    (!text.trim().is_empty()).then_some(text)
}

/// Writes the paragraph unindented between blank lines; blank text writes nothing.
///
/// # Errors
/// Returns any error raised by the sink.
pub fn write_explanation_text<W: Write + ?Sized>(out: &mut W, text: &str) -> io::Result<()> {
    match paragraph(text) {
        Some(text) => write!(out, "\n{text}\n\n"),
        None => Ok(()),
    }
}

/// Renders a standalone staircase for `captions` followed by `text`.
///
/// # Errors
/// Returns any error raised by the sink.
pub fn explain<W, S>(out: &mut W, layout: TabLayout, captions: &[S], text: &str) -> io::Result<()>
where
    W: Write + ?Sized,
    S: AsRef<str>,
{
    let mut lines = Vec::new();
    annotate(&mut lines, captions);
    layout::write_lines(out, layout, &lines)?;
    write_explanation_text(out, text)
}

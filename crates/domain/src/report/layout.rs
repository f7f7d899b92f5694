//! Elastic tab stops.
//!
//! Every tab-terminated segment of a line is a cell; the segment after the
//! last tab is trailing text and is never aligned. Consecutive lines that all
//! carry a cell at column `k` form a column block padded to one width, so a
//! header row, data rows and the connector lines written right after them
//! share column widths. The layout itself is done by [`TabWriter`].

use std::io::{self, Write};

use tabwriter::TabWriter;

/// Cell padding parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabLayout {
    /// Smallest width of a cell, padding excluded.
    pub min_width: usize,
    /// Spaces added after the widest cell of a block.
    pub padding: usize,
}

impl Default for TabLayout {
    fn default() -> Self {
        Self {
            min_width: 1,
            padding: 3,
        }
    }
}

impl TabLayout {
    /// Wraps `out` in a tab writer configured with this layout.
    pub fn writer<W: Write>(self, out: W) -> TabWriter<W> {
        TabWriter::new(out)
            .minwidth(self.min_width)
            .padding(self.padding)
    }
}

/// Aligns `lines` as one grid and writes each of them terminated by `\n`.
///
/// # Errors
/// Returns any error raised by the sink.
pub fn write_lines<W, S>(out: &mut W, layout: TabLayout, lines: &[S]) -> io::Result<()>
where
    W: Write + ?Sized,
    S: AsRef<str>,
{
    let mut writer = layout.writer(&mut *out);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(layout: TabLayout, lines: &[&str]) -> String {
        let mut out = Vec::new();
        write_lines(&mut out, layout, lines).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn aligns_cells_to_widest_plus_padding() {
        let out = render(TabLayout::default(), &["a\tbb\tc", "aaaa\tb\tc"]);
        assert_eq!(out, "a      bb   c\naaaa   b    c\n");
    }

    #[test]
    fn trailing_text_is_not_padded() {
        let out = render(TabLayout::default(), &["x\tlong trailing", "yyy\tz"]);
        assert_eq!(out, "x     long trailing\nyyy   z\n");
    }

    #[test]
    fn shorter_line_closes_deeper_blocks() {
        let out = render(TabLayout::default(), &["a\tb\tc", "a\tb", "a\tbbbbbb\tc"]);
        // column 1 of the first and last lines belong to different blocks
        assert_eq!(out, "a   b   c\na   b\na   bbbbbb   c\n");
    }

    #[test]
    fn line_without_tabs_breaks_every_block() {
        let out = render(TabLayout::default(), &["aaaaa\tb", "plain", "c\td"]);
        assert_eq!(out, "aaaaa   b\nplain\nc   d\n");
    }

    #[test]
    fn width_counts_columns_not_bytes() {
        let out = render(TabLayout::default(), &["└>\tx", "ab\ty"]);
        assert_eq!(out, "└>   x\nab   y\n");
    }

    #[test]
    fn honours_custom_layout() {
        let layout = TabLayout {
            min_width: 6,
            padding: 1,
        };
        assert_eq!(render(layout, &["ab\tc"]), "ab     c\n");
    }
}

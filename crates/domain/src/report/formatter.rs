use std::io::{self, Write};

use fileinfo_shared_kernel::{DomainError, DomainResult};

use super::{
    annotator::{self, Explanation},
    columns::ColumnSet,
    layout::{self, TabLayout},
};
use crate::model::PathRecord;

/// A table ready to be laid out: header, one row per record and an optional staircase.
#[derive(Debug, Clone)]
pub struct Table {
    column_set: ColumnSet,
    layout: TabLayout,
    lines: Vec<String>,
    rows: usize,
}

impl Table {
    /// Builds a header row and one row per record, in input order.
    #[must_use]
    pub fn build(records: &[PathRecord], column_set: ColumnSet, layout: TabLayout) -> Self {
        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(column_set.headers().join("\t"));
        for record in records {
            lines.push(column_set.cells(record).join("\t"));
        }
        Self {
            column_set,
            layout,
            lines,
            rows: records.len(),
        }
    }

    /// Number of data rows, the header excluded.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_set.column_count()
    }

    /// Appends the staircase for `explanation` beneath the rows.
    ///
    /// The paragraph is left to the caller.
    ///
    /// # Errors
    /// Fails when the caption count differs from the column count.
    pub fn annotate(&mut self, explanation: &Explanation) -> DomainResult<()> {
        let expected = self.column_count();
        let actual = explanation.captions().len();
        if expected != actual {
            return Err(DomainError::CaptionMismatch { expected, actual });
        }
        annotator::annotate(&mut self.lines, explanation.captions());
        Ok(())
    }

    /// # Errors
    /// Returns any error raised by the sink.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        layout::write_lines(out, self.layout, &self.lines)
    }
}

/// Builds the table for `column_set`, explains it when asked and writes it.
///
/// # Errors
/// Fails on a caption/column mismatch or when the sink fails.
pub fn write_table<W: Write + ?Sized>(
    out: &mut W,
    records: &[PathRecord],
    column_set: ColumnSet,
    explanation: Option<&Explanation>,
    layout: TabLayout,
) -> fileinfo_shared_kernel::Result<()> {
    let mut table = Table::build(records, column_set, layout);
    if let Some(explanation) = explanation {
        table.annotate(explanation)?;
    }
    table.write_to(out)?;
    if let Some(explanation) = explanation {
        annotator::write_explanation_text(out, explanation.text())?;
    }
    Ok(())
}

use std::{io::Write, path::PathBuf};

use fileinfo_domain::{
    ColumnSet, Explanation, OutputFormat, OutputMode, PathRecord, TabLayout, Table,
    report::write_json,
};
use fileinfo_ports::{
    logging::Logger,
    metadata::{Lookup, MetadataSource},
};
use fileinfo_shared_kernel::{ApplicationError, Result};

use crate::dto::ListInfoOutput;

pub struct ListInfo<'a> {
    source: &'a dyn MetadataSource,
    logger: &'a dyn Logger,
    mode: OutputMode,
    layout: TabLayout,
}

impl<'a> ListInfo<'a> {
    pub fn new(source: &'a dyn MetadataSource, logger: &'a dyn Logger) -> Self {
        Self {
            source,
            logger,
            mode: OutputMode::default(),
            layout: TabLayout::default(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: TabLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Resolves every path, then writes the report for all of them.
    ///
    /// Nothing is written unless every path resolved.
    ///
    /// # Errors
    /// `NoPaths` for an empty list, `MissingPaths` naming every path that does
    /// not exist, the first metadata failure, or a failure of `out`.
    pub fn run(
        &self,
        paths: &[PathBuf],
        format: OutputFormat,
        out: &mut dyn Write,
    ) -> Result<ListInfoOutput> {
        let records = self.resolve(paths)?;
        match format {
            OutputFormat::Table => self.write_tables(&records, out)?,
            OutputFormat::Json => write_json(out, &records)?,
        }
        out.flush()?;
        Ok(ListInfoOutput { records })
    }

    /// Queries metadata for each path once, keeping input order.
    ///
    /// Every path is checked before anything fails, so missing paths are
    /// reported ahead of a metadata failure on another path.
    ///
    /// # Errors
    /// See [`ListInfo::run`].
    pub fn resolve(&self, paths: &[PathBuf]) -> Result<Vec<PathRecord>> {
        if paths.is_empty() {
            return Err(ApplicationError::NoPaths.into());
        }
        self.logger.debug(format_args!("Listing info of paths: {paths:?}"));

        let mut records = Vec::with_capacity(paths.len());
        let mut missing = Vec::new();
        let mut failure = None;
        for path in paths {
            match self.source.lookup(path) {
                Ok(Lookup::Found(record)) => records.push(record),
                Ok(Lookup::Missing) => {
                    self.logger.debug(format_args!("{} does not exist!", path.display()));
                    missing.push(path.clone());
                }
                Err(err) => {
                    self.logger.debug(format_args!("Failed to query {err}"));
                    if failure.is_none() {
                        failure = Some(err);
                    }
                }
            }
        }

        if !missing.is_empty() {
            return Err(ApplicationError::MissingPaths { paths: missing }.into());
        }
        if let Some(err) = failure {
            return Err(err.into());
        }
        Ok(records)
    }

    fn write_tables(&self, records: &[PathRecord], out: &mut dyn Write) -> Result<()> {
        for (index, column_set) in ColumnSet::ALL.into_iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            for record in records {
                self.logger.debug(format_args!("Listing {column_set} of: {}", record.path()));
            }

            let mut table = Table::build(records, column_set, self.layout);
            let explanation = self.mode.verbose.then(|| column_set.explanation());
            if let Some(explanation) = &explanation {
                self.logger.debug(format_args!("Explaining: {:?}", explanation.captions()));
                table.annotate(explanation)?;
            }
            table.write_to(out)?;

            if let Some(text) = explanation.as_ref().and_then(Explanation::paragraph) {
                // the paragraph must land after the staircase
                out.flush()?;
                self.logger.verbose(format_args!("\n{text}\n"));
            }
        }
        Ok(())
    }
}

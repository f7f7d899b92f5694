use clap::ValueEnum;
use fileinfo_domain::OutputFormat as DomainOutputFormat;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned FILE_INFO and PERMISSIONS tables
    #[default]
    Table,
    /// One JSON array with every record
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => Self::Table,
            OutputFormat::Json => Self::Json,
        }
    }
}

use fileinfo_domain::PathRecord;

/// Records that were resolved and written, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListInfoOutput {
    pub records: Vec<PathRecord>,
}

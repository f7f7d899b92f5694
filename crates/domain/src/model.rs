pub mod path_record;

pub use path_record::PathRecord;

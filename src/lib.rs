//! Helpers shared by the FreeSurfer pipeline tools: splitting subject lists
//! into cluster jobs and checksumming per-subject output files.

pub mod jobarray;
pub mod logging;
pub mod partition;
pub mod split_files;
pub mod subject_files;
pub mod subjects;

pub use partition::{chunk_sizes, partition, Chunk};
pub use subjects::{parse_subjects, read_subjects_file};

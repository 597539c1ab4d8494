//! `stagekit_fs` v1:
//! Flat replication of asset directories into a staging directory.
//!
//! Modules:
//! - `replicate` : directory listing and copy orchestration
//! - `spec`      : options/constants/errors
//! - `report`    : run summary model
//! - `util`      : shared helper functions

pub mod replicate;
pub mod report;
pub mod spec;
mod util;

pub use replicate::replicate;
pub use report::{ReportReplicate, ReportReplicateBuilder};
pub use spec::{DIR_DESTINATION_DEFAULT, DIRS_SOURCE_DEFAULT, ReplicateError, SpecReplicateOptions};

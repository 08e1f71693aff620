//! Entry records for grenrc.
//!
//! This crate provides the records a changelog is rendered from:
//! - [`CommitRecord`]: A commit, as rendered by the `commit` slot
//! - [`Entry`]: An issue or pull request, as rendered by the `issue` slot
//! - [`Release`]: A release boundary with its entries and commits

mod commit;
mod entry;
mod release;

pub use commit::CommitRecord;
pub use entry::{Entry, EntryBuilder, EntryKind};
pub use release::Release;

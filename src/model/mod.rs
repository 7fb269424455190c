//! Plain data types shared by the readers, writers, and filter.

pub mod directive;
pub mod record;
pub mod residue;

//! Implementations of the `teq` subcommands.

pub mod find;
pub mod search;
mod shared;
pub mod show;

//! CLI command handlers.

mod batch;
mod component;
mod eq;
mod norm;

pub use batch::{run_batch, BatchArgs};
pub use component::{run_authority, run_dword, run_path, run_unquote};
pub use eq::run_eq;
pub use norm::run_norm;

#[cfg(test)]
pub(crate) use batch::batch_options;

//! The substitution engine: reassembly, traversal, and orchestration.

mod batch;
mod context;
mod driver;
mod options;
mod report;
mod splice;
mod walker;

pub use batch::merge_batch;
pub use context::MergeContext;
pub use driver::{merge_row, TemplateSource};
pub use options::MergeOptions;
pub use report::{BatchOutput, MergeOutput, MergeStats, RowFailure, Warning};
pub use splice::splice_paragraph;
pub use walker::walk_document;

pub mod commit;
pub mod snapshot;

pub use commit::CommitMetadata;
pub use snapshot::{Ingredient, Snapshot, Step};

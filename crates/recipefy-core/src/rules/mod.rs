pub mod validation;

pub use validation::inspect_snapshot;

pub mod aggregator;
pub mod datasets;
pub mod derive;
pub mod store;
pub mod types;

pub use store::{FileStore, StorageError, Store};
pub use types::{
    ActivityStatus, Category, CategoryFilter, Coordinates, FrequencyRecord, Location,
    NewFrequencyInput,
};

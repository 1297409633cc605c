pub mod collector;
pub mod images;
pub mod store;

pub use collector::{CollectReport, Collector};
pub use images::{sanitize_title, ImageStore};
pub use store::SnapshotStore;

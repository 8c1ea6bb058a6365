pub mod database;
pub mod metrics;

pub use database::{DocumentStore, StoreError};
pub use self::metrics::{get_metrics, init_metrics};

pub mod diagnostics;
pub mod health;
pub mod polaroid;
pub mod root;

pub use diagnostics::test_database;
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use polaroid::{list_public_polaroids, share_polaroid};
pub use root::{hello, root};

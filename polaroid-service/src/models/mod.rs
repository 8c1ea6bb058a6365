pub mod polaroid_share;

pub use polaroid_share::PolaroidShare;

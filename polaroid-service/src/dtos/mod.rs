pub mod diagnostics;
pub mod polaroid;

pub use diagnostics::{DiagnosticsResponse, MessageResponse};
pub use polaroid::{
    identifier_to_string, shape_record, PolaroidListParams, PolaroidListResponse,
    SharePolaroidRequest, SharePolaroidResponse,
};

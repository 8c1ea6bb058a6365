use serde::{Deserialize, Serialize};

/// Prefix every accepted `image_data` value must carry.
pub const IMAGE_DATA_URL_PREFIX: &str = "data:image";

/// A public wall entry. The store assigns `_id` on insert, so the struct
/// carries only the submitted fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PolaroidShare {
    pub image_data: String,
    pub instagram_url: String,
}

impl PolaroidShare {
    pub const COLLECTION: &'static str = "polaroidshare";

    pub fn new(image_data: String, instagram_url: String) -> Self {
        Self {
            image_data,
            instagram_url,
        }
    }
}

pub fn is_image_data_url(value: &str) -> bool {
    value.starts_with(IMAGE_DATA_URL_PREFIX)
}

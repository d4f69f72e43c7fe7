//! OCI-style descriptor for a stored blob

use serde::{Deserialize, Serialize};

/// Metadata triple identifying a blob: media type, digest and size
///
/// Serializes with the camelCase keys used by OCI descriptors. `size` is
/// omitted when the producer did not supply one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub media_type: String,
    pub digest: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl Descriptor {
    pub fn new(media_type: impl Into<String>, digest: impl Into<String>, size: Option<u64>) -> Self {
        Descriptor {
            media_type: media_type.into(),
            digest: digest.into(),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_json_shape() {
        let d = Descriptor::new("text/plain", "sha256:abc", Some(5));
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"mediaType": "text/plain", "digest": "sha256:abc", "size": 5})
        );
    }

    #[test]
    fn test_descriptor_omits_unknown_size() {
        let d = Descriptor::new("text/plain", "sha256:abc", None);
        let json = serde_json::to_string(&d).unwrap();
        assert!(!json.contains("size"));
    }
}

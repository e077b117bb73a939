use serde::{Deserialize, Serialize};

/// Capabilities of the runtime a [`Namespace`](crate::Namespace) describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReflectConfig {
    /// Whether declarations can carry attributes.
    /// When disabled, every handle reports attributes as unsupported.
    #[serde(default = "default_attributes")]
    pub attributes: bool,
}

fn default_attributes() -> bool {
    true
}

impl Default for ReflectConfig {
    fn default() -> Self {
        Self {
            attributes: default_attributes(),
        }
    }
}

impl ReflectConfig {
    /// Config for a runtime that predates attribute support
    pub fn legacy() -> Self {
        Self { attributes: false }
    }

    /// Enable or disable attribute support
    pub fn with_attributes(mut self, attributes: bool) -> Self {
        self.attributes = attributes;
        self
    }
}

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::foundation::core::Image;
use crate::foundation::error::{RasterError, RasterResult};

/// Named images held in memory for the lifetime of a session.
///
/// At most one image per name. [`ImageRegistry::add`] replaces silently; entries are never removed
/// implicitly. Images are shared behind `Arc` so lookups never copy pixel data.
#[derive(Clone, Debug, Default)]
pub struct ImageRegistry {
    images: BTreeMap<String, Arc<Image>>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `name`, failing with [`RasterError::NotFound`] when absent.
    pub fn find(&self, name: &str) -> RasterResult<Arc<Image>> {
        self.images
            .get(name)
            .cloned()
            .ok_or_else(|| RasterError::not_found(name))
    }

    /// Insert `image` under `name`, replacing any previous entry.
    ///
    /// Returns the replaced image, if any.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        image: impl Into<Arc<Image>>,
    ) -> Option<Arc<Image>> {
        let name = name.into();
        let prev = self.images.insert(name.clone(), image.into());
        tracing::debug!(name = %name, replaced = prev.is_some(), "registry insert");
        prev
    }

    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/store.rs"]
mod tests;

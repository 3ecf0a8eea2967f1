//! Manifest provider trait and in-memory implementation.

use super::EntityManifest;

/// Source of parsed entity manifests.
///
/// The builder treats the provider as authoritative: manifests are expected
/// to be well-formed by the time they are handed out.
pub trait ManifestProvider {
    /// Current entity manifests, in declaration order.
    fn entity_manifests(&self) -> &[EntityManifest];
}

/// A provider over a fixed list of manifests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticManifest {
    entities: Vec<EntityManifest>,
}

impl StaticManifest {
    /// Create a provider from a list of manifests.
    pub fn new(entities: Vec<EntityManifest>) -> Self {
        Self { entities }
    }

    /// Add an entity manifest.
    pub fn with_entity(mut self, entity: EntityManifest) -> Self {
        self.entities.push(entity);
        self
    }
}

impl ManifestProvider for StaticManifest {
    fn entity_manifests(&self) -> &[EntityManifest] {
        &self.entities
    }
}

impl<P: ManifestProvider + ?Sized> ManifestProvider for &P {
    fn entity_manifests(&self) -> &[EntityManifest] {
        (**self).entity_manifests()
    }
}

impl<P: ManifestProvider + ?Sized> ManifestProvider for Box<P> {
    fn entity_manifests(&self) -> &[EntityManifest] {
        (**self).entity_manifests()
    }
}

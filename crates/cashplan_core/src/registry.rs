//! Plugin registry
//!
//! Holds one [`EntityPlugin`] per entity kind and produces the
//! dependency-sorted order the simulator uses for end-of-month processing.
//! Dependencies must be registered before their dependents, which forces
//! callers to register in dependency order (assets before the kinds that
//! reference assets).

use rustc_hash::FxHashMap;

use crate::error::RegistryError;
use crate::model::EntityKind;
use crate::plugin::EntityPlugin;

#[derive(Clone, Copy, PartialEq, Eq)]
enum VisitMark {
    Visiting,
    Done,
}

/// Registry of entity-kind plugins, built once per projection run (or per
/// process) and read-only while a run executes
#[derive(Debug, Default)]
pub struct PluginRegistry {
    // Registration order; at most one plugin per kind.
    plugins: Vec<Box<dyn EntityPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin for its kind.
    ///
    /// Fails if any declared dependency kind has no plugin yet.
    /// Re-registering an existing kind overwrites the previous plugin with
    /// a warning rather than an error.
    pub fn register(&mut self, plugin: Box<dyn EntityPlugin>) -> Result<(), RegistryError> {
        let kind = plugin.kind();
        if let Some(&missing) = plugin
            .dependencies()
            .iter()
            .find(|dep| !self.contains(**dep))
        {
            return Err(RegistryError::MissingDependency { kind, missing });
        }

        match self.plugins.iter_mut().find(|p| p.kind() == kind) {
            Some(slot) => {
                tracing::warn!(%kind, "overwriting previously registered plugin");
                *slot = plugin;
            }
            None => self.plugins.push(plugin),
        }
        Ok(())
    }

    /// Returns whether a plugin was actually removed.
    pub fn unregister(&mut self, kind: EntityKind) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|p| p.kind() != kind);
        self.plugins.len() != before
    }

    pub fn get(&self, kind: EntityKind) -> Option<&dyn EntityPlugin> {
        self.plugins
            .iter()
            .find(|p| p.kind() == kind)
            .map(|p| p.as_ref())
    }

    pub fn contains(&self, kind: EntityKind) -> bool {
        self.plugins.iter().any(|p| p.kind() == kind)
    }

    /// All plugins in registration order.
    pub fn all(&self) -> Vec<&dyn EntityPlugin> {
        self.plugins.iter().map(|p| p.as_ref()).collect()
    }

    /// All plugins topologically sorted by `dependencies`, depth-first:
    /// every plugin appears after all of its dependencies. The simulator
    /// runs end-of-month passes in this order so dependents see the
    /// already-updated state of their dependencies within the same month.
    pub fn sorted(&self) -> Result<Vec<&dyn EntityPlugin>, RegistryError> {
        let mut order: Vec<&dyn EntityPlugin> = Vec::with_capacity(self.plugins.len());
        let mut marks: FxHashMap<EntityKind, VisitMark> = FxHashMap::default();

        for plugin in &self.plugins {
            self.visit(plugin.kind(), &mut marks, &mut order)?;
        }
        Ok(order)
    }

    fn visit<'a>(
        &'a self,
        kind: EntityKind,
        marks: &mut FxHashMap<EntityKind, VisitMark>,
        order: &mut Vec<&'a dyn EntityPlugin>,
    ) -> Result<(), RegistryError> {
        match marks.get(&kind) {
            Some(VisitMark::Done) => return Ok(()),
            Some(VisitMark::Visiting) => {
                return Err(RegistryError::CircularDependency { kind });
            }
            None => {}
        }

        // Unregistered dependencies cannot contribute an ordering constraint.
        let Some(plugin) = self.get(kind) else {
            return Ok(());
        };

        marks.insert(kind, VisitMark::Visiting);
        for &dep in plugin.dependencies() {
            self.visit(dep, marks, order)?;
        }
        marks.insert(kind, VisitMark::Done);
        order.push(plugin);
        Ok(())
    }
}

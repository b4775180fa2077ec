//! Inheritance linearizer
//!
//! Computes, for every entity, the chain of ancestors from the inheritance
//! root down to the entity itself, rejecting cycles before anything is
//! emitted. Also enforces feature-name uniqueness: always within a single
//! entity, and across the chain when redeclaration is denied. Names are
//! compared by the accessors they produce, so `name` and `Name` clash.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{EntityId, Model};
use crate::domain::error::{CompileError, CompileResult};
use crate::domain::policies::{upper_first, FeatureRedeclaration};
use crate::domain::services::ResolvedModel;

/// Ancestor chains for every entity of a resolved model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linearization {
    /// Indexed by entity; each chain runs root-to-self and ends with the entity
    chains: Vec<Vec<EntityId>>,
}

impl Linearization {
    /// Root-to-self chain (always non-empty)
    pub fn chain(&self, id: EntityId) -> &[EntityId] {
        &self.chains[id.index()]
    }

    /// Ancestors only, root first, excluding the entity itself
    pub fn ancestors(&self, id: EntityId) -> &[EntityId] {
        let chain = self.chain(id);
        &chain[..chain.len() - 1]
    }

    /// The extends target
    pub fn direct_super(&self, id: EntityId) -> Option<EntityId> {
        self.ancestors(id).last().copied()
    }

    pub fn depth(&self, id: EntityId) -> usize {
        self.chain(id).len() - 1
    }
}

#[derive(Debug, Clone, Default)]
pub struct Linearizer {
    redeclaration: FeatureRedeclaration,
}

impl Linearizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_redeclaration(mut self, redeclaration: FeatureRedeclaration) -> Self {
        self.redeclaration = redeclaration;
        self
    }

    /// Build every chain, then check feature names
    ///
    /// Cycles are reported first (in entity declaration order), so a model
    /// with both a cycle and a duplicate feature fails on the cycle.
    pub fn linearize(&self, resolved: &ResolvedModel<'_>) -> CompileResult<Linearization> {
        let chains = resolved
            .entities()
            .iter()
            .map(|entity| walk_chain(resolved, entity.id))
            .collect::<CompileResult<Vec<_>>>()?;

        let linearization = Linearization { chains };

        let model = resolved.model();
        for (id, _) in model.entities() {
            self.check_features(model, &linearization, id)?;
        }

        Ok(linearization)
    }

    fn check_features(
        &self,
        model: &Model,
        linearization: &Linearization,
        id: EntityId,
    ) -> CompileResult<()> {
        let entity = model.entity(id);

        let mut own = HashSet::new();
        for feature in entity.features() {
            if !own.insert(accessor_key(feature.name())) {
                return Err(CompileError::DuplicateFeature {
                    entity: entity.qualified_name(),
                    feature: feature.name().to_string(),
                    ancestor: None,
                });
            }
        }

        if self.redeclaration == FeatureRedeclaration::Allow {
            return Ok(());
        }

        // Nearest ancestor wins when several declare the same name.
        let mut inherited: HashMap<String, EntityId> = HashMap::new();
        for &ancestor in linearization.ancestors(id) {
            for feature in model.entity(ancestor).features() {
                inherited.insert(accessor_key(feature.name()), ancestor);
            }
        }

        for feature in entity.features() {
            if let Some(&ancestor) = inherited.get(&accessor_key(feature.name())) {
                return Err(CompileError::DuplicateFeature {
                    entity: entity.qualified_name(),
                    feature: feature.name().to_string(),
                    ancestor: Some(model.entity(ancestor).qualified_name()),
                });
            }
        }

        Ok(())
    }
}

/// Features with the same key would get the same getter and setter
fn accessor_key(feature: &str) -> String {
    upper_first(feature)
}

/// Follow superentity edges from `start`, tracking the entities seen on this walk
fn walk_chain(resolved: &ResolvedModel<'_>, start: EntityId) -> CompileResult<Vec<EntityId>> {
    let mut chain = vec![start];
    let mut visited = HashSet::from([start]);
    let mut current = start;

    while let Some(parent) = resolved.entity(current).super_entity {
        if !visited.insert(parent) {
            let model = resolved.model();
            // `chain` is self-to-root here; report the loop starting at the repeat.
            let loop_start = chain.iter().position(|&id| id == parent).unwrap_or(0);
            let cycle = chain[loop_start..]
                .iter()
                .chain(std::iter::once(&parent))
                .map(|&id| model.entity(id).qualified_name())
                .collect();
            return Err(CompileError::InheritanceCycle { chain: cycle });
        }
        chain.push(parent);
        current = parent;
    }

    chain.reverse();
    Ok(chain)
}

//! Action registration and dispatch.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    ActionReport, ActionTarget, AssetAction, AssetRef, CurveStore, GenerateCurvesAction,
    SourceProvider,
};
use crate::error::ActionError;

/// What a host needs to render one menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: String,
    pub label: String,
    pub tooltip: String,
}

/// Ordered set of registered actions.
#[derive(Default)]
pub struct ActionRegistry {
    actions: Vec<Box<dyn AssetAction>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `action`, replacing any action with the same id.
    pub fn register(&mut self, action: Box<dyn AssetAction>) {
        self.unregister(action.id());
        debug!(id = action.id(), "registered action");
        self.actions.push(action);
    }

    /// Remove the action with `id`. Returns whether one was removed.
    pub fn unregister(&mut self, id: &str) -> bool {
        let before = self.actions.len();
        self.actions.retain(|a| a.id() != id);
        before != self.actions.len()
    }

    pub fn get(&self, id: &str) -> Option<&dyn AssetAction> {
        self.actions.iter().find(|a| a.id() == id).map(|a| a.as_ref())
    }

    /// Actions offered for `selection`, in registration order.
    pub fn actions_for(&self, selection: &[AssetRef]) -> Vec<&dyn AssetAction> {
        self.actions
            .iter()
            .filter(|a| a.applies_to(selection))
            .map(|a| a.as_ref())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Owns the registry together with the host collaborators actions run against.
pub struct ActionContext<P, S> {
    registry: ActionRegistry,
    sources: P,
    store: S,
}

impl<P: SourceProvider, S: CurveStore> ActionContext<P, S> {
    /// Context with an empty registry.
    pub fn new(sources: P, store: S) -> Self {
        Self {
            registry: ActionRegistry::new(),
            sources,
            store,
        }
    }

    /// Context with the built-in ramp conversion action registered.
    pub fn with_default_actions(sources: P, store: S) -> Self {
        let mut ctx = Self::new(sources, store);
        ctx.registry.register(Box::new(GenerateCurvesAction::new()));
        ctx
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ActionRegistry {
        &mut self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Menu entries for `selection`. Empty when nothing applies.
    pub fn menu_for(&self, selection: &[AssetRef]) -> Vec<MenuEntry> {
        self.registry
            .actions_for(selection)
            .into_iter()
            .map(|a| MenuEntry {
                id: a.id().to_string(),
                label: a.label().to_string(),
                tooltip: a.tooltip().to_string(),
            })
            .collect()
    }

    /// Run the action `id` over `selection`.
    pub fn invoke(&mut self, id: &str, selection: &[AssetRef]) -> Result<ActionReport, ActionError> {
        let action = self
            .registry
            .get(id)
            .ok_or_else(|| ActionError::UnknownAction(id.to_string()))?;
        if !action.applies_to(selection) {
            return Err(ActionError::NotApplicable(action.id()));
        }

        let mut target = ActionTarget {
            sources: &mut self.sources,
            store: &mut self.store,
        };
        action.execute(&mut target, selection)
    }

    /// Release the collaborators.
    pub fn into_parts(self) -> (P, S) {
        (self.sources, self.store)
    }
}

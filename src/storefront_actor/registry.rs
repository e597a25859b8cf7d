use std::collections::HashMap;

use tracing::trace;

use crate::display::{Binding, ControlId, Region, UiAction};

/// Control bindings grouped by the region that rendered them.
///
/// Replacing a region swaps its whole binding set in one step, so controls
/// from a previous render never stay reachable.
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    regions: HashMap<Region, HashMap<ControlId, UiAction>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, region: Region, binding: Binding) {
        self.regions
            .entry(region)
            .or_default()
            .insert(binding.control, binding.action);
    }

    pub fn replace_region(&mut self, region: Region, bindings: Vec<Binding>) {
        let fresh: HashMap<ControlId, UiAction> = bindings
            .into_iter()
            .map(|binding| (binding.control, binding.action))
            .collect();
        trace!(?region, bindings = fresh.len(), "Region bindings replaced");
        self.regions.insert(region, fresh);
    }

    pub fn lookup(&self, control: &ControlId) -> Option<UiAction> {
        self.regions
            .values()
            .find_map(|bindings| bindings.get(control).copied())
    }

    pub fn len(&self) -> usize {
        self.regions.values().map(HashMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductId;

    #[test]
    fn test_replace_drops_stale_bindings() {
        let mut registry = HandlerRegistry::new();
        registry.register(Region::Static, Binding::new("cart-link", UiAction::OpenCart));
        registry.replace_region(
            Region::CartItems,
            vec![
                Binding::new("row-0", UiAction::RemoveFromCart(ProductId(1))),
                Binding::new("row-1", UiAction::RemoveFromCart(ProductId(2))),
            ],
        );
        assert_eq!(registry.len(), 3);

        registry.replace_region(
            Region::CartItems,
            vec![Binding::new("row-0", UiAction::RemoveFromCart(ProductId(2)))],
        );
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup(&"row-1".into()), None);
        assert_eq!(
            registry.lookup(&"row-0".into()),
            Some(UiAction::RemoveFromCart(ProductId(2)))
        );
        assert_eq!(registry.lookup(&"cart-link".into()), Some(UiAction::OpenCart));
    }

    #[test]
    fn test_unknown_control() {
        let registry = HandlerRegistry::new();
        assert_eq!(registry.lookup(&"nothing".into()), None);
    }
}

use bevy::prelude::Component;
use fixedbitset::FixedBitSet;

/// Sorting layers a light applies to, by layer index.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct SortingLayerMask {
    layers: FixedBitSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortingLayerSummary {
    None,
    All,
    Single(usize),
    Mixed,
}

impl SortingLayerMask {
    pub fn from_layers(layers: impl IntoIterator<Item = usize>) -> Self {
        let mut mask = Self::default();
        for layer in layers {
            mask.insert(layer);
        }
        mask
    }

    pub fn insert(&mut self, layer: usize) {
        self.layers.grow(layer + 1);
        self.layers.insert(layer);
    }

    /// Adds the layer if absent, removes it otherwise. Returns whether the
    /// layer is now part of the mask.
    pub fn toggle(&mut self, layer: usize) -> bool {
        self.layers.grow(layer + 1);
        self.layers.toggle(layer);
        self.layers.contains(layer)
    }

    pub fn contains(&self, layer: usize) -> bool {
        self.layers.contains(layer)
    }

    pub fn len(&self) -> usize {
        self.layers.count_ones(..)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn layers(&self) -> impl Iterator<Item = usize> + '_ {
        self.layers.ones()
    }

    /// Label for a layer picker over `total` known layers. A single layer
    /// wins over "all", and "all" over "none", so an empty mask over an
    /// empty layer list reads as all.
    pub fn summary(&self, total: usize) -> SortingLayerSummary {
        let known = || self.layers().filter(move |layer| *layer < total);
        match known().count() {
            1 => known()
                .next()
                .map_or(SortingLayerSummary::None, SortingLayerSummary::Single),
            n if n == total => SortingLayerSummary::All,
            0 => SortingLayerSummary::None,
            _ => SortingLayerSummary::Mixed,
        }
    }
}

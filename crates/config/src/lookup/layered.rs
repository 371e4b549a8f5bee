//! Ordered chain of lookups.

use std::fmt;

use super::KeyValueLookup;

/// Chains lookups in precedence order: the first layer holding a non-empty
/// value for a key wins.
///
/// Blank values do not shadow lower layers, matching how an empty
/// environment variable never overrides a value from another source.
#[derive(Default)]
pub struct LayeredLookup {
    layers: Vec<Box<dyn KeyValueLookup>>,
}

impl LayeredLookup {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer with lower precedence than every existing layer.
    pub fn with_layer(mut self, layer: impl KeyValueLookup + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    /// Names of the layers, highest precedence first.
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.source_name()).collect()
    }
}

impl fmt::Debug for LayeredLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayeredLookup")
            .field("layers", &self.layer_names())
            .finish()
    }
}

impl KeyValueLookup for LayeredLookup {
    fn get(&self, key: &str) -> Option<String> {
        self.layers
            .iter()
            .filter_map(|layer| layer.get(key))
            .find(|value| !value.is_empty())
    }

    fn source_name(&self) -> &str {
        "layered"
    }
}

//! Board layers and the layer name table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::{BoardError, BoardResult};

/// Board layer identifiers.
///
/// | Purpose | Layer |
/// |---------|-------|
/// | Copper | `F.Cu` / `B.Cu` |
/// | Silkscreen | `F.SilkS` / `B.SilkS` |
/// | Solder mask | `F.Mask` / `B.Mask` |
/// | Board outline | `Edge.Cuts` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Layer {
    /// Front copper layer.
    #[default]
    #[serde(rename = "F.Cu")]
    FrontCopper,
    /// Back copper layer.
    #[serde(rename = "B.Cu")]
    BackCopper,
    /// Front silkscreen.
    #[serde(rename = "F.SilkS")]
    FrontSilkscreen,
    /// Back silkscreen.
    #[serde(rename = "B.SilkS")]
    BackSilkscreen,
    /// Front solder mask.
    #[serde(rename = "F.Mask")]
    FrontMask,
    /// Back solder mask.
    #[serde(rename = "B.Mask")]
    BackMask,
    /// Board outline.
    #[serde(rename = "Edge.Cuts")]
    EdgeCuts,
}

impl Layer {
    /// Every layer a board has, in id order.
    pub const ALL: [Self; 7] = [
        Self::FrontCopper,
        Self::BackCopper,
        Self::FrontSilkscreen,
        Self::BackSilkscreen,
        Self::FrontMask,
        Self::BackMask,
        Self::EdgeCuts,
    ];

    /// Returns the layer name string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FrontCopper => "F.Cu",
            Self::BackCopper => "B.Cu",
            Self::FrontSilkscreen => "F.SilkS",
            Self::BackSilkscreen => "B.SilkS",
            Self::FrontMask => "F.Mask",
            Self::BackMask => "B.Mask",
            Self::EdgeCuts => "Edge.Cuts",
        }
    }

    /// Returns true for copper layers.
    #[must_use]
    pub const fn is_copper(&self) -> bool {
        matches!(self, Self::FrontCopper | Self::BackCopper)
    }
}

/// Mapping from layer name to numeric layer id.
///
/// Built once by enumerating the board's fixed layer set; read-only afterwards.
#[derive(Debug, Clone)]
pub struct LayerTable {
    ids: IndexMap<&'static str, usize>,
}

impl LayerTable {
    /// Enumerates the board layers into a name table.
    #[must_use]
    pub fn build() -> Self {
        let ids = Layer::ALL
            .iter()
            .enumerate()
            .map(|(id, layer)| (layer.as_str(), id))
            .collect();
        Self { ids }
    }

    /// Looks up a layer id by name.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Resolves a layer name to its layer.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownLayer`] if the name is not in the table.
    pub fn resolve(&self, name: &str) -> BoardResult<Layer> {
        self.id(name)
            .map(|id| Layer::ALL[id])
            .ok_or_else(|| BoardError::unknown_layer(name))
    }

    /// Number of layers in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the table has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for LayerTable {
    fn default() -> Self {
        Self::build()
    }
}

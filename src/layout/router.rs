//! Sequential pad-to-pad router.
//!
//! Each placed component is wired to the one placed before it: for every
//! entry `from → to` of the [`PadMap`], pad `from` of the previous component
//! is connected to pad `to` of the current one. Nets that already carry a
//! track are left alone, so re-running the router adds nothing.

use indexmap::IndexMap;
use tracing::{debug, info};

use super::resolver::{has_existing_trace, resolve_pads};
use super::trace::TraceCreator;
use crate::board::{Board, Component};
use crate::error::{LayoutError, LayoutResult};

/// Ordered mapping from a pad on the previous component to a pad on the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadMap {
    pairs: Vec<(String, String)>,
}

impl PadMap {
    /// Builds a map from `(previous pad, current pad)` pairs.
    #[must_use]
    pub fn new<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        }
    }

    /// Builds a map from the configuration's ordered pad map.
    #[must_use]
    pub fn from_config(map: &IndexMap<String, String>) -> Self {
        Self::new(map.iter().map(|(from, to)| (from.as_str(), to.as_str())))
    }

    /// Pad on the current component that `from` connects to.
    #[must_use]
    pub fn target(&self, from: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(f, _)| f == from)
            .map(|(_, to)| to.as_str())
    }

    /// Iterates the `(from, to)` pairs in order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(f, t)| (f.as_str(), t.as_str()))
    }

    /// Number of pad pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the map has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Checks that every mapped pad exists on every listed component.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MissingPad`] for the first absent pad, or a
    /// board error if a component is missing.
    pub fn validate<'a>(
        &self,
        board: &Board,
        references: impl IntoIterator<Item = &'a str>,
    ) -> LayoutResult<()> {
        for reference in references {
            let component = board.component(reference)?;
            for (from, to) in self.pairs() {
                for name in [from, to] {
                    require_pad(component, name)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for PadMap {
    /// Clock out → clock in, data out → data in.
    fn default() -> Self {
        Self::new([("2", "5"), ("3", "4")])
    }
}

fn require_pad(component: &Component, name: &str) -> LayoutResult<()> {
    if component.pad(name).is_some() {
        Ok(())
    } else {
        Err(LayoutError::MissingPad {
            reference: component.reference.clone(),
            pad: name.to_string(),
        })
    }
}

/// Routes each placed component to its predecessor.
#[derive(Debug, Clone)]
pub struct SequentialRouter {
    pad_map: PadMap,
    previous: Option<String>,
}

impl SequentialRouter {
    /// Creates a router with no previous placement.
    #[must_use]
    pub const fn new(pad_map: PadMap) -> Self {
        Self {
            pad_map,
            previous: None,
        }
    }

    /// Reference of the last placed component.
    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Connects the previously placed component to `reference`, then makes
    /// `reference` the previous component.
    ///
    /// Returns the number of tracks created.
    ///
    /// # Errors
    ///
    /// Returns an error if either component is missing, a mapped pad is
    /// missing on the current component, or the trace cannot be added.
    pub fn on_placed(
        &mut self,
        board: &mut Board,
        creator: &TraceCreator,
        reference: &str,
    ) -> LayoutResult<usize> {
        let Some(previous) = self.previous.replace(reference.to_string()) else {
            debug!(reference, "First placement, nothing to connect");
            return Ok(0);
        };

        let previous_pads = resolve_pads(board, board.component(&previous)?);
        let current_pads = resolve_pads(board, board.component(reference)?);

        let mut created = 0;
        for pad in &previous_pads {
            let Some(target) = self.pad_map.target(&pad.name) else {
                continue;
            };

            if pad.net.is_unconnected() {
                debug!(reference = %previous, pad = %pad.name, "Skipping unconnected pad");
                continue;
            }
            if has_existing_trace(board, pad.net) {
                info!(
                    reference = %previous,
                    pad = %pad.name,
                    net = pad.net_name.as_deref().unwrap_or_default(),
                    "Skipping pad, already has tracks"
                );
                continue;
            }

            let dest = current_pads
                .iter()
                .find(|p| p.name == target)
                .ok_or_else(|| LayoutError::MissingPad {
                    reference: reference.to_string(),
                    pad: target.to_string(),
                })?;

            info!(
                "Adding track from {previous} pad {} to {reference} pad {}",
                pad.name, dest.name
            );
            creator.create_trace(board, pad.position, dest.position, pad.net)?;
            created += 1;
        }

        Ok(created)
    }
}

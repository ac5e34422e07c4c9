//! Board data model and board file handling.
//!
//! A board owns its components, nets, copper tracks, and a layer table.
//! Boards are stored as JSON documents:
//!
//! ```text
//! {
//!   "version": 1,
//!   "nets":       [ { "code", "name" }, ... ],
//!   "components": [ { "reference", "position", "orientation", "pads": [...] }, ... ],
//!   "tracks":     [ { "id", "start", "end", "width", "layer", "net", "kind" }, ... ]
//! }
//! ```
//!
//! Coordinates are millimetres with Y growing downward. Orientations are
//! tenths of a degree.
//!
//! Saving renames the existing file to `<path>.layoutbak` before the new
//! contents are written, so the previous board always survives a failed write.

pub mod error;
pub mod layers;
pub mod primitives;

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use error::{BoardError, BoardResult};
pub use layers::{Layer, LayerTable};
pub use primitives::{Component, Net, NetCode, Pad, Point, Track, TrackKind};

/// Board file format version written by this crate.
pub const FORMAT_VERSION: u32 = 1;

/// Suffix appended to the board path to form the backup path.
pub const BACKUP_SUFFIX: &str = ".layoutbak";

/// Returns the backup path for a board file.
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// On-disk representation of a board.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BoardFile {
    version: u32,
    #[serde(default)]
    nets: Vec<Net>,
    #[serde(default)]
    components: Vec<Component>,
    #[serde(default)]
    tracks: Vec<Track>,
}

/// An in-memory PCB board.
#[derive(Debug, Clone, Default)]
pub struct Board {
    components: IndexMap<String, Component>,
    nets: IndexMap<NetCode, Net>,
    tracks: Vec<Track>,
    layers: LayerTable,
}

impl Board {
    /// Creates a new empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a board from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid board
    /// document, or is internally inconsistent.
    pub fn load(path: impl AsRef<Path>) -> BoardResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| BoardError::file_read(path, e))?;
        let file: BoardFile =
            serde_json::from_str(&contents).map_err(|e| BoardError::parse(path, e))?;
        let board = Self::from_file(file)?;

        tracing::info!(
            path = %path.display(),
            components = board.components.len(),
            nets = board.nets.len(),
            tracks = board.tracks.len(),
            "Loaded board"
        );

        Ok(board)
    }

    fn from_file(file: BoardFile) -> BoardResult<Self> {
        if file.version != FORMAT_VERSION {
            return Err(BoardError::invalid(format!(
                "unsupported board format version {}",
                file.version
            )));
        }

        let mut board = Self::new();
        for net in file.nets {
            board.add_net(net)?;
        }
        for component in file.components {
            board.add_component(component)?;
        }
        for track in file.tracks {
            board.check_net(track.net, || format!("track {}", track.id))?;
            board.tracks.push(track);
        }
        Ok(board)
    }

    fn to_file(&self) -> BoardFile {
        BoardFile {
            version: FORMAT_VERSION,
            nets: self.nets.values().cloned().collect(),
            components: self.components.values().cloned().collect(),
            tracks: self.tracks.clone(),
        }
    }

    /// Writes the board to a file, replacing any existing contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be serialised or written.
    pub fn write(&self, path: impl AsRef<Path>) -> BoardResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.to_file())
            .map_err(|source| BoardError::Serialize { source })?;
        std::fs::write(path, json).map_err(|e| BoardError::file_write(path, e))?;

        tracing::info!(
            path = %path.display(),
            components = self.components.len(),
            tracks = self.tracks.len(),
            "Wrote board"
        );

        Ok(())
    }

    /// Saves the board, first moving the existing file to its backup path.
    ///
    /// A stale backup is removed before the rename. If the rename fails the
    /// new contents are not written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backup cannot be made or the write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> BoardResult<()> {
        let path = path.as_ref();
        let backup = backup_path(path);

        if path.exists() {
            if backup.exists() {
                std::fs::remove_file(&backup)
                    .map_err(|e| BoardError::backup(path, &backup, e))?;
            }
            std::fs::rename(path, &backup).map_err(|e| BoardError::backup(path, &backup, e))?;
            tracing::debug!(backup = %backup.display(), "Backed up board file");
        }

        self.write(path)
    }

    /// Returns the board's layer table.
    #[must_use]
    pub const fn layers(&self) -> &LayerTable {
        &self.layers
    }

    // ------------------------------------------------------------------
    // Nets
    // ------------------------------------------------------------------

    /// Adds a net.
    ///
    /// # Errors
    ///
    /// Returns an error if the code or name is already in use.
    pub fn add_net(&mut self, net: Net) -> BoardResult<()> {
        if self.nets.contains_key(&net.code) {
            return Err(BoardError::invalid(format!("duplicate net code {}", net.code)));
        }
        if self.net_by_name(&net.name).is_some() {
            return Err(BoardError::invalid(format!("duplicate net name '{}'", net.name)));
        }
        self.nets.insert(net.code, net);
        Ok(())
    }

    /// Looks up a net by code.
    #[must_use]
    pub fn net(&self, code: NetCode) -> Option<&Net> {
        self.nets.get(&code)
    }

    /// Looks up a net by name.
    #[must_use]
    pub fn net_by_name(&self, name: &str) -> Option<&Net> {
        self.nets.values().find(|n| n.name == name)
    }

    /// Iterates nets in insertion order.
    pub fn nets(&self) -> impl Iterator<Item = &Net> {
        self.nets.values()
    }

    fn check_net(&self, code: NetCode, owner: impl FnOnce() -> String) -> BoardResult<()> {
        if code.is_unconnected() || self.nets.contains_key(&code) {
            Ok(())
        } else {
            Err(BoardError::invalid(format!(
                "{} references unknown net {code}",
                owner()
            )))
        }
    }

    // ------------------------------------------------------------------
    // Components
    // ------------------------------------------------------------------

    /// Adds a component.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference is already used, a pad name repeats
    /// within the component, or a pad references an unknown net.
    pub fn add_component(&mut self, component: Component) -> BoardResult<()> {
        if self.components.contains_key(&component.reference) {
            return Err(BoardError::invalid(format!(
                "duplicate component reference '{}'",
                component.reference
            )));
        }

        {
            let mut seen = HashSet::new();
            for pad in &component.pads {
                if !seen.insert(pad.name.as_str()) {
                    return Err(BoardError::invalid(format!(
                        "component '{}' has duplicate pad '{}'",
                        component.reference, pad.name
                    )));
                }
                self.check_net(pad.net, || {
                    format!("pad {}.{}", component.reference, pad.name)
                })?;
            }
        }

        self.components
            .insert(component.reference.clone(), component);
        Ok(())
    }

    /// Looks up a component by reference.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ComponentNotFound`] if the reference is absent.
    pub fn component(&self, reference: &str) -> BoardResult<&Component> {
        self.components
            .get(reference)
            .ok_or_else(|| BoardError::component_not_found(reference))
    }

    /// Looks up a component by reference for modification.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ComponentNotFound`] if the reference is absent.
    pub fn component_mut(&mut self, reference: &str) -> BoardResult<&mut Component> {
        self.components
            .get_mut(reference)
            .ok_or_else(|| BoardError::component_not_found(reference))
    }

    /// Iterates components in board file order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    // ------------------------------------------------------------------
    // Tracks
    // ------------------------------------------------------------------

    /// All track records, including vias.
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Track records assigned to `net`.
    pub fn tracks_in_net(&self, net: NetCode) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(move |t| t.net == net)
    }

    /// Adds a track record.
    ///
    /// # Errors
    ///
    /// Returns an error if the track's net is not on the board.
    pub fn add_track(&mut self, track: Track) -> BoardResult<()> {
        self.check_net(track.net, || format!("track {}", track.id))?;
        self.tracks.push(track);
        Ok(())
    }

    /// Removes a track record by id.
    pub fn remove_track(&mut self, id: Uuid) -> Option<Track> {
        let index = self.tracks.iter().position(|t| t.id == id)?;
        Some(self.tracks.remove(index))
    }

    /// Removes every track record and returns them.
    pub fn take_tracks(&mut self) -> Vec<Track> {
        std::mem::take(&mut self.tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        let mut board = Board::new();
        board.add_net(Net::new(1, "+5V")).unwrap();
        board.add_net(Net::new(2, "GND")).unwrap();
        let mut c = Component::new("D0");
        c.add_pad(Pad::new("1", Point::new(-0.5, 0.0), NetCode(1)));
        c.add_pad(Pad::new("2", Point::new(0.5, 0.0), NetCode(2)));
        board.add_component(c).unwrap();
        board
    }

    #[test]
    fn backup_path_appends_suffix() {
        let path = backup_path(Path::new("dir/triangle.board.json"));
        assert_eq!(path, PathBuf::from("dir/triangle.board.json.layoutbak"));
    }

    #[test]
    fn component_lookup() {
        let board = sample_board();
        assert!(board.component("D0").is_ok());
        assert!(matches!(
            board.component("D1"),
            Err(BoardError::ComponentNotFound { .. })
        ));
    }

    #[test]
    fn net_lookup_by_name() {
        let board = sample_board();
        assert_eq!(board.net_by_name("GND").map(|n| n.code), Some(NetCode(2)));
        assert!(board.net_by_name("VBUS").is_none());
    }

    #[test]
    fn reject_duplicate_reference() {
        let mut board = sample_board();
        assert!(board.add_component(Component::new("D0")).is_err());
    }

    #[test]
    fn reject_duplicate_net_name() {
        let mut board = sample_board();
        assert!(board.add_net(Net::new(3, "+5V")).is_err());
    }

    #[test]
    fn reject_pad_on_unknown_net() {
        let mut board = sample_board();
        let mut c = Component::new("D1");
        c.add_pad(Pad::new("1", Point::default(), NetCode(9)));
        assert!(board.add_component(c).is_err());
    }

    #[test]
    fn tracks_by_net_and_removal() {
        let mut board = sample_board();
        let a = Track::segment(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            0.25,
            Layer::FrontCopper,
            NetCode(1),
        );
        let id = a.id;
        board.add_track(a).unwrap();
        board
            .add_track(Track::via(Point::new(2.0, 2.0), 0.6, 0.3, NetCode(2)))
            .unwrap();

        assert_eq!(board.tracks_in_net(NetCode(1)).count(), 1);
        assert!(board.remove_track(id).is_some());
        assert_eq!(board.tracks_in_net(NetCode(1)).count(), 0);
        assert_eq!(board.take_tracks().len(), 1);
        assert!(board.tracks().is_empty());
    }

    #[test]
    fn reject_unsupported_version() {
        let file = BoardFile {
            version: 7,
            nets: Vec::new(),
            components: Vec::new(),
            tracks: Vec::new(),
        };
        assert!(Board::from_file(file).is_err());
    }
}

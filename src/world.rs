use crate::utils::Vec3;
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const WORLD_HEIGHT: i32 = 256;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("world directory not found: {0}")]
    DirectoryNotFound(PathBuf),
}

/// A region file slot. Chunk data is not loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub position: Vec3,
}

impl Region {
    pub fn new(position: Vec3) -> Self {
        Region { position }
    }
}

#[derive(Debug)]
pub struct World {
    pub name: String,
    base_directory: Option<PathBuf>,
    regions: HashMap<Vec3, Region>,
}

impl World {
    pub fn new(name: impl Into<String>) -> World {
        World {
            name: name.into(),
            base_directory: None,
            regions: HashMap::new(),
        }
    }

    /// Opens the world stored in `base_directory`. The world is named after
    /// the directory.
    pub fn load_world(base_directory: impl AsRef<Path>) -> Result<World, WorldError> {
        let base_directory = base_directory.as_ref();
        if !base_directory.is_dir() {
            return Err(WorldError::DirectoryNotFound(base_directory.to_path_buf()));
        }
        let name = base_directory
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!("loading world {:?} from {}", name, base_directory.display());
        let mut world = World::new(name);
        world.base_directory = Some(base_directory.to_path_buf());
        Ok(world)
    }

    pub fn base_directory(&self) -> Option<&Path> {
        self.base_directory.as_deref()
    }

    pub fn region(&self, position: &Vec3) -> Option<&Region> {
        self.regions.get(position)
    }

    pub fn insert_region(&mut self, position: Vec3, region: Region) -> Option<Region> {
        self.regions.insert(position, region)
    }

    pub fn regions(&self) -> &HashMap<Vec3, Region> {
        &self.regions
    }
}

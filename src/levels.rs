//! Level catalog
//!
//! Levels are numbered from 1 and addressed by number. The embedded source
//! bakes `assets/levels/level{n}.json` into the binary; the directory source
//! reads the same file names from disk for editing without a rebuild.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LevelError, LevelResult};
use crate::sim::level::LevelModel;

/// Anything that can hand out decoded, validated levels
pub trait LevelSource {
    /// Number of levels; valid level numbers are `1..=level_count()`
    fn level_count(&self) -> u32;

    fn load(&self, level: u32) -> LevelResult<LevelModel>;
}

const EMBEDDED_LEVELS: &[&str] = &[
    include_str!("../assets/levels/level1.json"),
    include_str!("../assets/levels/level2.json"),
    include_str!("../assets/levels/level3.json"),
    include_str!("../assets/levels/level4.json"),
    include_str!("../assets/levels/level5.json"),
];

pub fn level_file_name(level: u32) -> String {
    format!("level{level}.json")
}

/// Index into a 1-based slice of level texts
fn lookup<T>(levels: &[T], level: u32) -> Option<&T> {
    let index = level.checked_sub(1)?;
    levels.get(index as usize)
}

/// Levels compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLevels;

impl LevelSource for EmbeddedLevels {
    fn level_count(&self) -> u32 {
        EMBEDDED_LEVELS.len() as u32
    }

    fn load(&self, level: u32) -> LevelResult<LevelModel> {
        let json = lookup(EMBEDDED_LEVELS, level).ok_or(LevelError::NotFound(level))?;
        let model = LevelModel::from_json(level, json)?;
        log::info!("Loaded embedded level {level}");
        Ok(model)
    }
}

/// Levels read from `level{n}.json` files in a directory
#[derive(Debug, Clone)]
pub struct DirLevels {
    dir: PathBuf,
    count: u32,
}

impl DirLevels {
    /// Count consecutive level files starting at `level1.json`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let count = (1..)
            .take_while(|&n| dir.join(level_file_name(n)).is_file())
            .count() as u32;
        log::info!("Found {count} level(s) in {}", dir.display());
        Self { dir, count }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl LevelSource for DirLevels {
    fn level_count(&self) -> u32 {
        self.count
    }

    fn load(&self, level: u32) -> LevelResult<LevelModel> {
        if level == 0 || level > self.count {
            return Err(LevelError::NotFound(level));
        }
        let path = self.dir.join(level_file_name(level));
        let json = fs::read_to_string(&path).map_err(|source| LevelError::Io {
            path: path.clone(),
            source,
        })?;
        let model = LevelModel::from_json(level, &json)?;
        log::info!("Loaded level {level} from {}", path.display());
        Ok(model)
    }
}

/// Levels held as JSON strings in memory (tools and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryLevels {
    levels: Vec<String>,
}

impl MemoryLevels {
    pub fn new(levels: Vec<String>) -> Self {
        Self { levels }
    }
}

impl LevelSource for MemoryLevels {
    fn level_count(&self) -> u32 {
        self.levels.len() as u32
    }

    fn load(&self, level: u32) -> LevelResult<LevelModel> {
        let json = lookup(&self.levels, level).ok_or(LevelError::NotFound(level))?;
        LevelModel::from_json(level, json)
    }
}

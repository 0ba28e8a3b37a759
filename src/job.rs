use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One archiving run: what to pack, where to put it and how hard to compress.
///
/// Built once from the command line and passed down the pipeline.
#[derive(Debug, Clone)]
pub struct Job {
    /// Input files or directories. The first one is the primary input.
    pub inputs: Vec<PathBuf>,
    /// Explicit output path. `None` derives it from the primary input.
    pub output: Option<PathBuf>,
    /// Deflate compression level.
    pub level: Level,
}

/// Supported compression levels.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Level {
    Fastest,
    Faster,
    #[default]
    Default,
    Better,
    Best,
}

impl Level {
    /// Deflate level passed to the archive writer.
    pub fn deflate_level(self) -> i64 {
        match self {
            Level::Fastest => 1,
            Level::Faster => 3,
            Level::Default => 6,
            Level::Better => 8,
            Level::Best => 9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deflate_levels_are_ordered() {
        let levels = [
            Level::Fastest,
            Level::Faster,
            Level::Default,
            Level::Better,
            Level::Best,
        ];
        let values: Vec<i64> = levels.iter().map(|l| l.deflate_level()).collect();
        assert_eq!(values, vec![1, 3, 6, 8, 9]);
        assert_eq!(Level::default(), Level::Default);
    }
}

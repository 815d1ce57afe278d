use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::graph::generate::SamplingStrategy;
use crate::rng::os_random_seed;

pub const DEFAULT_VERTICES: usize = 1000;
pub const DEFAULT_EDGES: usize = 10_000;
pub const DEFAULT_WEIGHT_RANGE: (f64, f64) = (0.0, 1.0);

pub trait Fix<CorrectType> {
    fn to_fixed(&self) -> CorrectType;
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unsupported config file {}; expected a .ron, .yaml or .yml file", .0.display())]
    UnknownFormat(PathBuf),
    #[error("invalid config file {}: {message}", .path.display())]
    InvalidFormat { path: PathBuf, message: String },
    #[error("weight range [{0}, {1}) must be finite, non-negative and non-empty")]
    InvalidWeightRange(f64, f64),
}

/// Generation settings as given in a config file. Missing fields fall back to the defaults,
/// a missing seed is drawn from the OS once the config is fixed.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    pub seed: Option<u64>,
    pub vertices: usize,
    pub edges: usize,
    pub weight_range: (f64, f64),
    pub strategy: SamplingStrategy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            seed: None,
            vertices: DEFAULT_VERTICES,
            edges: DEFAULT_EDGES,
            weight_range: DEFAULT_WEIGHT_RANGE,
            strategy: SamplingStrategy::default(),
        }
    }
}

impl GraphConfig {
    /// Loads a config file, picking the parser from the file extension.
    pub fn load(path: &Path) -> Result<GraphConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let invalid = |message: String| ConfigError::InvalidFormat {
            path: path.to_path_buf(),
            message,
        };

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Self::from_ron(&content).map_err(invalid),
            Some("yaml") | Some("yml") => Self::from_yaml(&content).map_err(invalid),
            _ => Err(ConfigError::UnknownFormat(path.to_path_buf())),
        }
    }

    pub fn from_ron(content: &str) -> Result<GraphConfig, String> {
        ron::de::from_str(content).map_err(|err| err.to_string())
    }

    pub fn from_yaml(content: &str) -> Result<GraphConfig, String> {
        serde_yaml::from_str(content).map_err(|err| err.to_string())
    }
}

impl Fix<GenerationConfig> for GraphConfig {
    fn to_fixed(&self) -> GenerationConfig {
        GenerationConfig {
            seed: self.seed.unwrap_or_else(os_random_seed),
            vertices: self.vertices,
            edges: self.edges,
            weight_range: self.weight_range,
            strategy: self.strategy,
        }
    }
}

/// Fully determined generation settings. The same config always yields the same graph.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub seed: u64,
    pub vertices: usize,
    pub edges: usize,
    pub weight_range: (f64, f64),
    pub strategy: SamplingStrategy,
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = self.weight_range;
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min >= max {
            return Err(ConfigError::InvalidWeightRange(min, max));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_yaml_uses_defaults() {
        let cfg = GraphConfig::from_yaml("{}").unwrap();

        assert_eq!(cfg, GraphConfig::default());
    }

    #[test]
    fn yaml_config_parses() {
        let cfg = GraphConfig::from_yaml(
            "seed: 7\nvertices: 20\nedges: 40\nweight_range: [0.5, 2.0]\nstrategy: enumeration\n",
        )
        .unwrap();

        assert_eq!(
            cfg,
            GraphConfig {
                seed: Some(7),
                vertices: 20,
                edges: 40,
                weight_range: (0.5, 2.0),
                strategy: SamplingStrategy::Enumeration,
            }
        );
    }

    #[test]
    fn ron_config_parses() {
        let cfg =
            GraphConfig::from_ron("(seed: Some(3), vertices: 5, weight_range: (0.0, 0.5))").unwrap();

        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.vertices, 5);
        assert_eq!(cfg.edges, DEFAULT_EDGES);
        assert_eq!(cfg.weight_range, (0.0, 0.5));
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(GraphConfig::from_yaml("vertexes: 10").is_err());
    }

    #[test]
    fn seeded_config_keeps_its_seed() {
        let cfg = GraphConfig {
            seed: Some(99),
            ..GraphConfig::default()
        };

        assert_eq!(cfg.to_fixed().seed, 99);
        assert_eq!(cfg.to_fixed(), cfg.to_fixed());
    }

    #[test]
    fn unseeded_config_gets_a_seed() {
        let fixed = GraphConfig::default().to_fixed();

        assert_eq!(fixed.vertices, DEFAULT_VERTICES);
        assert_eq!(fixed.edges, DEFAULT_EDGES);
    }

    #[test]
    fn invalid_weight_ranges_are_rejected() {
        let base = GraphConfig {
            seed: Some(0),
            ..GraphConfig::default()
        }
        .to_fixed();

        for &range in &[(0.5, 0.5), (1.0, 0.0), (-1.0, 1.0), (0.0, f64::INFINITY)] {
            let cfg = GenerationConfig {
                weight_range: range,
                ..base
            };
            assert!(cfg.validate().is_err(), "{:?} was accepted.", range);
        }
        assert!(base.validate().is_ok());
    }

    #[test]
    fn load_picks_parser_by_extension() {
        let mut yaml = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        write!(yaml, "vertices: 12").unwrap();
        assert_eq!(GraphConfig::load(yaml.path()).unwrap().vertices, 12);

        let mut ron = tempfile::Builder::new().suffix(".ron").tempfile().unwrap();
        write!(ron, "(edges: 30)").unwrap();
        assert_eq!(GraphConfig::load(ron.path()).unwrap().edges, 30);

        let toml = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(matches!(
            GraphConfig::load(toml.path()),
            Err(ConfigError::UnknownFormat(_))
        ));
    }

    #[test]
    fn load_missing_file_errors() {
        let err = GraphConfig::load(Path::new("does/not/exist.yaml")).err();

        assert!(matches!(err, Some(ConfigError::Read { .. })));
    }
}

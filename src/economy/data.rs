//! Economy data loading and the cost/production registry.
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bevy::{log::warn, prelude::Resource};
use serde::Deserialize;

use super::components::{BuildingKind, ResourceCost, ResourceKind};

const ECONOMY_CONFIG_PATH: &str = "config/economy.toml";

/// Compiled-in economy tables, used when the config file is missing or bad.
const DEFAULT_BUILDINGS: [(BuildingKind, Option<ResourceKind>, ResourceCost); 7] = [
    (
        BuildingKind::LumberYard,
        Some(ResourceKind::Wood),
        ResourceCost::new(5, 0, 0, 0, 2),
    ),
    (
        BuildingKind::Quarry,
        Some(ResourceKind::Stone),
        ResourceCost::new(2, 5, 0, 0, 2),
    ),
    (
        BuildingKind::IronMine,
        Some(ResourceKind::Iron),
        ResourceCost::new(2, 3, 0, 0, 2),
    ),
    (
        BuildingKind::GoldMine,
        Some(ResourceKind::Gold),
        ResourceCost::new(3, 0, 0, 5, 2),
    ),
    (
        BuildingKind::Farm,
        Some(ResourceKind::Food),
        ResourceCost::new(2, 2, 0, 0, 0),
    ),
    (BuildingKind::House, None, ResourceCost::new(5, 3, 0, 0, 5)),
    (
        BuildingKind::TownHall,
        None,
        ResourceCost::new(10, 5, 2, 5, 10),
    ),
];

#[derive(Debug, Clone, Deserialize)]
pub struct EconomyConfig {
    pub buildings: Vec<BuildingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildingConfig {
    pub kind: BuildingKind,
    #[serde(default)]
    pub produces: Option<ResourceKind>,
    #[serde(default)]
    pub cost: ResourceCost,
}

/// Static per-building construction costs and daily production yields.
///
/// Validation guarantees every building kind has exactly one entry, so the
/// lookups are total over the closed enum.
#[derive(Resource, Debug, Clone)]
pub struct EconomyRegistry {
    costs: HashMap<BuildingKind, ResourceCost>,
    production: HashMap<BuildingKind, ResourceKind>,
}

impl EconomyRegistry {
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data =
            fs::read_to_string(&path).map_err(|err| format!("unable to read file: {err}"))?;
        let config: EconomyConfig =
            toml::from_str(&data).map_err(|err| format!("invalid economy config: {err}"))?;
        Self::from_config(config)
    }

    fn from_config(config: EconomyConfig) -> Result<Self, String> {
        let mut costs = HashMap::new();
        let mut production = HashMap::new();
        let mut produced_by = HashMap::new();

        for building in config.buildings {
            if costs.insert(building.kind, building.cost).is_some() {
                return Err(format!(
                    "building '{}' is defined more than once",
                    building.kind.label()
                ));
            }

            if let Some(resource) = building.produces {
                if let Some(other) = produced_by.insert(resource, building.kind) {
                    return Err(format!(
                        "both '{}' and '{}' produce {}",
                        other.label(),
                        building.kind.label(),
                        resource.label()
                    ));
                }
                production.insert(building.kind, resource);
            }
        }

        for kind in BuildingKind::ALL {
            if !costs.contains_key(&kind) {
                return Err(format!(
                    "economy config is missing building '{}'",
                    kind.label()
                ));
            }
        }

        Ok(Self { costs, production })
    }

    /// The built-in tables, independent of any config file on disk.
    pub(crate) fn fallback() -> Self {
        let config = EconomyConfig {
            buildings: DEFAULT_BUILDINGS
                .into_iter()
                .map(|(kind, produces, cost)| BuildingConfig {
                    kind,
                    produces,
                    cost,
                })
                .collect(),
        };
        Self::from_config(config).expect("default economy tables should be valid")
    }

    /// Construction cost of `kind`.
    pub fn cost(&self, kind: BuildingKind) -> ResourceCost {
        self.costs.get(&kind).copied().unwrap_or_default()
    }

    /// Resource yielded by one `kind` per day, or `None` for buildings that
    /// produce nothing.
    pub fn production(&self, kind: BuildingKind) -> Option<ResourceKind> {
        self.production.get(&kind).copied()
    }

    /// All (building, produced resource) pairs.
    pub fn producers(&self) -> impl Iterator<Item = (BuildingKind, ResourceKind)> + '_ {
        self.production
            .iter()
            .map(|(&building, &resource)| (building, resource))
    }
}

impl Default for EconomyRegistry {
    fn default() -> Self {
        match Self::load_from_file(ECONOMY_CONFIG_PATH) {
            Ok(registry) => registry,
            Err(error) => {
                warn!(
                    "Failed to load economy config from {}: {error}. Falling back to defaults.",
                    ECONOMY_CONFIG_PATH
                );
                Self::fallback()
            }
        }
    }
}

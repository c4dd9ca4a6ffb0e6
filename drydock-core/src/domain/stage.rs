//! Stage catalog
//!
//! The fixed ordered list of pipeline stages. The catalog is a static
//! data table: stages carry display metadata and a nominal duration used
//! by the simulated advancement engine, nothing else.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Stable stage identifier, in catalog order.
///
/// The derived `Ord` follows declaration order, so ordered maps keyed by
/// `StageName` iterate in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageName {
    SourceControl,
    Build,
    Containerize,
    Publish,
    Deploy,
}

/// Catalog entry for a single pipeline stage
#[derive(Debug, Clone, Serialize)]
pub struct Stage {
    pub name: StageName,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Simulated wall time for this stage, in milliseconds
    pub nominal_duration_ms: u64,
}

static STAGES: [Stage; 5] = [
    Stage {
        name: StageName::SourceControl,
        display_name: "Source Control",
        description: "Fetch the latest revision from the repository",
        nominal_duration_ms: 2000,
    },
    Stage {
        name: StageName::Build,
        display_name: "Build",
        description: "Compile sources and run unit tests",
        nominal_duration_ms: 5000,
    },
    Stage {
        name: StageName::Containerize,
        display_name: "Containerize",
        description: "Assemble the container image",
        nominal_duration_ms: 4000,
    },
    Stage {
        name: StageName::Publish,
        display_name: "Publish",
        description: "Push the container image to the registry",
        nominal_duration_ms: 3000,
    },
    Stage {
        name: StageName::Deploy,
        display_name: "Deploy",
        description: "Roll the new image out to the cluster",
        nominal_duration_ms: 4000,
    },
];

/// Returns the full stage catalog in execution order.
pub fn stages() -> &'static [Stage] {
    &STAGES
}

/// Returns the nominal (simulated) duration for a stage.
pub fn nominal_duration(name: StageName) -> Duration {
    let ms = STAGES
        .iter()
        .find(|s| s.name == name)
        .map_or(3000, |s| s.nominal_duration_ms);
    Duration::from_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_five_stages_in_order() {
        let names: Vec<StageName> = stages().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                StageName::SourceControl,
                StageName::Build,
                StageName::Containerize,
                StageName::Publish,
                StageName::Deploy,
            ]
        );
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let unique: HashSet<StageName> = stages().iter().map(|s| s.name).collect();
        assert_eq!(unique.len(), stages().len());
    }

    #[test]
    fn test_nominal_durations_are_positive() {
        for stage in stages() {
            assert!(stage.nominal_duration_ms > 0);
            assert_eq!(
                nominal_duration(stage.name),
                Duration::from_millis(stage.nominal_duration_ms)
            );
        }
    }

    #[test]
    fn test_display_metadata_present() {
        for stage in stages() {
            assert!(!stage.display_name.is_empty());
            assert!(!stage.description.is_empty());
        }
    }

    #[test]
    fn test_stage_name_serializes_kebab_case() {
        let json = serde_json::to_string(&StageName::SourceControl).unwrap();
        assert_eq!(json, "\"source-control\"");
    }
}

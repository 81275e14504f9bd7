//! Structure template library.
//!
//! Templates ship as bundled TOML and merge with an optional user override
//! file, user values taking precedence. The library hands act ranges through
//! as given: it validates shape, not range consistency. Templates with gaps
//! or overlaps degrade metrics silently downstream.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use arclight_core::{ActStructure, StructureKind};
use arclight_error::{ArclightResult, StructureError, StructureErrorKind};
use arclight_interface::StructureProvider;
use config::{Config, File, FileFormat};
use serde::Deserialize;
use strum::IntoEnumIterator;
use tracing::{debug, warn};

/// Bundled template defaults, compiled into the binary.
const BUNDLED_TEMPLATES: &str = include_str!("templates.toml");

#[derive(Debug, Clone, Deserialize)]
struct TemplateEntry {
    acts: Vec<ActStructure>,
}

#[derive(Debug, Clone, Deserialize)]
struct LibraryConfig {
    structures: HashMap<String, TemplateEntry>,
}

/// Read-only act template provider backed by TOML configuration.
///
/// # Examples
///
/// ```
/// use arclight_core::StructureKind;
/// use arclight_interface::StructureProvider;
/// use arclight_story::StructureLibrary;
///
/// let library = StructureLibrary::bundled().unwrap();
/// let acts = library.acts(StructureKind::ThreeAct).unwrap();
/// assert_eq!(acts.len(), 3);
/// assert_eq!(acts[0].name, "Setup");
/// ```
#[derive(Debug, Clone)]
pub struct StructureLibrary {
    structures: HashMap<StructureKind, Vec<ActStructure>>,
}

impl StructureLibrary {
    /// Load the bundled templates only.
    pub fn bundled() -> ArclightResult<Self> {
        Self::load(None)
    }

    /// Load the bundled templates merged with a user override file.
    ///
    /// # Errors
    ///
    /// Returns an error when the override file cannot be read or either
    /// source fails to deserialize, or when a template lists no acts.
    pub fn load(user_file: Option<&Path>) -> ArclightResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(BUNDLED_TEMPLATES, FileFormat::Toml));
        if let Some(path) = user_file {
            builder = builder.add_source(File::from(path.to_path_buf()));
        }

        let merged = builder
            .build()
            .map_err(|e| StructureError::new(StructureErrorKind::FileRead(e.to_string())))?;
        let parsed: LibraryConfig = merged
            .try_deserialize()
            .map_err(|e| StructureError::new(StructureErrorKind::TomlParse(e.to_string())))?;

        let mut structures = HashMap::new();
        for (key, entry) in parsed.structures {
            let Ok(kind) = StructureKind::from_str(&key) else {
                warn!(structure = %key, "Skipping unrecognized structure template");
                continue;
            };
            if entry.acts.is_empty() {
                return Err(StructureError::new(StructureErrorKind::EmptyStructure(key)).into());
            }
            structures.insert(kind, entry.acts);
        }

        debug!(count = structures.len(), "Loaded structure templates");
        Ok(Self { structures })
    }
}

impl StructureProvider for StructureLibrary {
    fn acts(&self, kind: StructureKind) -> Result<Vec<ActStructure>, StructureError> {
        self.structures
            .get(&kind)
            .cloned()
            .ok_or_else(|| StructureError::new(StructureErrorKind::UnknownStructure(kind.to_string())))
    }

    fn available(&self) -> Vec<StructureKind> {
        StructureKind::iter()
            .filter(|kind| self.structures.contains_key(kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_library_carries_all_seven_structures() {
        let library = StructureLibrary::bundled().unwrap();
        assert_eq!(library.available().len(), 7);
    }

    #[test]
    fn act_counts_match_the_templates() {
        let library = StructureLibrary::bundled().unwrap();
        let expected = [
            (StructureKind::ThreeAct, 3),
            (StructureKind::Aristotelian, 7),
            (StructureKind::HerosJourney, 10),
            (StructureKind::FourAct, 4),
            (StructureKind::SaveTheCat, 13),
            (StructureKind::Freytag, 5),
            (StructureKind::StoryCircle, 8),
        ];
        for (kind, count) in expected {
            assert_eq!(library.acts(kind).unwrap().len(), count, "{kind}");
        }
    }

    #[test]
    fn three_act_ranges_partition_the_axis() {
        let library = StructureLibrary::bundled().unwrap();
        let acts = library.acts(StructureKind::ThreeAct).unwrap();
        assert_eq!(acts[0].start, 0.0);
        assert_eq!(acts[0].end, 25.0);
        assert_eq!(acts[1].name, "Confrontation");
        assert_eq!(acts[2].end, 100.0);
    }

    #[test]
    fn user_override_replaces_a_template() {
        let dir = std::env::temp_dir().join("arclight_library_override_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("templates.toml");
        std::fs::write(
            &path,
            r#"
[[structures."3-act".acts]]
name = "Hook"
start = 0.0
end = 30.0
color = "bg-blue-500"

[[structures."3-act".acts]]
name = "Body"
start = 30.0
end = 100.0
color = "bg-green-500"
"#,
        )
        .unwrap();

        let library = StructureLibrary::load(Some(&path)).unwrap();
        let acts = library.acts(StructureKind::ThreeAct).unwrap();
        assert_eq!(acts.len(), 2);
        assert_eq!(acts[0].name, "Hook");

        // Untouched templates still come from the bundle.
        assert_eq!(library.acts(StructureKind::Freytag).unwrap().len(), 5);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_override_file_is_an_error() {
        let path = std::env::temp_dir().join("arclight_no_such_templates.toml");
        assert!(StructureLibrary::load(Some(&path)).is_err());
    }

    #[test]
    fn unrecognized_structure_keys_are_skipped() {
        let dir = std::env::temp_dir().join("arclight_library_unknown_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("templates.toml");
        std::fs::write(
            &path,
            r#"
[[structures.kishotenketsu.acts]]
name = "Ki"
start = 0.0
end = 25.0
color = "bg-blue-500"
"#,
        )
        .unwrap();

        let library = StructureLibrary::load(Some(&path)).unwrap();
        assert_eq!(library.available().len(), 7);

        std::fs::remove_dir_all(&dir).ok();
    }
}

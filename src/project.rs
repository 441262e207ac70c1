use crate::layout::{AccessError, IqLayout};
use crate::statics;
use crate::strings::StringProvider;
use anyhow::{Context, anyhow};
use indexmap::IndexMap;
use serde::Deserialize;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

/// Binaries of the ROM that carry IQ data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryName {
    Arm9,
    Overlay10,
    Overlay29,
}

impl fmt::Display for BinaryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BinaryName::Arm9 => "arm9.bin",
            BinaryName::Overlay10 => "overlay_0010.bin",
            BinaryName::Overlay29 => "overlay_0029.bin",
        };
        f.write_str(name)
    }
}

/// Which part of the ROM needs rebuilding after an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifiedCategory {
    Iq,
    MiscSettings,
}

/// On-disk `project.json5`. Paths are relative to the project folder.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectManifest {
    pub binaries: IndexMap<BinaryName, PathBuf>,
    #[serde(default)]
    pub applied_patches: Vec<String>,
    pub strings: PathBuf,
    pub layout: IqLayout,
}

impl ProjectManifest {
    pub fn parse_json5(text: &str) -> anyhow::Result<ProjectManifest> {
        Ok(json5::from_str::<ProjectManifest>(text)?)
    }
}

/// Binaries, string tables and static layout of one ROM project.
/// The binaries are the only source of truth for IQ values; views re-read them on every build.
#[derive(Debug, Clone)]
pub struct RomProject {
    pub source_dir: Option<PathBuf>,
    pub layout: IqLayout,
    pub strings: StringProvider,
    pub iq_modified: bool,
    pub misc_settings_modified: bool,
    binaries: IndexMap<BinaryName, Vec<u8>>,
    applied_patches: Vec<String>,
}

impl RomProject {
    pub fn load_dir(dir: &Path) -> anyhow::Result<Self> {
        let manifest_path = dir.join(statics::PROJECT_MANIFEST_FILE);
        let manifest_text = fs::read_to_string(&manifest_path)
            .with_context(|| format!("reading {manifest_path:?}"))?;
        let manifest = ProjectManifest::parse_json5(&manifest_text)
            .with_context(|| format!("parsing {manifest_path:?}"))?;

        let strings_path = dir.join(&manifest.strings);
        let strings_text = fs::read_to_string(&strings_path)
            .with_context(|| format!("reading {strings_path:?}"))?;
        let strings = StringProvider::parse_json5(&strings_text)
            .with_context(|| format!("parsing {strings_path:?}"))?;

        let mut binaries = IndexMap::new();
        for (name, rel) in &manifest.binaries {
            let path = dir.join(rel);
            let bytes = fs::read(&path).with_context(|| format!("reading {name} from {path:?}"))?;
            log::debug!("loaded {name} ({} bytes) from {path:?}", bytes.len());
            binaries.insert(*name, bytes);
        }

        let mut project = Self::from_parts(
            binaries,
            manifest.applied_patches,
            manifest.layout,
            strings,
        );
        project.source_dir = Some(dir.to_path_buf());
        log::info!("opened project {dir:?}");
        Ok(project)
    }

    pub fn from_parts(
        binaries: IndexMap<BinaryName, Vec<u8>>,
        applied_patches: Vec<String>,
        layout: IqLayout,
        strings: StringProvider,
    ) -> Self {
        Self {
            source_dir: None,
            layout,
            strings,
            iq_modified: false,
            misc_settings_modified: false,
            binaries,
            applied_patches,
        }
    }

    pub fn get_binary(&self, name: BinaryName) -> anyhow::Result<&[u8]> {
        self.binaries
            .get(&name)
            .map(Vec::as_slice)
            .ok_or_else(|| anyhow!("{name} is not part of this project"))
    }

    /// Edit a binary in place. An `AccessError` leaves the buffer as the setter left it
    /// (setters validate before writing, so unchanged).
    pub fn modify_binary<T>(
        &mut self,
        name: BinaryName,
        edit: impl FnOnce(&mut [u8], &IqLayout) -> Result<T, AccessError>,
    ) -> anyhow::Result<T> {
        let layout = &self.layout;
        let bin = self
            .binaries
            .get_mut(&name)
            .ok_or_else(|| anyhow!("{name} is not part of this project"))?;
        edit(bin.as_mut_slice(), layout).with_context(|| format!("modifying {name}"))
    }

    pub fn binary_names(&self) -> impl Iterator<Item = BinaryName> + '_ {
        self.binaries.keys().copied()
    }

    pub fn is_patch_applied(&self, patch: &str) -> bool {
        self.applied_patches.iter().any(|p| p == patch)
    }

    pub fn mark_modified(&mut self, category: ModifiedCategory) {
        match category {
            ModifiedCategory::Iq => self.iq_modified = true,
            ModifiedCategory::MiscSettings => self.misc_settings_modified = true,
        }
    }

    pub fn is_modified(&self, category: ModifiedCategory) -> bool {
        match category {
            ModifiedCategory::Iq => self.iq_modified,
            ModifiedCategory::MiscSettings => self.misc_settings_modified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BinaryName, ModifiedCategory, ProjectManifest};

    #[test]
    fn manifest_accepts_hex_offsets_and_keeps_binary_order() {
        let manifest = ProjectManifest::parse_json5(
            r#"{
  binaries: {
    overlay29: "overlay/overlay_0029.bin",
    arm9: "arm9.bin",
  },
  strings: "strings.json5",
  layout: {
    min_iq_exclusive_move_user: { offset: 0x1A, type: "u16" },
    min_iq_item_master: { offset: 0x1C, type: "u16" },
    intimidator_activation_chance: { offset: 0x4, type: "u16" },
    gummi_iq_gain: { offset: 0x100, dim: 18, type: "u8", add_types: { offset: 0x400, dim: 19 } },
    gummi_belly_heal: { offset: 0x200, dim: 18, type: "u8" },
    wonder_gummi_gain: { offset: 0x20, type: "u8" },
    nectar_gain: { offset: 0x8, type: "u8" },
    juice_bar_nectar_gain: { offset: 0x22, type: "u8" },
    iq_skills: {
      offset: 0x300, count: 69, entry_size: 4,
      iq_required: { offset: 0, type: "i32" },
      unk2: { offset: 0, type: "u8" },
    },
  },
}"#,
        )
        .unwrap();

        assert_eq!(
            manifest.binaries.keys().copied().collect::<Vec<_>>(),
            vec![BinaryName::Overlay29, BinaryName::Arm9]
        );
        assert!(manifest.applied_patches.is_empty());
        assert_eq!(manifest.layout.min_iq_exclusive_move_user.offset, 0x1A);
        assert_eq!(manifest.layout.gummi_iq_gain.placement(true).dim, 19);
        assert_eq!(manifest.layout.gummi_belly_heal.placement(true).dim, 18);
    }

    #[test]
    fn modified_categories_are_tracked_separately() {
        let mut project = super::RomProject::from_parts(
            Default::default(),
            vec![],
            crate::layout::IqLayout::parse_json5(include_str!("../tests/data/layout.json5"))
                .unwrap(),
            Default::default(),
        );
        assert!(!project.is_modified(ModifiedCategory::Iq));

        project.mark_modified(ModifiedCategory::MiscSettings);
        assert!(project.is_modified(ModifiedCategory::MiscSettings));
        assert!(!project.is_modified(ModifiedCategory::Iq));
        assert!(project.get_binary(BinaryName::Arm9).is_err());
    }
}

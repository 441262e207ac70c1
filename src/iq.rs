//! View models for the IQ page: scalar settings, gummi gain tables and IQ skills.
//!
//! Nothing here is cached between calls. Every build re-reads the project's binaries, and every
//! scalar commit writes straight back into them, so the binaries stay the single source of truth.

use crate::hardcoded_iq::{self, IqSkill};
use crate::layout::{AccessError, IqLayout};
use crate::project::{BinaryName, ModifiedCategory, RomProject};
use crate::statics;
use crate::strings::StringType;
use std::num::IntErrorKind;

type Getter = fn(&[u8], &IqLayout) -> Result<i64, AccessError>;
type Setter = fn(i64, &mut [u8], &IqLayout) -> Result<(), AccessError>;

/// The editable integer settings on the IQ page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarFieldKey {
    MinIqExclusiveMoveUser,
    MinIqItemMaster,
    IntimidatorActivationChance,
}

/// Where a scalar lives and which rebuild flag an edit to it raises.
#[derive(Clone, Copy)]
struct ScalarBinding {
    binary: BinaryName,
    get: Getter,
    set: Setter,
    category: ModifiedCategory,
}

impl ScalarFieldKey {
    pub const ALL: [ScalarFieldKey; 3] = [
        ScalarFieldKey::MinIqExclusiveMoveUser,
        ScalarFieldKey::MinIqItemMaster,
        ScalarFieldKey::IntimidatorActivationChance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScalarFieldKey::MinIqExclusiveMoveUser => statics::EN_LABEL_MIN_IQ_EXCLUSIVE_MOVE_USER,
            ScalarFieldKey::MinIqItemMaster => statics::EN_LABEL_MIN_IQ_ITEM_MASTER,
            ScalarFieldKey::IntimidatorActivationChance => statics::EN_LABEL_INTIMIDATOR_CHANCE,
        }
    }

    pub fn binary(self) -> BinaryName {
        self.binding().binary
    }

    pub fn category(self) -> ModifiedCategory {
        self.binding().category
    }

    fn binding(self) -> ScalarBinding {
        match self {
            ScalarFieldKey::MinIqExclusiveMoveUser => ScalarBinding {
                binary: BinaryName::Arm9,
                get: hardcoded_iq::get_min_iq_for_exclusive_move_user,
                set: hardcoded_iq::set_min_iq_for_exclusive_move_user,
                category: ModifiedCategory::Iq,
            },
            ScalarFieldKey::MinIqItemMaster => ScalarBinding {
                binary: BinaryName::Arm9,
                get: hardcoded_iq::get_min_iq_for_item_master,
                set: hardcoded_iq::set_min_iq_for_item_master,
                category: ModifiedCategory::Iq,
            },
            ScalarFieldKey::IntimidatorActivationChance => ScalarBinding {
                binary: BinaryName::Overlay10,
                get: hardcoded_iq::get_intimidator_chance,
                set: hardcoded_iq::set_intimidator_chance,
                category: ModifiedCategory::MiscSettings,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarField {
    pub key: ScalarFieldKey,
    pub label: &'static str,
    pub value: i64,
    pub binary: BinaryName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Written {
        value: i64,
        category: ModifiedCategory,
    },
    /// The text was not an integer; nothing was written.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GainRow {
    pub index: usize,
    pub item_id: Option<u32>,
    pub label: String,
    pub cells: Vec<String>,
}

/// One gummi per row, one type per column. Always square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GainTable {
    pub column_labels: Vec<String>,
    pub rows: Vec<GainRow>,
}

impl GainTable {
    pub fn dim(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtherItemKind {
    WonderGummi,
    Nectar,
    JuiceBarNectar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherItemGain {
    pub kind: OtherItemKind,
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GainTables {
    pub iq_gain: GainTable,
    pub belly_heal: GainTable,
    pub other_items: [OtherItemGain; 3],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub index: usize,
    pub name: String,
    pub iq_required: i64,
    pub unk2: i64,
}

/// Item shown in row `row` of the gummi tables. Row 0 is the typeless row and has no item.
pub fn gummi_item_id(row: usize) -> Option<u32> {
    match row {
        0 => None,
        statics::FAIRY_GUMMI_ROW => Some(statics::FAIRY_GUMMI_ITEM_ID),
        // Rows are bounded by the type count, far below u32::MAX.
        _ => Some(statics::FIRST_GUMMI_ITEM_ID + row as u32 - 1),
    }
}

pub fn load_scalar(project: &RomProject, key: ScalarFieldKey) -> anyhow::Result<ScalarField> {
    let binding = key.binding();
    let bin = project.get_binary(binding.binary)?;
    let value = (binding.get)(bin, &project.layout)?;
    Ok(ScalarField {
        key,
        label: key.label(),
        value,
        binary: binding.binary,
    })
}

/// Parses a decimal integer as typed into a settings field: surrounding whitespace, an optional
/// sign and single `_` separators between digits are accepted. `Ok(None)` means "not an integer";
/// integers too large for any field are an error.
fn parse_integer_input(raw_text: &str) -> anyhow::Result<Option<i64>> {
    let text = raw_text.trim();
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || digits.split('_').any(str::is_empty) {
        return Ok(None);
    }
    match text.replace('_', "").parse::<i64>() {
        Ok(value) => Ok(Some(value)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            anyhow::bail!("value {text} does not fit into a 64-bit integer")
        }
        Err(_) => Ok(None),
    }
}

/// Apply the text of an edited field. Non-integer text is dropped without touching the project.
pub fn commit_scalar(
    project: &mut RomProject,
    key: ScalarFieldKey,
    raw_text: &str,
) -> anyhow::Result<CommitOutcome> {
    let Some(value) = parse_integer_input(raw_text)? else {
        log::debug!("ignoring non-integer input {raw_text:?} for {key:?}");
        return Ok(CommitOutcome::Ignored);
    };

    let binding = key.binding();
    project.modify_binary(binding.binary, |bin, layout| (binding.set)(value, bin, layout))?;
    project.mark_modified(binding.category);
    log::info!("set {key:?} to {value} in {}", binding.binary);
    Ok(CommitOutcome::Written {
        value,
        category: binding.category,
    })
}

fn gain_table(project: &RomProject, source: &[Vec<i64>], num_types: usize) -> GainTable {
    let type_names = project.strings.get_all(StringType::TypeNames);
    let rows = (0..num_types)
        .map(|i| {
            let item_id = gummi_item_id(i);
            let label = match item_id {
                Some(id) => project.strings.get_value(StringType::ItemNames, id as usize),
                None => statics::EN_SENTINEL_NAME.to_string(),
            };
            // Source is [type][gummi]; the view shows gummis as rows.
            let cells = (0..num_types).map(|j| source[j][i].to_string()).collect();
            GainRow {
                index: i,
                item_id,
                label,
                cells,
            }
        })
        .collect();

    GainTable {
        column_labels: type_names[..num_types].to_vec(),
        rows,
    }
}

pub fn build_gain_tables(project: &RomProject) -> anyhow::Result<GainTables> {
    let arm9 = project.get_binary(BinaryName::Arm9)?;
    let ov29 = project.get_binary(BinaryName::Overlay29)?;
    let layout = &project.layout;
    let add_types = project.is_patch_applied(statics::PATCH_ADD_TYPES);

    let iq_source = hardcoded_iq::get_gummi_iq_gains(arm9, layout, add_types)?;
    let belly_source = hardcoded_iq::get_gummi_belly_heal(arm9, layout, add_types)?;
    let num_types = iq_source
        .len()
        .min(belly_source.len())
        .min(project.strings.get_all(StringType::TypeNames).len());
    log::debug!("building gummi tables for {num_types} types (AddTypes: {add_types})");

    let item_name = |id: u32| project.strings.get_value(StringType::ItemNames, id as usize);
    let other_items = [
        OtherItemGain {
            kind: OtherItemKind::WonderGummi,
            name: item_name(statics::WONDER_GUMMI_ITEM_ID),
            value: hardcoded_iq::get_wonder_gummi_gain(arm9, layout)?,
        },
        OtherItemGain {
            kind: OtherItemKind::Nectar,
            name: item_name(statics::NECTAR_ITEM_ID),
            value: hardcoded_iq::get_nectar_gain(ov29, layout)?,
        },
        OtherItemGain {
            kind: OtherItemKind::JuiceBarNectar,
            name: statics::EN_JUICE_BAR_NECTAR.to_string(),
            value: hardcoded_iq::get_juice_bar_nectar_gain(arm9, layout)?,
        },
    ];

    Ok(GainTables {
        iq_gain: gain_table(project, &iq_source, num_types),
        belly_heal: gain_table(project, &belly_source, num_types),
        other_items,
    })
}

pub fn build_skill_table(project: &RomProject) -> anyhow::Result<Vec<SkillEntry>> {
    let arm9 = project.get_binary(BinaryName::Arm9)?;
    let skills = hardcoded_iq::get_iq_skills(arm9, &project.layout)?;
    Ok(skills
        .into_iter()
        .enumerate()
        .map(|(index, IqSkill { iq_required, unk2 })| SkillEntry {
            index,
            name: match index {
                0 => statics::EN_SENTINEL_NAME.to_string(),
                _ => project
                    .strings
                    .get_value(StringType::IqSkillNames, index - 1),
            },
            iq_required,
            unk2,
        })
        .collect())
}

/// Everything the IQ page shows, built in one go when the page opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IqView {
    pub scalars: Vec<ScalarField>,
    pub gains: GainTables,
    pub skills: Vec<SkillEntry>,
}

impl IqView {
    pub fn build(project: &RomProject) -> anyhow::Result<Self> {
        let gains = build_gain_tables(project)?;
        let skills = build_skill_table(project)?;
        let scalars = ScalarFieldKey::ALL
            .into_iter()
            .map(|key| load_scalar(project, key))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self {
            scalars,
            gains,
            skills,
        })
    }
}

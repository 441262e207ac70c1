// Shared fixtures: a synthetic ROM project matching tests/data/layout.json5.
#![allow(dead_code)]

use indexmap::IndexMap;
use iqed::layout::MatrixLayout;
use iqed::{BinaryName, IqLayout, RomProject, StringProvider, ValueType, statics};
use std::path::Path;

pub const LAYOUT_JSON5: &str = include_str!("../data/layout.json5");

pub const MIN_IQ_EXCLUSIVE_MOVE_USER: i64 = 300;
pub const MIN_IQ_ITEM_MASTER: i64 = 500;
pub const INTIMIDATOR_CHANCE: i64 = 10;
pub const WONDER_GUMMI_GAIN: i64 = 5;
pub const JUICE_BAR_NECTAR_GAIN: i64 = 3;
pub const NECTAR_GAIN: i64 = 20;
pub const SKILL_IQ: [i64; 5] = [0, 150, 80, 300, 999];
pub const SKILL_UNK2: [i64; 5] = [7, 1, 1, 2, 3];

pub fn layout() -> IqLayout {
    IqLayout::parse_json5(LAYOUT_JSON5).expect("fixture layout parses")
}

/// IQ gain for gummi `g` against type `t`.
pub fn iq_gain(t: usize, g: usize) -> i64 {
    (t * 10 + g) as i64
}

/// Belly heal for gummi `g` against type `t` (signed on purpose).
pub fn belly_heal(t: usize, g: usize) -> i64 {
    g as i64 - t as i64
}

fn write_matrix(
    bin: &mut [u8],
    offset: usize,
    dim: usize,
    vt: ValueType,
    f: fn(usize, usize) -> i64,
) {
    for t in 0..dim {
        for g in 0..dim {
            vt.write(bin, offset + (t * dim + g) * vt.size(), f(t, g))
                .expect("matrix cell fits");
        }
    }
}

pub fn arm9() -> Vec<u8> {
    let layout = layout();
    let mut bin = vec![0_u8; 0x1000];
    layout
        .min_iq_exclusive_move_user
        .write(&mut bin, MIN_IQ_EXCLUSIVE_MOVE_USER)
        .unwrap();
    layout.min_iq_item_master.write(&mut bin, MIN_IQ_ITEM_MASTER).unwrap();
    layout.wonder_gummi_gain.write(&mut bin, WONDER_GUMMI_GAIN).unwrap();
    layout
        .juice_bar_nectar_gain
        .write(&mut bin, JUICE_BAR_NECTAR_GAIN)
        .unwrap();

    let matrices: [(MatrixLayout, fn(usize, usize) -> i64); 2] = [
        (layout.gummi_iq_gain, iq_gain),
        (layout.gummi_belly_heal, belly_heal),
    ];
    for (matrix, f) in matrices {
        write_matrix(&mut bin, matrix.offset, matrix.dim, matrix.value_type, f);
        let patched = matrix.add_types.expect("fixture has AddTypes placements");
        write_matrix(&mut bin, patched.offset, patched.dim, matrix.value_type, f);
    }

    let skills = layout.iq_skills;
    for (i, (iq, unk2)) in SKILL_IQ.into_iter().zip(SKILL_UNK2).enumerate() {
        let record = skills.offset + i * skills.entry_size;
        skills
            .iq_required
            .value_type
            .write(&mut bin, record + skills.iq_required.offset, iq)
            .unwrap();
        skills
            .unk2
            .value_type
            .write(&mut bin, record + skills.unk2.offset, unk2)
            .unwrap();
    }
    bin
}

pub fn overlay10() -> Vec<u8> {
    let mut bin = vec![0_u8; 0x20];
    layout()
        .intimidator_activation_chance
        .write(&mut bin, INTIMIDATOR_CHANCE)
        .unwrap();
    bin
}

pub fn overlay29() -> Vec<u8> {
    let mut bin = vec![0_u8; 0x20];
    layout().nectar_gain.write(&mut bin, NECTAR_GAIN).unwrap();
    bin
}

pub fn strings(num_types: usize, num_skills: usize) -> StringProvider {
    StringProvider {
        item_names: (0..200).map(|i| format!("Item{i}")).collect(),
        type_names: (0..num_types).map(|i| format!("Type{i}")).collect(),
        iq_skill_names: (0..num_skills).map(|i| format!("Skill{i}")).collect(),
    }
}

pub fn project_with(add_types: bool, strings: StringProvider) -> RomProject {
    let mut binaries = IndexMap::new();
    binaries.insert(BinaryName::Arm9, arm9());
    binaries.insert(BinaryName::Overlay10, overlay10());
    binaries.insert(BinaryName::Overlay29, overlay29());
    let patches = if add_types {
        vec![statics::PATCH_ADD_TYPES.to_string()]
    } else {
        vec![]
    };
    RomProject::from_parts(binaries, patches, layout(), strings)
}

pub fn project(add_types: bool) -> RomProject {
    project_with(add_types, strings(19, 4))
}

/// Lay the fixture out on disk the way `RomProject::load_dir` expects it.
pub fn write_project_dir(dir: &Path, add_types: bool) -> std::io::Result<()> {
    std::fs::create_dir_all(dir.join("overlay"))?;
    std::fs::write(dir.join("arm9.bin"), arm9())?;
    std::fs::write(dir.join("overlay").join("overlay_0010.bin"), overlay10())?;
    std::fs::write(dir.join("overlay").join("overlay_0029.bin"), overlay29())?;

    let type_names: Vec<String> = (0..19).map(|i| format!("\"Type{i}\"")).collect();
    let item_names: Vec<String> = (0..200).map(|i| format!("\"Item{i}\"")).collect();
    std::fs::write(
        dir.join("strings.json5"),
        format!(
            "{{\n  item_names: [{}],\n  type_names: [{}],\n  iq_skill_names: [\"Type-Advantage Master\", \"Item Catcher\"],\n}}\n",
            item_names.join(", "),
            type_names.join(", "),
        ),
    )?;

    let patches = if add_types { "\"AddTypes\"" } else { "" };
    std::fs::write(
        dir.join(statics::PROJECT_MANIFEST_FILE),
        format!(
            "{{\n  binaries: {{\n    arm9: \"arm9.bin\",\n    overlay10: \"overlay/overlay_0010.bin\",\n    overlay29: \"overlay/overlay_0029.bin\",\n  }},\n  applied_patches: [{patches}],\n  strings: \"strings.json5\",\n  layout: {LAYOUT_JSON5},\n}}\n"
        ),
    )?;
    Ok(())
}

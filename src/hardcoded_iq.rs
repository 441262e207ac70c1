//! Accessors for IQ values hardcoded in the ARM9 binary and overlays 10 and 29.
//! Every function takes the image it reads from; the caller picks the right one.

use crate::layout::{AccessError, FieldLayout, IqLayout};

/// One record of the IQ skill table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IqSkill {
    pub iq_required: i64,
    pub unk2: i64,
}

pub fn get_min_iq_for_exclusive_move_user(
    arm9: &[u8],
    layout: &IqLayout,
) -> Result<i64, AccessError> {
    layout.min_iq_exclusive_move_user.read(arm9)
}

pub fn set_min_iq_for_exclusive_move_user(
    value: i64,
    arm9: &mut [u8],
    layout: &IqLayout,
) -> Result<(), AccessError> {
    layout.min_iq_exclusive_move_user.write(arm9, value)
}

pub fn get_min_iq_for_item_master(arm9: &[u8], layout: &IqLayout) -> Result<i64, AccessError> {
    layout.min_iq_item_master.read(arm9)
}

pub fn set_min_iq_for_item_master(
    value: i64,
    arm9: &mut [u8],
    layout: &IqLayout,
) -> Result<(), AccessError> {
    layout.min_iq_item_master.write(arm9, value)
}

pub fn get_intimidator_chance(ov10: &[u8], layout: &IqLayout) -> Result<i64, AccessError> {
    layout.intimidator_activation_chance.read(ov10)
}

pub fn set_intimidator_chance(
    value: i64,
    ov10: &mut [u8],
    layout: &IqLayout,
) -> Result<(), AccessError> {
    layout.intimidator_activation_chance.write(ov10, value)
}

/// Indexed `[type][gummi]`.
pub fn get_gummi_iq_gains(
    arm9: &[u8],
    layout: &IqLayout,
    add_types_applied: bool,
) -> Result<Vec<Vec<i64>>, AccessError> {
    layout.gummi_iq_gain.read(arm9, add_types_applied)
}

/// Indexed `[type][gummi]`.
pub fn get_gummi_belly_heal(
    arm9: &[u8],
    layout: &IqLayout,
    add_types_applied: bool,
) -> Result<Vec<Vec<i64>>, AccessError> {
    layout.gummi_belly_heal.read(arm9, add_types_applied)
}

pub fn get_wonder_gummi_gain(arm9: &[u8], layout: &IqLayout) -> Result<i64, AccessError> {
    layout.wonder_gummi_gain.read(arm9)
}

pub fn get_nectar_gain(ov29: &[u8], layout: &IqLayout) -> Result<i64, AccessError> {
    layout.nectar_gain.read(ov29)
}

pub fn get_juice_bar_nectar_gain(arm9: &[u8], layout: &IqLayout) -> Result<i64, AccessError> {
    layout.juice_bar_nectar_gain.read(arm9)
}

pub fn get_iq_skills(arm9: &[u8], layout: &IqLayout) -> Result<Vec<IqSkill>, AccessError> {
    let table = &layout.iq_skills;
    (0..table.count)
        .map(|i| {
            let field = |f: &FieldLayout| {
                f.value_type
                    .read_element(arm9, table.offset, i, table.entry_size, f.offset)
            };
            Ok(IqSkill {
                iq_required: field(&table.iq_required)?,
                unk2: field(&table.unk2)?,
            })
        })
        .collect()
}

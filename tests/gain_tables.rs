mod common;

use iqed::iq::build_gain_tables;
use iqed::{OtherItemKind, statics};
use pretty_assertions::assert_eq;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn tables_are_square_and_sized_by_the_current_patch_state() -> Result<()> {
    let unpatched = build_gain_tables(&common::project(false))?;
    assert_eq!(unpatched.iq_gain.dim(), 18);
    assert_eq!(unpatched.belly_heal.dim(), 18);

    let patched = build_gain_tables(&common::project(true))?;
    assert_eq!(patched.iq_gain.dim(), 19);

    for table in [
        &unpatched.iq_gain,
        &unpatched.belly_heal,
        &patched.iq_gain,
        &patched.belly_heal,
    ] {
        assert_eq!(table.column_labels.len(), table.dim());
        assert!(table.rows.iter().all(|row| row.cells.len() == table.dim()));
    }
    Ok(())
}

#[test]
fn fewer_type_names_truncate_the_tables() -> Result<()> {
    let project = common::project_with(true, common::strings(10, 4));
    let tables = build_gain_tables(&project)?;

    assert_eq!(tables.iq_gain.dim(), 10);
    assert_eq!(tables.belly_heal.dim(), 10);
    assert_eq!(tables.iq_gain.column_labels.last().map(String::as_str), Some("Type9"));
    Ok(())
}

#[test]
fn row_labels_follow_gummi_item_numbering() -> Result<()> {
    let tables = build_gain_tables(&common::project(true))?;
    let rows = &tables.iq_gain.rows;

    assert_eq!(rows[0].label, statics::EN_SENTINEL_NAME);
    assert_eq!(rows[0].item_id, None);

    assert_eq!(rows[1].item_id, Some(119));
    assert_eq!(rows[5].item_id, Some(123));
    assert_eq!(rows[5].label, "Item123");
    assert_eq!(rows[17].label, "Item135");

    assert_eq!(rows[18].item_id, Some(statics::FAIRY_GUMMI_ITEM_ID));
    assert_eq!(rows[18].label, "Item138");

    let labels: Vec<_> = rows.iter().map(|r| r.label.clone()).collect();
    let belly_labels: Vec<_> = tables.belly_heal.rows.iter().map(|r| r.label.clone()).collect();
    assert_eq!(labels, belly_labels);
    Ok(())
}

#[test]
fn cells_show_gummis_as_rows_and_types_as_columns() -> Result<()> {
    let tables = build_gain_tables(&common::project(false))?;

    let iq_row_3: Vec<String> = (0..18).map(|t| common::iq_gain(t, 3).to_string()).collect();
    assert_eq!(tables.iq_gain.rows[3].cells, iq_row_3);

    assert_eq!(tables.belly_heal.rows[2].cells[5], "-3");
    assert_eq!(tables.belly_heal.rows[5].cells[2], "3");
    assert_eq!(tables.iq_gain.column_labels[4], "Type4");
    Ok(())
}

#[test]
fn other_items_are_read_from_their_own_locations() -> Result<()> {
    let tables = build_gain_tables(&common::project(false))?;
    let summary: Vec<_> = tables
        .other_items
        .iter()
        .map(|item| (item.kind, item.name.as_str(), item.value))
        .collect();

    assert_eq!(
        summary,
        vec![
            (OtherItemKind::WonderGummi, "Item136", common::WONDER_GUMMI_GAIN),
            (OtherItemKind::Nectar, "Item103", common::NECTAR_GAIN),
            (
                OtherItemKind::JuiceBarNectar,
                statics::EN_JUICE_BAR_NECTAR,
                common::JUICE_BAR_NECTAR_GAIN
            ),
        ]
    );
    Ok(())
}

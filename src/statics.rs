// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs and iq.rs to reduce duplication and make tweaks safer.

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "IQED: Explorers of Sky IQ Editor";

pub const EN_BTN_OPEN: &str = "Open Project...";
pub const EN_BTN_REFRESH: &str = "Refresh";
pub const EN_BTN_ABOUT: &str = "About";
pub const EN_BTN_TOGGLE_THEME: &str = "Theme";
pub const EN_BTN_CLEAR: &str = "Clear";

pub const EN_WINDOW_ABOUT: &str = "About";
pub const EN_ABOUT_HEADING: &str = "IQED: Explorers of Sky IQ Editor";
pub const EN_ABOUT_VERSION: &str = "Version:";
pub const EN_ABOUT_PROJECT_LAYOUT: &str =
    "A project folder contains project.json5, the string table and the extracted binaries.";

pub const EN_HOME_HEADING: &str = "IQED: Explorers of Sky IQ Editor";
pub const EN_HOME_INSTRUCTIONS: &str = "Open a project folder (containing project.json5) to begin.";

pub const EN_HEADING_MISC_SETTINGS: &str = "IQ Settings";
pub const EN_HEADING_IQ_GAIN: &str = "IQ Gain per Gummi";
pub const EN_HEADING_BELLY_HEAL: &str = "Belly Heal per Gummi";
pub const EN_HEADING_OTHER_ITEMS: &str = "IQ Gain (Other Items)";
pub const EN_HEADING_IQ_SKILLS: &str = "IQ Skills";
pub const EN_HINT_READ_ONLY_TABLE: &str = "Rows are gummis, columns are the target's type.";

pub const EN_LABEL_MIN_IQ_EXCLUSIVE_MOVE_USER: &str = "Min. IQ for Exclusive Move User";
pub const EN_LABEL_MIN_IQ_ITEM_MASTER: &str = "Min. IQ for Item Master";
pub const EN_LABEL_INTIMIDATOR_CHANCE: &str = "Intimidator Activation Chance";

pub const EN_COL_ID: &str = "ID";
pub const EN_COL_NAME: &str = "Name";
pub const EN_COL_ITEM: &str = "Item";
pub const EN_COL_GAIN: &str = "Gain";
pub const EN_COL_IQ_REQUIRED: &str = "IQ Required";
pub const EN_COL_UNK2: &str = "Unk2";

pub const EN_BADGE_IQ_MODIFIED: &str = "IQ modified";
pub const EN_BADGE_MISC_MODIFIED: &str = "Settings modified";

// Label used for row 0 of the gummi tables and skill 0.
pub const EN_SENTINEL_NAME: &str = "/";
pub const EN_JUICE_BAR_NECTAR: &str = "Juice Bar Nectar";
pub const EN_LITERAL_MISSING: &str = "<missing>";

// Project files.
pub const PROJECT_MANIFEST_FILE: &str = "project.json5";

// Patch names as recorded in a project manifest.
pub const PATCH_ADD_TYPES: &str = "AddTypes";

// Item IDs in the vanilla item table.
pub const FIRST_GUMMI_ITEM_ID: u32 = 119;
pub const WONDER_GUMMI_ITEM_ID: u32 = 136;
pub const FAIRY_GUMMI_ITEM_ID: u32 = 138;
pub const NECTAR_ITEM_ID: u32 = 103;

// Gummi table row whose item is not FIRST_GUMMI_ITEM_ID + row - 1.
pub const FAIRY_GUMMI_ROW: usize = 18;

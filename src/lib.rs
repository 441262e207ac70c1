//! Core library for IQED, an IQ editor for Pokémon Mystery Dungeon: Explorers of Sky ROM projects.
//! Reads IQ values hardcoded in the ARM9 binary and overlays through a static layout, shapes them
//! into the tables the editor shows, and writes scalar edits back into the binaries.

mod gui;
pub mod hardcoded_iq;
pub mod iq;
pub mod layout;
mod project;
pub mod statics;
mod strings;

pub use gui::run_gui;
pub use iq::{
    CommitOutcome, GainRow, GainTable, GainTables, IqView, OtherItemGain, OtherItemKind,
    ScalarField, ScalarFieldKey, SkillEntry,
};
pub use layout::{AccessError, IqLayout, ValueType};
pub use project::{BinaryName, ModifiedCategory, ProjectManifest, RomProject};
pub use strings::{StringProvider, StringType};

use crate::statics;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringType {
    ItemNames,
    TypeNames,
    IqSkillNames,
}

/// Name tables extracted from the game's text strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StringProvider {
    pub item_names: Vec<String>,
    pub type_names: Vec<String>,
    pub iq_skill_names: Vec<String>,
}

impl StringProvider {
    pub fn parse_json5(text: &str) -> anyhow::Result<StringProvider> {
        Ok(json5::from_str::<StringProvider>(text)?)
    }

    pub fn get_all(&self, kind: StringType) -> &[String] {
        match kind {
            StringType::ItemNames => &self.item_names,
            StringType::TypeNames => &self.type_names,
            StringType::IqSkillNames => &self.iq_skill_names,
        }
    }

    pub fn get_value(&self, kind: StringType, id: usize) -> String {
        match self.get_all(kind).get(id) {
            Some(name) => name.clone(),
            None => {
                log::warn!("no {kind:?} entry for id {id}");
                statics::EN_LITERAL_MISSING.to_string()
            }
        }
    }
}

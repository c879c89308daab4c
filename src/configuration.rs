use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::growth::growtherror::GrowthError;
use crate::growth::growthpercentileengine::GrowthPercentileEngine;
use crate::growth::interpretation::Language;
use crate::manager::referencetablemanager::ReferenceTableManager;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    language: Option<Language>,
    #[serde(default)]
    reference_tables: Vec<serde_json::Value>
}

/// Reference tables and label language an engine is built from.
///
/// Starts from the built-in WHO tables; a JSON file of the form
/// `{ "language": "tr", "reference_tables": [ ... ] }` can override either.
#[derive(Debug, Clone)]
pub struct Configuration {
    reference_table_manager: ReferenceTableManager,
    language: Language
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            reference_table_manager: ReferenceTableManager::with_who_defaults(),
            language: Language::default()
        }
    }

    pub fn reference_table_manager(&self) -> &ReferenceTableManager {
        &self.reference_table_manager
    }

    pub fn reference_table_manager_mut(&mut self) -> &mut ReferenceTableManager {
        &mut self.reference_table_manager
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn from_json(&mut self, json_value: serde_json::Value) -> Result<(), GrowthError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        if let Some(language) = json_prop.language {
            self.language = language;
        }
        self.reference_table_manager.insert_obj_from_json_vec(&json_prop.reference_tables)?;
        Ok(())
    }

    pub fn from_reader<P: AsRef<Path>>(&mut self, file_path: P) -> Result<(), GrowthError> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        log::info!("loading growth configuration from {}", file_path.display());
        self.from_json(json_value)
    }

    pub fn engine(&self) -> Result<GrowthPercentileEngine, GrowthError> {
        GrowthPercentileEngine::new(&self.reference_table_manager, self.language)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::growth::growtherror::GrowthError;
use crate::growth::growthmetric::GrowthMetric;
use crate::growth::referencepoint::ReferencePoint;
use crate::growth::referencetable::ReferenceTable;
use crate::growth::sex::ReferenceSex;
use crate::growth::whoreferencedata::who_reference_points;

/// JSON shape of one table:
/// `{ "metric": "weight", "sex": "male", "points": [{ "ageMonths": 0, "L": .., "M": .., "S": .. }] }`
#[derive(Deserialize)]
struct ReferenceTableJsonProp {
    metric: GrowthMetric,
    sex: ReferenceSex,
    points: Vec<ReferencePoint>
}

/// Reference tables keyed by metric and sex.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTableManager {
    map: HashMap<(GrowthMetric, ReferenceSex), Arc<ReferenceTable>>
}

impl ReferenceTableManager {
    pub fn new() -> ReferenceTableManager {
        ReferenceTableManager { map: HashMap::new() }
    }

    /// Manager preloaded with the six built-in WHO tables.
    pub fn with_who_defaults() -> ReferenceTableManager {
        let mut manager = ReferenceTableManager::new();
        for metric in GrowthMetric::ALL {
            for sex in [ReferenceSex::Male, ReferenceSex::Female] {
                let table = ReferenceTable::from_trusted(who_reference_points(metric, sex));
                manager.map.insert((metric, sex), Arc::new(table));
            }
        }
        manager
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, metric: GrowthMetric, sex: ReferenceSex) -> bool {
        self.map.contains_key(&(metric, sex))
    }

    pub fn get(&self, metric: GrowthMetric, sex: ReferenceSex) -> Result<Arc<ReferenceTable>, GrowthError> {
        self.map
            .get(&(metric, sex))
            .cloned()
            .ok_or(GrowthError::TableNotFound { metric, sex })
    }

    /// Registers `table`, returning the table it replaced.
    pub fn insert(&mut self,
                  metric: GrowthMetric,
                  sex: ReferenceSex,
                  table: ReferenceTable) -> Option<Arc<ReferenceTable>> {
        let replaced = self.map.insert((metric, sex), Arc::new(table));
        if replaced.is_some() {
            log::warn!("reference table for {} / {} replaced", metric, sex);
        }
        replaced
    }

    pub fn insert_obj_from_json(&mut self, json_value: serde_json::Value) -> Result<(), GrowthError> {
        let prop: ReferenceTableJsonProp = serde_json::from_value(json_value)?;
        let table = ReferenceTable::new(prop.points)?;
        log::info!(
            "loaded reference table for {} / {} ({} points, {}-{} months)",
            prop.metric,
            prop.sex,
            table.points().len(),
            table.min_age(),
            table.max_age()
        );
        self.insert(prop.metric, prop.sex, table);
        Ok(())
    }

    pub fn insert_obj_from_json_vec(&mut self, json_vec: &[serde_json::Value]) -> Result<(), GrowthError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    /// Loads a JSON file holding either one table object or an array of them.
    pub fn from_reader<P: AsRef<Path>>(&mut self, file_path: P) -> Result<(), GrowthError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if let serde_json::Value::Array(json_array) = json_value {
            self.insert_obj_from_json_vec(&json_array)
        } else {
            self.insert_obj_from_json(json_value)
        }
    }
}

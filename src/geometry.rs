use crate::error::{KeResult, KeyEvalError};
use crate::keyboard::{Finger, Row};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default size of a 1u key, in layout coordinates.
pub const DEFAULT_ONE_UNIT: f64 = 40.0;

/// Layer index. Layer 0 is the base layer; higher layers are reached through modifiers.
pub type Layer = u8;

/// Physical keyboard record: key placement, rows and finger assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardModel {
    pub name: String,
    #[serde(default = "default_one_unit")]
    pub one_unit: f64,
    pub keyboard: BTreeMap<String, PhysicalKey>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalKey {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub row: Row,
    pub finger: Finger,
    #[serde(default)]
    pub is_home: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notch: Option<Notch>,
}

/// Cutout of an ISO-Enter style key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notch {
    #[serde(default)]
    pub place: String,
    #[serde(default = "default_one_unit")]
    pub w: f64,
    #[serde(default = "default_one_unit")]
    pub h: f64,
}

/// Logical layout record: which characters each physical key produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutModel {
    pub name: String,
    pub layout: BTreeMap<String, LogicalKey>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogicalKey {
    #[serde(default)]
    pub mappings: BTreeMap<Layer, String>,
    #[serde(default)]
    pub is_modifier: bool,
}

fn default_one_unit() -> f64 {
    DEFAULT_ONE_UNIT
}

impl KeyboardModel {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KeResult<Self> {
        debug!("Loading keyboard model from {:?}", path.as_ref());
        let content = fs::read_to_string(path)?;
        let model: KeyboardModel = serde_json::from_str(&content)?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> KeResult<()> {
        if !self.one_unit.is_finite() || self.one_unit <= 0.0 {
            return Err(KeyEvalError::Validation(format!(
                "Keyboard '{}' has invalid one_unit {}",
                self.name, self.one_unit
            )));
        }
        for (code, key) in &self.keyboard {
            let coords = [key.x, key.y, key.w, key.h];
            if coords.iter().any(|v| !v.is_finite()) || key.w <= 0.0 || key.h <= 0.0 {
                return Err(KeyEvalError::Validation(format!(
                    "Key '{}' has invalid geometry (x={}, y={}, w={}, h={})",
                    code, key.x, key.y, key.w, key.h
                )));
            }
        }
        Ok(())
    }
}

impl LayoutModel {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KeResult<Self> {
        debug!("Loading layout model from {:?}", path.as_ref());
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

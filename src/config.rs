// src/config.rs

use crate::data::DataError;
use serde::{Deserialize, Serialize};

/// Parámetros de la página. `Default` son los valores del curso original.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CourseConfig {
    pub gate_threshold_secs: f64,
    pub prompt_visible_secs: f64,
    pub pass_threshold: u32,
    pub prompt_text: String,
    #[serde(default = "default_title")]
    pub video_title: String,
    #[serde(default = "default_length")]
    pub video_length_secs: f64,
}

fn default_title() -> String {
    "Financial Planning Basics".to_string()
}

fn default_length() -> f64 {
    300.0
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            gate_threshold_secs: 60.0,
            prompt_visible_secs: 3.0,
            pass_threshold: 70,
            prompt_text: "Time to answer a question before proceeding!".to_string(),
            video_title: default_title(),
            video_length_secs: default_length(),
        }
    }
}

impl CourseConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, DataError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Configuración embebida; si no parsea se usan los valores por defecto
pub fn read_config_embedded() -> CourseConfig {
    match CourseConfig::from_yaml(include_str!("data/course.yaml")) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("course.yaml no válido, usando valores por defecto: {e}");
            CourseConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(read_config_embedded(), CourseConfig::default());
    }

    #[test]
    fn optional_fields_fall_back() {
        let yaml = "gate_threshold_secs: 5.0\nprompt_visible_secs: 1.0\npass_threshold: 50\nprompt_text: \"hi\"\n";
        let config = CourseConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.pass_threshold, 50);
        assert_eq!(config.video_length_secs, 300.0);
    }
}

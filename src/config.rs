// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

fn default_mass_precision() -> u8 {
  2
}

fn default_show_tooltips() -> bool {
  true
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  /// Decimal places used when a mass string parses as a number.
  #[serde(default = "default_mass_precision")]
  pub mass_precision: u8,

  #[serde(default = "default_show_tooltips")]
  pub show_tooltips: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      mass_precision: 2,
      show_tooltips: true,
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/ptable/settings.json)
  pub fn load() -> (Self, String) {
    let path = Self::get_path();
    if path.exists() {
      match File::open(&path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    let path = Self::get_path();
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(&path) {
      Ok(file) => {
        let writer = BufWriter::new(file);
        match serde_json::to_writer_pretty(writer, self) {
          Ok(_) => format!("Config saved to {:?}", path),
          Err(e) => format!("Failed to save config: {}", e),
        }
      }
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  fn get_path() -> PathBuf {
    // "org.mavensgroup.ptable" should match the Application ID in main.rs
    if let Some(proj) = ProjectDirs::from("org", "mavensgroup", "ptable") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.mass_precision, 2);
    assert!(cfg.show_tooltips);
  }

  #[test]
  fn test_missing_fields_fall_back_to_defaults() {
    let cfg: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, Config::default());
  }

  #[test]
  fn test_json_roundtrip() {
    let cfg = Config {
      mass_precision: 4,
      show_tooltips: false,
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
  }
}

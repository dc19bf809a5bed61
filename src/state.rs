// src/state.rs
use crate::config::Config;
use crate::model::{Element, ElementCatalog};

pub struct AppState {
    pub catalog: ElementCatalog,
    pub selected: Option<&'static Element>,
    pub config: Config,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: ElementCatalog::new(),
            selected: None,
            config: Config::default(),
        }
    }

    pub fn load_config(&mut self) {
        let (config, msg) = Config::load();
        self.config = config;
        log::info!("{}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_has_no_selection() {
        let state = AppState::new();
        assert!(state.selected.is_none());
        assert_eq!(state.catalog.len(), 118);
    }
}

// src/ui/interactions.rs

use crate::model::lookup;
use crate::state::AppState;
use crate::ui::details::DetailsPanel;
use gtk4::prelude::*;
use gtk4::{ApplicationWindow, ButtonsType, MessageDialog, MessageType};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything the UI can ask of the app. Each element button carries only
/// its symbol; both the grid and the search bar feed the same handler.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
  ElementSelected(&'static str),
  SearchSubmitted(String),
}

pub fn dispatch(
  state: &Rc<RefCell<AppState>>,
  details: &DetailsPanel,
  window: &ApplicationWindow,
  event: AppEvent,
) {
  match event {
    AppEvent::ElementSelected(symbol) => {
      let mut st = state.borrow_mut();
      match st.catalog.get(symbol) {
        Ok(element) => {
          st.selected = Some(element);
          details.update(element, st.config.mass_precision as usize);
          log::debug!("Selected {} ({})", element.name, element.symbol);
        }
        // Buttons are built from the catalog, so this only fires if the
        // grid and catalog ever get out of sync.
        Err(e) => log::error!("{}", e),
      }
    }

    AppEvent::SearchSubmitted(query) => {
      let mut st = state.borrow_mut();
      match lookup(&st.catalog, &query) {
        Ok(element) => {
          st.selected = Some(element);
          details.update(element, st.config.mass_precision as usize);
          log::info!("Search \"{}\" -> {}", query.trim(), element.symbol);
        }
        Err(e) => {
          log::warn!("{}", e);
          show_not_found(window);
        }
      }
    }
  }
}

fn show_not_found(window: &ApplicationWindow) {
  let dialog = MessageDialog::builder()
    .transient_for(window)
    .modal(true)
    .message_type(MessageType::Error)
    .buttons(ButtonsType::Ok)
    .text("Not Found")
    .secondary_text("Element not found.")
    .build();

  dialog.connect_response(|d, _| d.close());
  dialog.present();
}

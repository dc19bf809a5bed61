// src/ui/search.rs

use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Entry, Orientation};
use std::rc::Rc;

/// Entry plus button; Enter in the entry behaves like clicking the button.
#[derive(Clone)]
pub struct SearchBar {
    pub container: Box,
    entry: Entry,
    button: Button,
}

impl SearchBar {
    pub fn new() -> Self {
        let container = Box::new(Orientation::Horizontal, 5);
        container.set_halign(Align::Center);
        container.set_margin_start(10);
        container.set_margin_end(10);

        let entry = Entry::builder()
            .placeholder_text("Search by symbol or name")
            .width_chars(24)
            .build();
        container.append(&entry);

        let button = Button::with_label("Search");
        container.append(&button);

        Self {
            container,
            entry,
            button,
        }
    }

    /// Runs `handler` with the entry text on activate (Enter) and on click.
    pub fn connect_submit<F: Fn(String) + 'static>(&self, handler: F) {
        let handler = Rc::new(handler);

        let h = handler.clone();
        self.entry.connect_activate(move |entry| {
            h(entry.text().to_string());
        });

        let entry = self.entry.clone();
        self.button.connect_clicked(move |_| {
            handler(entry.text().to_string());
        });
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

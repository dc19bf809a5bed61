// src/ui/theme.rs
//
// Application-wide dark palette. One CSS class per element category; the
// table assigns the class, the colors live here.

use gtk4::gdk;
use gtk4::{CssProvider, STYLE_PROVIDER_PRIORITY_APPLICATION};

const DARK_CSS: &str = "
    window {
        background-color: #2e2e2e;
    }
    label {
        color: #ffffff;
    }
    entry {
        color: #ffffff;
        background-color: #444444;
    }
    frame {
        border-color: #555555;
    }
    button.element {
        font-weight: bold;
        padding: 2px;
        min-width: 52px;
        min-height: 52px;
        color: #1a1a1a;
    }
    button.cat-alkali          { background: #ff6666; }
    button.cat-alkaline-earth  { background: #ffdead; }
    button.cat-transition      { background: #ffc0c0; }
    button.cat-post-transition { background: #cccccc; }
    button.cat-metalloid       { background: #cccc99; }
    button.cat-nonmetal        { background: #a0ffa0; }
    button.cat-halogen         { background: #ffff99; }
    button.cat-noble-gas       { background: #c0ffff; }
    button.cat-lanthanide      { background: #ffbfff; }
    button.cat-actinide        { background: #ff99cc; }
";

/// Installs the palette on the default display. Call once, before the first
/// window is built.
pub fn apply() {
  let provider = CssProvider::new();
  provider.load_from_data(DARK_CSS);

  if let Some(display) = gdk::Display::default() {
    gtk4::style_context_add_provider_for_display(
      &display,
      &provider,
      STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
  }
}

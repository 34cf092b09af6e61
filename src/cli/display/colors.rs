//! Color theme for CLI output

use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub injected: TableColor,
    pub caller: TableColor,
    pub heading: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            injected: TableColor::Green,
            caller: TableColor::DarkGrey,
            heading: TableColor::Cyan,
        }
    }
}

impl ColorTheme {
    pub fn get_origin_color(&self, injected: bool) -> TableColor {
        if injected {
            self.injected
        } else {
            self.caller
        }
    }
}

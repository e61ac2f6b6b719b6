use crate::style::Style;

const RULE_WIDTH: usize = 48;
const KEY_WIDTH: usize = 16;

pub struct Ui {
    style: Style,
}

impl Ui {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn rule(&self) -> String {
        "-".repeat(RULE_WIDTH)
    }

    pub fn kv(&self, key: &str, value: &str) -> String {
        let key_pad = KEY_WIDTH;
        format!("{key:<key_pad$}: {value}")
    }

    pub fn ok_line(&self, message: &str) -> String {
        format!("{} {message}", self.style.ok())
    }

    pub fn info_line(&self, message: &str) -> String {
        format!("{} {message}", self.style.arrow())
    }
}

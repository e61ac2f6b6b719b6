use std::io::IsTerminal;

#[derive(Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Red,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Green => "32",
            Color::Yellow => "33",
            Color::Red => "31",
        }
    }
}

/// ANSI coloring, enabled per stream only for terminals and when `NO_COLOR` is unset.
#[derive(Clone, Copy)]
pub struct Style {
    color_stdout: bool,
    color_stderr: bool,
}

impl Style {
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();

        Self {
            color_stdout: !no_color && std::io::stdout().is_terminal(),
            color_stderr: !no_color && std::io::stderr().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self {
            color_stdout: false,
            color_stderr: false,
        }
    }

    pub fn ok(&self) -> String {
        self.paint_stdout(Color::Green, "✔")
    }

    pub fn arrow(&self) -> String {
        self.paint_stdout(Color::Yellow, "→")
    }

    pub fn paint_stdout(&self, color: Color, text: &str) -> String {
        paint_if(self.color_stdout, color, text)
    }

    pub fn paint_stderr(&self, color: Color, text: &str) -> String {
        paint_if(self.color_stderr, color, text)
    }
}

fn paint_if(enabled: bool, color: Color, text: &str) -> String {
    if enabled {
        format!("\u{1b}[{}m{text}\u{1b}[0m", color.code())
    } else {
        text.to_string()
    }
}

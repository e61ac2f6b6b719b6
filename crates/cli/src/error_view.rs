use crate::error::CliError;
use crate::output;
use crate::style::{Color, Style};
use crate::ui::Ui;

pub fn print(err: &CliError) {
    for line in render(err, &Ui::new(Style::detect())) {
        output::error(line);
    }
}

pub fn render(err: &CliError, ui: &Ui) -> Vec<String> {
    let style = ui.style();
    let mut lines = vec![
        ui.rule(),
        format!("folio: {}", err.category().heading()),
        ui.rule(),
        style.paint_stderr(Color::Red, err.title()),
        String::new(),
    ];

    let sections = [
        ("Reason:", err.reason()),
        ("What this means:", err.meaning()),
        ("Suggested action:", err.action()),
    ];

    for (label, body) in sections {
        if let Some(body) = body {
            lines.push(label.to_string());
            lines.extend(body.lines().map(str::to_string));
            lines.push(String::new());
        }
    }

    lines.push(ui.rule());
    lines
}

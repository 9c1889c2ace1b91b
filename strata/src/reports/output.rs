//! Output trait for rendering reports to different formats.

use colored::Colorize;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render a title/header.
    fn title(&mut self, text: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    fn list_item(&mut self, text: &str);

    /// A file or directory that was created.
    fn added_item(&mut self, text: &str);

    /// A file that would be created (dry run).
    fn planned_item(&mut self, text: &str);

    /// A file left untouched.
    fn skipped_item(&mut self, text: &str);

    fn success(&mut self, msg: &str);

    fn warning(&mut self, msg: &str);

    /// A one-line failure message.
    fn error(&mut self, msg: &str);

    /// A suggested next command.
    fn hint(&mut self, msg: &str);

    /// Diagnostic detail, shown only in verbose mode.
    fn detail(&mut self, text: &str);

    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output; colors and verbosity are fixed per instance.
pub struct TerminalOutput {
    color: bool,
    verbose: bool,
}

impl TerminalOutput {
    pub fn new(color: bool, verbose: bool) -> Self {
        Self { color, verbose }
    }

    fn paint(&self, text: &str, style: fn(&str) -> colored::ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{}", self.paint(text, |s| s.bold()));
        println!("{}", "=".repeat(text.chars().count()));
    }

    fn section(&mut self, name: &str) {
        println!("{}", self.paint(&format!("{}:", name), |s| s.bold()));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("  {}: {}", self.paint(key, |s| s.dimmed()), value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  {} {}", self.paint("+", |s| s.green()), text);
    }

    fn planned_item(&mut self, text: &str) {
        println!("  {} {}", self.paint("~", |s| s.cyan()), text);
    }

    fn skipped_item(&mut self, text: &str) {
        println!("  {} {}", self.paint("=", |s| s.dimmed()), text);
    }

    fn success(&mut self, msg: &str) {
        println!("{} {}", self.paint("✓", |s| s.green().bold()), msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{} {}", self.paint("warning:", |s| s.yellow().bold()), msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{} {}", self.paint("error:", |s| s.red().bold()), msg);
    }

    fn hint(&mut self, msg: &str) {
        eprintln!("  {} {}", self.paint("hint:", |s| s.cyan()), msg);
    }

    fn detail(&mut self, text: &str) {
        if self.verbose {
            for line in text.lines() {
                eprintln!("    {}", self.paint(line, |s| s.dimmed()));
            }
        }
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered lines, for asserting on reports in tests.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl RecordingOutput {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn title(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn section(&mut self, name: &str) {
        self.lines.push(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("- {}", text));
    }

    fn added_item(&mut self, text: &str) {
        self.lines.push(format!("+ {}", text));
    }

    fn planned_item(&mut self, text: &str) {
        self.lines.push(format!("~ {}", text));
    }

    fn skipped_item(&mut self, text: &str) {
        self.lines.push(format!("= {}", text));
    }

    fn success(&mut self, msg: &str) {
        self.lines.push(format!("ok {}", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning: {}", msg));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(format!("error: {}", msg));
    }

    fn hint(&mut self, msg: &str) {
        self.lines.push(format!("hint: {}", msg));
    }

    fn detail(&mut self, text: &str) {
        self.lines.push(format!("> {}", text));
    }

    fn newline(&mut self) {}
}

use ansi_term::Colour;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR: AtomicBool = AtomicBool::new(true);

/// Globally enable or disable ANSI styling of messages.
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

pub fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

fn tag(colour: Colour, label: &str) -> String {
    if color_enabled() {
        colour.bold().paint(label).to_string()
    } else {
        label.to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Blue, "[i]"), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Green, "[ok]"), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Yellow, "[!]"), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tag(Colour::Red, "[x]"), msg);
}

/// Boxed banner for warnings the user must not miss.
pub fn banner<T: fmt::Display>(msg: T) {
    let text = format!("  {msg}  ");
    let rule = "#".repeat(text.chars().count() + 2);
    let paint = |s: &str| {
        if color_enabled() {
            Colour::Yellow.paint(s).to_string()
        } else {
            s.to_string()
        }
    };
    println!("{}", paint(&rule));
    println!("{}", paint(&format!("#{text}#")));
    println!("{}", paint(&rule));
}

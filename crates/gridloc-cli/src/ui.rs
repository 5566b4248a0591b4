// Terminal output helpers shared by the command modules.

use owo_colors::OwoColorize;

pub fn ok(use_color: bool, msg: &str) {
    if use_color {
        println!("{} {}", "✔".green(), msg);
    } else {
        println!("✔ {msg}");
    }
}

pub fn warn(use_color: bool, msg: &str) {
    if use_color {
        eprintln!("{} {}", "⚠".yellow(), msg);
    } else {
        eprintln!("⚠ {msg}");
    }
}

pub fn fail(use_color: bool, msg: &str) {
    if use_color {
        eprintln!("{} {}", "✖".red(), msg);
    } else {
        eprintln!("✖ {msg}");
    }
}

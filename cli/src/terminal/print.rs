use colored::*;

use super::spinner;

pub const TOTAL_WIDTH: usize = 64;

/// Prints a centered section header: `────⟦ MSG ⟧────`.
pub fn header(msg: &str) {
    let formatted = format!("⟦ {} ⟧", msg.to_uppercase());
    let msg_len = formatted.chars().count();

    let dash_count = TOTAL_WIDTH.saturating_sub(msg_len);
    let left = dash_count / 2;
    let right = dash_count - left;

    let line = format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.bright_green(),
        "─".repeat(right).bright_black()
    );

    spinner::println_above(&line);
}

pub fn fat_separator() {
    spinner::println_above(&format!("{}", "═".repeat(TOTAL_WIDTH).bright_black()));
}

pub fn centerln(msg: &str) {
    let width = console::measure_text_width(msg);
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(width) / 2);
    spinner::println_above(&format!("{space}{msg}"));
}

pub fn end_of_program() {
    spinner::println_above(&format!("{}", "═".repeat(TOTAL_WIDTH).bright_black()));
}

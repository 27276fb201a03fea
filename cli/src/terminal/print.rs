use calcul_common::models::reading::Reading;
use colored::*;

const KEY_WIDTH: usize = 10;

pub fn result(reading: Reading) {
    println!("{}", render_result(reading));
}

pub fn render_result(reading: Reading) -> String {
    format!("RES : {reading}")
}

pub fn aligned_line(key: &str, value: &str) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    println!(
        "{} {}{}{} {}",
        ">".bright_black(),
        key.green(),
        dots.bright_black(),
        ":".bright_black(),
        value
    );
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = lumina_ui::run() {
        eprintln!("Lumina failed: {err}");
        std::process::exit(1);
    }
}

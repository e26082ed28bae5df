//! Session mode UI components.

use crate::coordinator::TranslationRecord;
use crate::ui::Style;

use super::SessionInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Interactive Translation Mode",
        Style::header("tl-desk"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_selection(source: Option<&str>, target: Option<&str>) {
    let side = |label: Option<&str>| {
        label.map_or_else(|| Style::hint("(not selected)"), Style::value)
    };
    eprintln!(
        "{} {} → {}",
        Style::label("languages"),
        side(source),
        side(target)
    );
}

pub fn print_config(info: &SessionInfo, source: Option<&str>, target: Option<&str>) {
    let show = |value: Option<&str>| Style::value(value.unwrap_or("-"));

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("provider"),
        Style::value(&info.provider_name)
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        show(info.model.as_deref())
    );
    println!("  {}       {}", Style::label("from"), show(source));
    println!("  {}         {}", Style::label("to"), show(target));
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&info.endpoint)
    );
    println!();
}

pub fn print_help() {
    const COMMANDS: &[(&str, &str)] = &[
        ("/from [language]", "Select the source language"),
        ("/to [language]", "Select the target language"),
        ("/edit", "Write multi-line text in your editor"),
        ("/clear", "Clear input, output and languages"),
        ("/history", "Show translations from this session"),
        ("/languages", "List available languages"),
        ("/config", "Show current configuration"),
        ("/help", "Show this help"),
        ("/quit", "Exit"),
    ];

    println!("{}", Style::header("Available commands"));
    for (command, description) in COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{command:<18}")),
            Style::secondary(description)
        );
    }
    println!(
        "\n  {}",
        Style::hint("Any other input is translated with the current languages.")
    );
    println!();
}

pub fn print_history(history: &[TranslationRecord]) {
    if history.is_empty() {
        println!("{}", Style::hint("No translations yet."));
        println!();
        return;
    }

    println!("{}", Style::header("History"));
    for (i, record) in history.iter().enumerate() {
        let detected = record
            .detected_source
            .as_deref()
            .map(|code| format!(" {}", Style::code(format!("[{code}]"))))
            .unwrap_or_default();
        println!(
            "  {} {} → {}{detected}",
            Style::secondary(format!("{}.", i + 1)),
            Style::value(&record.source_label),
            Style::value(&record.target_label)
        );
        println!("     {}", Style::secondary(&record.original));
        println!("     {}", record.translated);
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::api::models::{Character, CharacterDetail};
use crate::api::ApiError;
use crate::utils;

/// Steady-tick loading spinner shown while a request is in flight.
/// Callers must `finish_and_clear()` it on completion, success or not.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message(message.to_string());
    pb
}

/// One list entry: the four summary fields on a single line.
pub fn format_list_entry(index: usize, character: &Character) -> String {
    format!(
        "{}{}{} {} {} {} {} {} {} {}",
        "[".bold().white(),
        index.to_string().bold().cyan(),
        "]".bold().white(),
        character.name.bold().white(),
        "::".bold().white(),
        character.gender.bold().blue(),
        "::".bold().white(),
        character.species.bold().blue(),
        "::".bold().white(),
        status_colored(&character.status),
    )
}

fn status_colored(status: &str) -> colored::ColoredString {
    match status.to_ascii_lowercase().as_str() {
        "alive" => status.bold().green(),
        "dead" => status.bold().red(),
        _ => status.bold().yellow(),
    }
}

/// The fixed-layout detail card: all seven record fields plus the episode
/// identifiers and the image URL.
pub fn format_detail(detail: &CharacterDetail) -> String {
    let separator = "----------------------------------------------------------";
    let episodes = utils::join_episode_ids(&detail.episode);
    let mut out = String::new();
    out.push_str(&format!("{}\n", separator.bold().white()));
    out.push_str(&format!("{}\n", detail.name.bold().cyan()));
    out.push_str(&format!("{}\n", separator.bold().white()));
    out.push_str(&detail_line("Name", &detail.name));
    out.push_str(&detail_line("Gender", &detail.gender));
    out.push_str(&detail_line("Species", &detail.species));
    out.push_str(&detail_line("Status", &detail.status));
    out.push_str(&detail_line("Location", &detail.location.name));
    out.push_str(&detail_line("Origin", &detail.origin.name));
    out.push_str(&detail_line("Episode list", &episodes));
    out.push_str(&detail_line("Image", &detail.image));
    out.push_str(&format!("{}", separator.bold().white()));
    out
}

fn detail_line(label: &str, value: &str) -> String {
    format!(
        "{} {:<12} {} {}\n",
        ">".bold().green(),
        label.bold().white(),
        ":".bold().white(),
        value
    )
}

/// The empty-state message: "no results" and generic HTTP failures are
/// surfaced identically; transport and decode failures take the same path.
pub fn empty_state(error: &ApiError) -> String {
    match error {
        ApiError::NotFound => "No results for this search".to_string(),
        ApiError::Http { status } => format!("Error HTTP: {status}"),
        other => other.to_string(),
    }
}

pub fn print_kv(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value);
}

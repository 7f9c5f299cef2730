//! Pretty output formatting.

use ordo_core::liturgy::{Badge, Cycle, Language, LiturgicalYear, ResolvedDay, SeasonEntry};

use crate::commands::{DayReport, WindowReport};

/// Format one day as a single line.
pub fn format_day_line(day: &ResolvedDay) -> String {
    let parts = &day.date_parts;
    let mut output = format!(
        "{} {:>8} {:>2} {:<6} [{}] {}",
        day.date_key(),
        parts.day_name,
        parts.day_number,
        parts.month_name,
        day.color,
        day.principal.name
    );
    if !day.badges.is_empty() {
        let badges: Vec<_> = day.badges.iter().map(Badge::label).collect();
        output.push_str(&format!(" ({})", badges.join(", ")));
    }
    if !parts.week_text.is_empty() {
        output.push_str(&format!(" - {}", parts.week_text));
    }
    output
}

fn format_banner(day: &ResolvedDay, language: Language) -> Option<String> {
    let key = day.season_key?;
    Some(format!(
        "\n== {} ==\n   {}",
        key.title(language),
        key.info().description(language)
    ))
}

/// Format a whole year with its heading and season banners.
pub fn format_year(year: &LiturgicalYear) -> String {
    let mut output = format!(
        "{}\n{}\n{}\n",
        year.header.title, year.header.country_line, year.header.cycle_line
    );
    output.push_str(&"-".repeat(40));
    for day in &year.days {
        if let Some(banner) = format_banner(day, year.language) {
            output.push_str(&banner);
        }
        output.push('\n');
        output.push_str(&format_day_line(day));
    }
    output
}

/// Format a single day report.
pub fn format_day(report: &DayReport) -> String {
    let day = &report.day;
    let mut output = format!(
        "{} - {}\n{}\n  {}\n  Color: {}",
        report.long_date, report.time_text, day.principal.name, report.header.cycle_line, day.color
    );
    if let Some(key) = day.season_key {
        output.push_str(&format!("\n  Season starts: {key}"));
    }
    for badge in &day.badges {
        output.push_str(&format!("\n  [{}]", badge.label()));
    }
    if !day.date_parts.week_text.is_empty() {
        output.push_str(&format!("\n  {}", day.date_parts.week_text));
    }
    output
}

pub fn format_window(report: &WindowReport) -> String {
    format!(
        "Liturgical year {}\n  Start: {}\n  End: {}\n  Days: {}",
        report.end_year, report.window.start, report.window.end, report.days
    )
}

pub fn format_cycle(cycle: &Cycle, language: Language) -> String {
    format!("{}: {}", cycle.end_year, cycle.subtitle(language))
}

/// Format the season catalog.
pub fn format_seasons(seasons: &[SeasonEntry]) -> String {
    let mut output = format!("SEASONS ({})\n", seasons.len());
    output.push_str(&"-".repeat(40));
    for entry in seasons {
        output.push_str(&format!(
            "\n{} ({})\n  {}",
            entry.title, entry.key, entry.description
        ));
    }
    output
}

use chrono::{DateTime, Datelike, Local, Timelike, Utc};

use crate::models::Note;

use super::ui::truncate_for_display;

/// One-line label for selection lists: `#3 Groceries  [personal]`
pub fn note_line(note: &Note) -> String {
    let mut line = format!("#{} {}", note.id, truncate_for_display(&note.title, 48));
    if let Some(category) = note.category.as_deref() {
        line.push_str(&format!("  [{}]", category));
    }
    line
}

/// Print a note card: title, category, preview, date.
pub fn print_note_card(note: &Note) {
    println!("{}", note_line(note));

    let preview = note
        .summary_text()
        .unwrap_or_else(|| note.content.lines().next().unwrap_or(""));
    println!("  {}", truncate_for_display(preview, 72));

    let mut footer = format_card_date(&note.created_at);
    if note.is_ai_enhanced() {
        footer.push_str("  · AI enhanced");
    }
    println!("  {}", footer);
    println!();
}

/// Print the full detail view: metadata, summary, key points, content.
pub fn print_note_detail(note: &Note) {
    println!("{}\n", note.title);

    if let Some(category) = note.category.as_deref() {
        println!("  [{}]", category);
    }
    println!("  {}", format_detail_date(&note.created_at));

    if let Some(summary) = note.summary_text() {
        println!("\nSummary");
        println!("  {}", summary);
    }

    if let Some(points) = note.key_point_items() {
        println!("\nKey Points");
        for (i, point) in points.iter().enumerate() {
            println!("  {}. {}", i + 1, point);
        }
    }

    println!("\nContent");
    for line in note.content.lines() {
        println!("  {}", line);
    }
    println!();
}

/// Short date for cards: "Jan 5, 2026"
pub fn format_card_date(date: &DateTime<Utc>) -> String {
    let local = date.with_timezone(&Local);
    format!(
        "{} {}, {}",
        month_abbrev(local.month()),
        local.day(),
        local.year()
    )
}

/// Long date for the detail view: "January 5, 2026 at 3:04pm"
pub fn format_detail_date(date: &DateTime<Utc>) -> String {
    let local = date.with_timezone(&Local);
    let (is_pm, hour) = local.hour12();
    format!(
        "{} {}, {} at {}:{:02}{}",
        month_name(local.month()),
        local.day(),
        local.year(),
        hour,
        local.minute(),
        if is_pm { "pm" } else { "am" }
    )
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

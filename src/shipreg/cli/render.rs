use colored::Colorize;
use shipreg::api::{CmdMessage, MessageLevel};
use shipreg::error::Result;
use shipreg::model::Ship;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 24;
const PLANET_WIDTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum OutputMode {
    Table,
    Json,
}

pub(super) fn print_messages(messages: &[CmdMessage], mode: OutputMode) {
    // JSON mode keeps stdout machine-readable.
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
        };
        match mode {
            OutputMode::Table => println!("{}", line),
            OutputMode::Json => eprintln!("{}", line),
        }
    }
}

pub(super) fn print_ships(ships: &[Ship], mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(ships)?);
        }
        OutputMode::Table => {
            if ships.is_empty() {
                println!("No ships found.");
                return Ok(());
            }
            println!("{}", header().bold());
            for ship in ships {
                println!("{}", render_row(ship));
            }
        }
    }
    Ok(())
}

pub(super) fn print_count(count: usize, mode: OutputMode) {
    match mode {
        OutputMode::Json => println!("{}", count),
        OutputMode::Table => println!("{} ship(s)", count),
    }
}

fn header() -> String {
    format!(
        "{:>5}  {}  {}  {:<9}  {:<10}  {:<4}  {:>5}  {:>5}  {:>7}",
        "ID",
        pad("NAME", NAME_WIDTH),
        pad("PLANET", PLANET_WIDTH),
        "TYPE",
        "PROD DATE",
        "USED",
        "SPEED",
        "CREW",
        "RATING"
    )
}

fn render_row(ship: &Ship) -> String {
    format!(
        "{:>5}  {}  {}  {:<9}  {:<10}  {:<4}  {:>5.2}  {:>5}  {:>7.2}",
        ship.id,
        pad(&ship.name, NAME_WIDTH),
        pad(&ship.planet, PLANET_WIDTH),
        ship.ship_type.as_str(),
        ship.prod_date.format("%Y-%m-%d").to_string(),
        if ship.is_used { "yes" } else { "no" },
        ship.speed,
        ship.crew_size,
        ship.rating
    )
}

/// Truncates to `width` display columns (with an ellipsis) and pads to exactly `width`.
fn pad(s: &str, width: usize) -> String {
    let mut out = String::new();
    if s.width() <= width {
        out.push_str(s);
    } else {
        let mut current = 0;
        for c in s.chars() {
            let w = c.width().unwrap_or(0);
            if current + w > width.saturating_sub(1) {
                break;
            }
            out.push(c);
            current += w;
        }
        out.push('…');
    }
    let fill = width.saturating_sub(out.width());
    out.push_str(&" ".repeat(fill));
    out
}

use crate::errors::AppResult;
use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// One line of the local activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an activity line to the log at `path`.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let entry = ActivityEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", serde_json::to_string(&entry)?)?;
    Ok(())
}

/// Read every entry; unparsable lines are skipped.
pub fn read_entries(path: &Path) -> AppResult<Vec<ActivityEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = fs::File::open(path)?;
    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(entry) = serde_json::from_str::<ActivityEntry>(&line) {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "checkin" => Colour::Green,
        "checkout" => Colour::Red,
        "breakin" | "breakout" => Colour::Yellow,
        "login" => Colour::Blue,
        "logout" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Render the log as aligned, coloured lines.
pub fn render(entries: &[ActivityEntry]) -> Vec<String> {
    let op_w = entries
        .iter()
        .map(|e| op_target(e).len())
        .max()
        .unwrap_or(10)
        .min(60);
    let id_w = entries.len().to_string().len();
    let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

    entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let colored = {
                let color = color_for_operation(&e.operation);
                let mut s = color.paint(e.operation.as_str()).to_string();
                if !e.target.is_empty() {
                    s.push_str(&format!(" ({})", e.target));
                }
                s
            };
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));
            format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                i + 1,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            )
        })
        .collect()
}

fn op_target(e: &ActivityEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

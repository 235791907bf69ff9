use colored::Colorize;
use rosterapp::api::{CmdMessage, MessageLevel};
use rosterapp::model::Status;
use rosterapp::view::projection::ProjectedRow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 40;
const GAP: &str = "  ";
const HEADERS: [&str; 5] = ["#", "USERNAME", "EMAIL", "ROLE", "STATUS"];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_users(rows: &[ProjectedRow<'_>]) {
    print!("{}", render_users(rows));
}

/// Renders rows as an aligned table, one line per user, numbered by collection
/// position.
pub(super) fn render_users(rows: &[ProjectedRow<'_>]) -> String {
    if rows.is_empty() {
        return "No users found.\n".to_string();
    }

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            let user = row.user();
            [
                row.position.to_string(),
                truncate_to_width(&user.username, MAX_CELL_WIDTH),
                truncate_to_width(&user.email, MAX_CELL_WIDTH),
                user.role.to_string(),
                user.status.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut output = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad(h, *w))
        .collect();
    output.push_str(&format!("{}\n", header.join(GAP).trim_end().bold()));

    for (line, row) in cells.iter().zip(rows.iter()) {
        let number = pad(&line[0], widths[0]).yellow().to_string();
        let username = pad(&line[1], widths[1]);
        let email = pad(&line[2], widths[2]).dimmed().to_string();
        let role = pad(&line[3], widths[3]);
        let status = colorize_status(row.user().status, &line[4]);
        output.push_str(&format!(
            "{}\n",
            [number, username, email, role, status].join(GAP)
        ));
    }
    output
}

fn colorize_status(status: Status, text: &str) -> String {
    match status {
        Status::Active => text.green().to_string(),
        Status::Inactive => text.yellow().to_string(),
        Status::Banned => text.red().to_string(),
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

use crate::db::log::{OP_ADD, OP_DEL, OP_DEL_MONTH, OP_EDIT, OP_IMPORT, OP_INIT, OP_MIGRATION};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

/// Widest operation/target column before truncation
const OP_WIDTH_MAX: usize = 60;

/// ANSI colour per audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        OP_ADD | OP_IMPORT => Colour::Green,
        OP_DEL | OP_DEL_MONTH => Colour::Red,
        OP_EDIT => Colour::Yellow,
        OP_MIGRATION => Colour::Purple,
        OP_INIT => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &DbPool) -> AppResult<Vec<LogEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = Self::load(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        // visible "operation (target)" text, truncated
        let labels: Vec<String> = entries
            .iter()
            .map(|e| {
                let full = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                if full.chars().count() > OP_WIDTH_MAX {
                    let mut s: String = full.chars().take(OP_WIDTH_MAX - 3).collect();
                    s.push_str("...");
                    s
                } else {
                    full
                }
            })
            .collect();

        let op_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(10);
        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (e, label) in entries.iter().zip(&labels) {
            let color = color_for_operation(&e.operation);
            let padding = " ".repeat(op_w.saturating_sub(label.chars().count()));

            // only the operation word is coloured
            let painted = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(label.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                painted,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

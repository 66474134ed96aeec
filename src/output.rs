//! Renderização da saída dos comandos (tabela ou JSON)

use chrono::{TimeZone, Utc};
use serde::Serialize;
use std::io::Write;

use crate::config::OutputFormat;
use crate::utils::AppResult;

/// Tipo que sabe se apresentar como linha de tabela
pub trait Tabular {
    fn headers() -> &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

/// Monta a tabela com larguras dinâmicas (mínimo = largura do cabeçalho)
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    push_line(&mut out, headers.iter().map(|h| h.to_string()), &widths);
    let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in rows {
        push_line(&mut out, row.iter().cloned(), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let last = widths.len().saturating_sub(1);
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        if i == last {
            line.push_str(&cell);
        } else {
            let width = widths.get(i).copied().unwrap_or(0);
            let pad = width.saturating_sub(cell.chars().count());
            line.push_str(&cell);
            line.push_str(&" ".repeat(pad));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

pub fn print_list<T: Serialize + Tabular>(items: &[T], format: OutputFormat) -> AppResult<()> {
    let mut stdout = std::io::stdout().lock();
    write_list(&mut stdout, items, format)
}

/// Um item: objeto JSON (não lista) ou tabela de uma linha
pub fn print_one<T: Serialize + Tabular>(item: &T, format: OutputFormat) -> AppResult<()> {
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, item)?;
            writeln!(stdout)?;
            Ok(())
        }
        OutputFormat::Table => write_list(&mut stdout, std::slice::from_ref(item), format),
    }
}

pub fn write_list<W: Write, T: Serialize + Tabular>(
    out: &mut W,
    items: &[T],
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, items)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            if items.is_empty() {
                writeln!(out, "Nothing found.")?;
                return Ok(());
            }
            let rows: Vec<Vec<String>> = items.iter().map(Tabular::row).collect();
            write!(out, "{}", render_table(T::headers(), &rows))?;
        }
    }
    Ok(())
}

/// Mensagem de confirmação (`{"ok": true, "message": ...}` em JSON)
pub fn print_done(message: &str, format: OutputFormat) -> AppResult<()> {
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(
                &mut stdout,
                &serde_json::json!({ "ok": true, "message": message }),
            )?;
            writeln!(stdout)?;
        }
        OutputFormat::Table => writeln!(stdout, "{}", message)?,
    }
    Ok(())
}

/// Timestamp em ms → `YYYY-MM-DD HH:MM` (UTC); ausente → `-`
pub fn format_millis(ms: Option<i64>) -> String {
    ms.and_then(|ms| Utc.timestamp_millis_opt(ms).single())
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

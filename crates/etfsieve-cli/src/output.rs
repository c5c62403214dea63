use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(value: &Value, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(value),
    }

    Ok(())
}

/// Scalar fields first, then each array field as an aligned table.
fn render_table(value: &Value) {
    let Some(map) = value.as_object() else {
        println!("{value}");
        return;
    };

    for (key, field) in map {
        if !field.is_array() {
            println!("{key}: {}", render_cell(field));
        }
    }

    for (key, field) in map {
        if let Some(rows) = field.as_array() {
            println!();
            println!("{key}:");
            render_rows(rows);
        }
    }
}

fn render_rows(rows: &[Value]) {
    if rows.is_empty() {
        println!("  (none)");
        return;
    }

    let columns = collect_columns(rows);
    if columns.is_empty() {
        for row in rows {
            println!("  {}", render_cell(row));
        }
        return;
    }

    let mut table: Vec<Vec<String>> = vec![columns.clone()];
    for row in rows {
        table.push(
            columns
                .iter()
                .map(|column| {
                    row.get(column)
                        .map(render_cell)
                        .unwrap_or_else(|| String::from("-"))
                })
                .collect(),
        );
    }

    let widths: Vec<usize> = (0..columns.len())
        .map(|index| {
            table
                .iter()
                .map(|row| row[index].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for row in &table {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:width$}"))
            .collect();
        println!("  {}", line.join("  "));
    }
}

/// Union of object keys across rows, in first-seen order.
fn collect_columns(rows: &[Value]) -> Vec<String> {
    let mut columns = Vec::new();
    for row in rows {
        if let Some(map) = row.as_object() {
            for key in map.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Number(number) => match number.as_f64() {
            Some(float) if float.fract() != 0.0 => format!("{float:.4}"),
            _ => number.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_cells_render_as_dash() {
        assert_eq!(render_cell(&Value::Null), "-");
    }

    #[test]
    fn fractional_numbers_are_rounded_for_display() {
        assert_eq!(render_cell(&json!(1.23456789)), "1.2346");
        assert_eq!(render_cell(&json!(10)), "10");
    }

    #[test]
    fn columns_preserve_first_seen_order_across_rows() {
        let rows = vec![json!({"ticker": "XIC", "score": 1.0}), json!({"extra": 2})];
        // serde_json object keys are sorted, so "score" precedes "ticker".
        assert_eq!(collect_columns(&rows), vec!["score", "ticker", "extra"]);
    }
}

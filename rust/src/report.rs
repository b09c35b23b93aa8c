//! Console report of a computed schedule.

use rust_decimal::Decimal;

use crate::models::ScheduleResult;

const HEADERS: [&str; 10] = [
    "Task",
    "Predecessors",
    "Duration",
    "ES",
    "EF",
    "LS",
    "LF",
    "Slack",
    "Critical",
    "Successors",
];

/// Format a time value without trailing zeros (`6`, `2.5`).
pub fn format_number(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Render the per-task table with right-aligned columns.
pub fn format_table(result: &ScheduleResult) -> String {
    let rows: Vec<[String; 10]> = result
        .tasks
        .iter()
        .map(|t| {
            [
                t.task.clone(),
                t.predecessors.join(","),
                format_number(t.duration),
                format_number(t.es),
                format_number(t.ef),
                format_number(t.ls),
                format_number(t.lf),
                format_number(t.slack),
                if t.critical { "True" } else { "False" }.to_string(),
                t.successors.join(","),
            ]
        })
        .collect();

    let mut widths: [usize; 10] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_row(HEADERS.iter().copied(), &widths));
    for row in &rows {
        lines.push(render_row(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Render the critical chain(s), one `Critical path:` line each.
pub fn format_critical_path(result: &ScheduleResult) -> String {
    if result.critical_paths.is_empty() {
        return "Critical path: (none)".to_string();
    }
    result
        .critical_paths
        .iter()
        .map(|chain| format!("Critical path: {}", chain.join(" -> ")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::{analyze, TaskRecord};

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(dec("6.0")), "6");
        assert_eq!(format_number(dec("2.50")), "2.5");
        assert_eq!(format_number(dec("-0.0")), "0");
        assert_eq!(format_number(Decimal::from(49)), "49");
        assert_eq!(format_number(dec("0.1") + dec("0.2")), "0.3");
    }

    #[test]
    fn test_critical_path_lines() {
        let result = analyze(&[
            TaskRecord::new("s", "1", ""),
            TaskRecord::new("x", "4", "s"),
            TaskRecord::new("y", "4", "s"),
            TaskRecord::new("e", "2", "x,y"),
        ])
        .unwrap();

        assert_eq!(
            format_critical_path(&result),
            "Critical path: s -> x -> e\nCritical path: s -> y -> e"
        );
        assert_eq!(
            format_critical_path(&ScheduleResult::default()),
            "Critical path: (none)"
        );
    }

    #[test]
    fn test_table_alignment() {
        let result = analyze(&[
            TaskRecord::new("A", "6", ""),
            TaskRecord::new("Build", "12", "A"),
        ])
        .unwrap();

        let table = format_table(&result);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].trim_start().starts_with("Task"));
        assert!(lines[2].contains("Build"));
        assert!(lines[2].trim_end().ends_with("True"));
        let widths: Vec<usize> = lines.iter().map(|l| l.len()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
    }
}

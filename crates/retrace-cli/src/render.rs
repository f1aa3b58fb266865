use retrace_core::compare::Comparison;
use retrace_core::format::format_duration;

/// Renders the comparison as an aligned text table.
///
/// One row per retry count starting at 0, one column per policy, cells
/// formatted with the duration unit ladder. A summary of per-policy totals
/// follows the table.
pub fn render_table(board: &Comparison) -> String {
    let frame = board.frame();
    if frame.is_empty() {
        return String::from("no policies to compare\n");
    }

    let mut header = vec![String::from("retry")];
    header.extend(frame.columns().iter().map(|column| column.label().to_string()));

    let mut rows = Vec::with_capacity(frame.row_count());
    for retry in 0..frame.row_count() {
        let mut row = Vec::with_capacity(header.len());
        row.push(retry.to_string());
        for column in frame.columns() {
            let value = column.values().get(retry).copied().unwrap_or(0.0);
            row.push(format_duration(value));
        }
        rows.push(row);
    }

    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(&render_line(&header, &widths));
    for row in &rows {
        out.push_str(&render_line(row, &widths));
    }

    out.push('\n');
    for (column, entry) in frame.columns().iter().zip(board.entries()) {
        let total = column.values().last().copied().unwrap_or(0.0);
        out.push_str(&format!(
            "{} [{}]: last retry at {}\n",
            column.label(),
            entry.policy().kind,
            format_duration(total),
        ));
    }

    out
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:>1$}", cell, *width))
        .collect();

    let mut line = padded.join("  ");
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrace_core::schedule::no_jitter;
    use retrace_model::RetryPolicy;

    fn demo_board(budget: u32) -> Comparison {
        let mut board = Comparison::with_sampler(no_jitter()).with_budget(budget);
        board.add(RetryPolicy::linear(1000.0, 1000.0)).unwrap();
        board.add(RetryPolicy::exponential(1000.0, 2.0)).unwrap();
        board
    }

    #[test]
    fn empty_board_renders_placeholder() {
        let board = Comparison::with_sampler(no_jitter());
        assert_eq!(render_table(&board), "no policies to compare\n");
    }

    #[test]
    fn table_has_header_rows_and_summary() {
        let board = demo_board(3);
        let rendered = render_table(&board);
        let lines: Vec<&str> = rendered.lines().collect();

        // header + 4 rows + blank + 2 summary lines
        assert_eq!(lines.len(), 8);
        assert!(lines[0].contains("retry"));
        assert!(lines[0].contains("Config 1"));
        assert!(lines[0].contains("Config 2"));
    }

    #[test]
    fn first_row_is_zero_for_every_column() {
        let rendered = render_table(&demo_board(2));
        let row0 = rendered.lines().nth(1).unwrap();

        assert!(row0.trim_start().starts_with('0'));
        assert_eq!(row0.matches("0.00ms").count(), 2);
    }

    #[test]
    fn cells_use_the_duration_ladder() {
        let rendered = render_table(&demo_board(4));

        assert!(rendered.contains("1.00s"));
        assert!(rendered.contains("15.00s"));
    }

    #[test]
    fn summary_names_kind_and_total() {
        let rendered = render_table(&demo_board(4));

        assert!(rendered.contains("Config 1 [linear]: last retry at 10.00s"));
        assert!(rendered.contains("Config 2 [exponential]: last retry at 15.00s"));
    }

    #[test]
    fn columns_are_aligned_to_equal_line_length() {
        let rendered = render_table(&demo_board(5));
        let lines: Vec<&str> = rendered.lines().take_while(|l| !l.is_empty()).collect();

        let first = lines[0].len();
        assert!(lines.iter().all(|line| line.len() == first));
    }
}

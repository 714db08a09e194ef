use extremum_solvers::Trace;

/// Renders a trace as a GitHub-flavoured markdown table.
///
/// The first column is the row index; the value columns are headed `a`, `b`
/// for brackets and `x`, `y` for samples. Every column is right-aligned.
#[must_use]
pub fn render_trace(trace: &Trace) -> String {
    let [first, second] = trace.headers();

    let mut columns: [Vec<String>; 3] = [
        vec![String::new()],
        vec![first.to_owned()],
        vec![second.to_owned()],
    ];
    for (index, [u, v]) in trace.rows().into_iter().enumerate() {
        columns[0].push(index.to_string());
        columns[1].push(u.to_string());
        columns[2].push(v.to_string());
    }

    let widths = columns
        .each_ref()
        .map(|cells| cells.iter().map(String::len).max().unwrap_or(0).max(1));

    let mut table = String::new();
    for row in 0..columns[0].len() {
        for (cells, width) in columns.iter().zip(widths) {
            table.push_str(&format!("| {:>width$} ", cells[row]));
        }
        table.push_str("|\n");

        if row == 0 {
            for width in widths {
                table.push_str(&format!("|{}:", "-".repeat(width + 1)));
            }
            table.push_str("|\n");
        }
    }

    table
}

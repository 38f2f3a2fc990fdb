use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    print!("{}", format_table(headers, rows, Align::Left));
}

#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Right,
}

/// Render a header line plus rows, columns padded to the widest cell.
pub fn format_table(headers: &[&str], rows: &[Vec<String>], align: Align) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                match align {
                    Align::Left => format!("{:<width$}", cell, width = w),
                    Align::Right => format!("{:>width$}", cell, width = w),
                }
            })
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = line(headers.to_vec());
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_pad_to_widest_cell() {
        let text = format_table(
            &["HOLE", "1", "10"],
            &[vec!["SCORE".to_string(), "12".to_string(), "4".to_string()]],
            Align::Right,
        );
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " HOLE   1  10");
        assert_eq!(lines[1], "SCORE  12   4");
    }
}

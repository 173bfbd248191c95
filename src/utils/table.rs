//! Plain-text table rendering for `list` and the `months` grid.
//!
//! Column widths are fitted to the widest cell. Cells may carry ANSI color
//! sequences; padding is computed on the visible width.

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_width(h)).collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(visible_width(cell));
                }
            }
        }

        let mut out = String::new();

        for (i, header) in self.headers.iter().enumerate() {
            push_padded(&mut out, header, widths[i]);
        }
        out.push('\n');

        for (i, _) in self.headers.iter().enumerate() {
            push_padded(&mut out, &"-".repeat(widths[i]), widths[i]);
        }
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                push_padded(&mut out, cell, widths[i]);
            }
            out.push('\n');
        }

        out
    }
}

fn push_padded(out: &mut String, cell: &str, width: usize) {
    out.push_str(cell);
    let pad = width.saturating_sub(visible_width(cell)) + 2;
    out.push_str(&" ".repeat(pad));
}

/// Character count ignoring ANSI escape sequences (ESC '[' ... final byte).
fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            width += 1;
        }
    }

    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fit_widest_cell() {
        let mut t = Table::new(vec!["A", "Long header"]);
        t.add_row(vec!["wide cell value".to_string(), "x".to_string()]);

        let rendered = t.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("A                "));
        assert!(lines[1].contains("---------------"));
        assert!(lines[2].starts_with("wide cell value"));
    }

    #[test]
    fn ansi_sequences_do_not_count_toward_width() {
        assert_eq!(visible_width("\x1b[90m7.00\x1b[0m"), 4);
        assert_eq!(visible_width("7.00"), 4);
    }
}

//! Single-line CSV splitting.

/// Split one line of CSV text into cells.
///
/// A `"` toggles the quoted state and is dropped; a `,` inside quotes is kept
/// as content. A trailing cell is always emitted, so `""` yields one empty
/// cell. Doubled quotes are not un-escaped: `"a ""b"""` splits as `a b`.
/// Unbalanced quotes never fail; the rest of the line is read as quoted.
#[must_use]
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(ch),
        }
    }

    cells.push(cell);
    cells
}

//! Spreadsheet-style column labels (A, B, ..., Z, AA, AB, ...)

/// Convert column index to letter(s): 0->A, 1->B, ..., 25->Z, 26->AA, etc.
///
/// Bijective base-26: there is no zero digit, so `ZZ` (701) is followed by
/// `AAA` (702) rather than `BAA`.
pub fn column_label(col: usize) -> String {
    let mut result = String::new();
    let mut n = col;
    loop {
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}

/// Parse a column label back into its index (case-insensitive)
///
/// Returns `None` for empty input, non-letters, or labels that overflow `usize`.
pub fn parse_column_label(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }

    let mut value: usize = 0;
    for ch in label.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        value = value.checked_mul(26)?.checked_add(digit)?;
    }
    Some(value - 1)
}

/// Excel-style reference for a cell (`A1`, `B5`, ...)
///
/// `visible_row` is the zero-based position in the current view; the printed
/// number is one-based, matching the row headers a UI shows.
pub fn cell_reference(visible_row: usize, col: usize) -> String {
    format!("{}{}", column_label(col), visible_row + 1)
}

/// Split an `A1`-style reference into zero-based (visible_row, column)
pub fn parse_cell_reference(reference: &str) -> Option<(usize, usize)> {
    let split = reference
        .find(|c: char| c.is_ascii_digit())
        .filter(|&i| i > 0)?;
    let (letters, digits) = reference.split_at(split);
    let col = parse_column_label(letters)?;
    let row: usize = digits.parse().ok()?;
    Some((row.checked_sub(1)?, col))
}

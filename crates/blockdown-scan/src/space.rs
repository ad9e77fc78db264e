//! Space and column scanners.

/// Skip up to three leading spaces. Never fails.
pub fn scan_nonindent_space(s: &str) -> &str {
    scan_spaces_up_to(s, 3)
}

/// Require exactly four leading spaces.
pub fn scan_indent_space(s: &str) -> Option<&str> {
    s.strip_prefix("    ")
}

/// Match a line consisting solely of spaces.
pub fn scan_blank_line(s: &str) -> Option<&str> {
    if s.bytes().all(|b| b == b' ') {
        Some("")
    } else {
        None
    }
}

/// Consume spaces until the column reaches `col`, given that the slice
/// starts at column `cur_col`. Fails if anything but a space occurs first.
pub fn scan_spaces_to_column(s: &str, cur_col: u32, col: u32) -> Option<&str> {
    if col <= cur_col {
        return Some(s);
    }
    let needed = (col - cur_col) as usize;
    let bytes = s.as_bytes();
    if bytes.len() >= needed && bytes[..needed].iter().all(|&b| b == b' ') {
        Some(&s[needed..])
    } else {
        None
    }
}

/// Lenient variant of [`scan_spaces_to_column`]: consume the spaces that
/// are there, stop early at the first non-space. Never fails.
pub fn scan_spaces_up_to_column(s: &str, cur_col: u32, col: u32) -> &str {
    if col <= cur_col {
        return s;
    }
    scan_spaces_up_to(s, col - cur_col)
}

/// Consume up to `n` leading spaces.
pub fn scan_spaces_up_to(s: &str, n: u32) -> &str {
    let mut rest = s;
    let mut k = 0;
    while k < n {
        match rest.strip_prefix(' ') {
            Some(r) => rest = r,
            None => break,
        }
        k += 1;
    }
    rest
}

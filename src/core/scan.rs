// src/core/scan.rs
// Byte-level scanners for ranking lines. Every boundary they return sits on an
// ASCII byte, so the offsets are always safe to slice with.

#[inline]
fn digit_run(b: &[u8], from: usize) -> usize {
    let mut j = from;
    while j < b.len() && b[j].is_ascii_digit() { j += 1; }
    j
}

/// Leading `N.`, `N)`, `N:` or `N ` with one or two digits.
/// Returns the rank and the rest of the line after any following whitespace.
pub fn leading_rank(line: &str) -> Option<(u32, &str)> {
    let b = line.as_bytes();
    let end = digit_run(b, 0);
    if end == 0 || end > 2 { return None; }

    let delim = line[end..].chars().next()?;
    if !(matches!(delim, '.' | ')' | ':') || delim.is_whitespace()) {
        return None;
    }
    let rank: u32 = line[..end].parse().ok()?;
    let rest = line[end + delim.len_utf8()..].trim_start();
    Some((rank, rest))
}

/// First standalone `D{1,3}-D{1,3}` at or after `from`, as a byte span.
/// Digit runs longer than three never count, and a run is never split.
pub fn find_record(s: &str, from: usize) -> Option<(usize, usize)> {
    let b = s.as_bytes();
    let n = b.len();
    let mut i = from;
    while i < n {
        if !b[i].is_ascii_digit() { i += 1; continue; }

        let j = digit_run(b, i);
        if j - i <= 3 && j < n && b[j] == b'-' {
            let k = digit_run(b, j + 1);
            let len2 = k - (j + 1);
            if (1..=3).contains(&len2) {
                return Some((i, k));
            }
        }
        i = j;
    }
    None
}

/// Every record token in `s`, left to right.
pub fn records_in(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((a, z)) = find_record(s, pos) {
        out.push(&s[a..z]);
        pos = z;
    }
    out
}

/// First `(` that has a closing `)` after it. Returns (open, close) byte offsets.
pub fn paren_group(s: &str) -> Option<(usize, usize)> {
    let open = s.find('(')?;
    let close = s[open + 1..].find(')')? + open + 1;
    Some((open, close))
}

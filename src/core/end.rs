//! Telomere end identifiers and their two orderings.
//!
//! A telomere end is a chromosome name with an arm suffix (`chr1p`, `chr1q`).
//! Identifiers are plain strings and compare case-sensitively. Two orderings
//! are used by the reports:
//!
//! - **Lexical**: plain `str` ordering, so `chr10p` < `chr2p`
//! - **Natural**: digit runs compare numerically and text runs
//!   case-insensitively, so `chr2p` < `chr10p`

use std::cmp::Ordering;

/// Short arm suffix
pub const P_ARM: char = 'p';

/// Long arm suffix
pub const Q_ARM: char = 'q';

/// The two telomere ends of a chromosome, `p` first
pub fn arm_ends(chromosome: &str) -> [String; 2] {
    [format!("{chromosome}{P_ARM}"), format!("{chromosome}{Q_ARM}")]
}

/// Whether an end belongs to a sex chromosome.
///
/// Any `X` or `Y` anywhere in the identifier counts, in either case.
pub fn is_sex_linked(end: &str) -> bool {
    end.chars().any(|c| matches!(c, 'X' | 'x' | 'Y' | 'y'))
}

pub fn is_autosomal(end: &str) -> bool {
    !is_sex_linked(end)
}

#[derive(Debug)]
enum Chunk<'a> {
    Text(String),
    Digits(&'a str),
}

/// Split into text/digit runs. The result always starts and ends with a text
/// run (possibly empty), so chunks at the same position have the same kind.
fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_digits = false;

    for (i, c) in s.char_indices() {
        let is_digit = c.is_ascii_digit();
        if is_digit != in_digits {
            let run = &s[start..i];
            out.push(if in_digits {
                Chunk::Digits(run)
            } else {
                Chunk::Text(run.to_lowercase())
            });
            start = i;
            in_digits = is_digit;
        }
    }

    let tail = &s[start..];
    if in_digits {
        out.push(Chunk::Digits(tail));
        out.push(Chunk::Text(String::new()));
    } else {
        out.push(Chunk::Text(tail.to_lowercase()));
    }
    out
}

/// Compare two digit runs by numeric value without overflow
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Natural ordering of two identifiers
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = chunks(a);
    let right = chunks(b);

    for (l, r) in left.iter().zip(right.iter()) {
        let ord = match (l, r) {
            (Chunk::Text(x), Chunk::Text(y)) => x.cmp(y),
            (Chunk::Digits(x), Chunk::Digits(y)) => cmp_digits(x, y),
            (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
            (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    left.len().cmp(&right.len())
}

/// Stable natural sort
pub fn natural_sort(ends: &mut [String]) {
    ends.sort_by(|a, b| natural_cmp(a, b));
}

//! Accent folding for strings handed to external commands.
//!
//! Replaces a fixed set of accented characters with their plain ASCII
//! equivalents. Characters outside the table pass through unchanged.

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// Substitution table mapping accented characters to ASCII
    static ref ACCENT_TABLE: HashMap<char, char> = [
        ('à', 'a'),
        ('á', 'a'),
        ('â', 'a'),
        ('ä', 'a'),
        ('ç', 'c'),
        ('é', 'e'),
        ('è', 'e'),
        ('ê', 'e'),
        ('ë', 'e'),
        ('î', 'i'),
        ('ï', 'i'),
        ('ô', 'o'),
        ('ö', 'o'),
        ('ù', 'u'),
        ('û', 'u'),
        ('ü', 'u'),
        ('ÿ', 'y'),
        ('À', 'A'),
        ('É', 'E'),
        ('Ô', 'O'),
    ]
    .iter()
    .copied()
    .collect();
}

/// Replace accented characters with their ASCII equivalents.
pub fn fold_accents(input: &str) -> String {
    input
        .chars()
        .map(|c| ACCENT_TABLE.get(&c).copied().unwrap_or(c))
        .collect()
}

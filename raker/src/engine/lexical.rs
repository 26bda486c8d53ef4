//! Character classes the scanner cares about.

/// LF, CR, LINE SEPARATOR and PARAGRAPH SEPARATOR.
#[must_use]
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Horizontal whitespace: tab, vertical tab, form feed, BOM and every
/// Unicode space separator. Line terminators are not whitespace here.
#[must_use]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\u{0B}' | '\u{0C}' | '\u{FEFF}')
        || (c.is_whitespace() && !c.is_control() && !is_line_terminator(c))
}

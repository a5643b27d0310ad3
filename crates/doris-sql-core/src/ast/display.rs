//! Helpers shared by the `Display` impls that print canonical SQL.

use std::fmt;

/// Displays a slice with a separator between items.
pub struct DisplaySeparated<'a, T> {
    items: &'a [T],
    sep: &'static str,
}

impl<T: fmt::Display> fmt::Display for DisplaySeparated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(self.sep)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// `a, b, c`
pub const fn comma_separated<T: fmt::Display>(items: &[T]) -> DisplaySeparated<'_, T> {
    DisplaySeparated { items, sep: ", " }
}

/// A single-quoted SQL string with MySQL backslash escapes.
pub struct QuotedString<'a>(pub &'a str);

impl fmt::Display for QuotedString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        for c in self.0.chars() {
            match c {
                '\'' => f.write_str("\\'")?,
                '\\' => f.write_str("\\\\")?,
                '\0' => f.write_str("\\0")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                '\u{8}' => f.write_str("\\b")?,
                '\u{1a}' => f.write_str("\\Z")?,
                other => write!(f, "{other}")?,
            }
        }
        f.write_str("'")
    }
}

/// Writes ` (a, b)` when `items` is non-empty.
pub fn write_paren_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    if items.is_empty() {
        Ok(())
    } else {
        write!(f, " ({})", comma_separated(items))
    }
}

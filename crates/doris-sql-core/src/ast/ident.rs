//! Identifiers and qualified names.

use std::fmt;

use crate::lexer::Keyword;

/// A single identifier.
///
/// `quoted` records whether the name was backtick-quoted in the source;
/// quoted names are printed with backticks again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub value: String,
    pub quoted: bool,
}

impl Ident {
    /// Creates an identifier, quoting it only if it could not be read back
    /// bare (reserved words, spaces, leading digits, ...).
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let quoted = needs_quoting(&value);
        Self { value, quoted }
    }

    /// Creates a backtick-quoted identifier.
    #[must_use]
    pub fn quoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: true,
        }
    }

    /// Compares names ignoring ASCII case, the way unquoted names resolve.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.value.eq_ignore_ascii_case(name)
    }
}

fn needs_quoting(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    if !(first.is_alphabetic() || first == '_') {
        return true;
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return true;
    }
    Keyword::from_str(value).is_some_and(Keyword::is_reserved)
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "`{}`", self.value.replace('`', "``"))
        } else {
            f.write_str(&self.value)
        }
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A dotted name such as `catalog.db.table` or `t.column`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectName(pub Vec<Ident>);

impl ObjectName {
    /// Builds a name from dotted parts.
    #[must_use]
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// The last part: the object itself.
    #[must_use]
    pub fn base(&self) -> Option<&Ident> {
        self.0.last()
    }

    /// Everything before the last part.
    #[must_use]
    pub fn qualifier(&self) -> &[Ident] {
        match self.0.split_last() {
            Some((_, init)) => init,
            None => &[],
        }
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

impl From<Ident> for ObjectName {
    fn from(ident: Ident) -> Self {
        Self(vec![ident])
    }
}

impl From<&str> for ObjectName {
    fn from(name: &str) -> Self {
        Self(vec![Ident::new(name)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_quoting() {
        assert!(!Ident::new("users").quoted);
        assert!(!Ident::new("comment").quoted);
        assert!(Ident::new("select").quoted);
        assert!(Ident::new("my table").quoted);
        assert!(Ident::new("1st").quoted);
        assert_eq!(Ident::new("a`b").to_string(), "`a``b`");
    }

    #[test]
    fn test_object_name_parts() {
        let name = ObjectName::new(["ctl", "db", "t"]);
        assert_eq!(name.to_string(), "ctl.db.t");
        assert_eq!(name.base().map(|i| i.value.as_str()), Some("t"));
        assert_eq!(name.qualifier().len(), 2);
    }
}

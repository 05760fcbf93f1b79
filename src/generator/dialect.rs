use serde::{Deserialize, Serialize};

/// Identifier quoting style of the target engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStyle {
    #[default]
    DoubleQuote,
    Backtick,
}

/// Engine-specific generation policy. A value, not a guess at one fixed
/// engine: callers pick quoting and join support per target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dialect {
    pub quote_style: QuoteStyle,
    pub supports_full_outer_join: bool,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            quote_style: QuoteStyle::DoubleQuote,
            supports_full_outer_join: true,
        }
    }
}

impl Dialect {
    /// Renders an identifier, quoting only when the name is not a plain word.
    /// Names coming out of the parser are always plain; quoting matters for
    /// names typed directly into the builder UI.
    pub fn ident(&self, name: &str) -> String {
        if name == "*" {
            return name.to_string();
        }

        let plain = !name.is_empty()
            && name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
        if plain {
            return name.to_string();
        }

        match self.quote_style {
            QuoteStyle::DoubleQuote => format!("\"{}\"", name.replace('"', "\"\"")),
            QuoteStyle::Backtick => format!("`{}`", name.replace('`', "``")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::generator::{Dialect, QuoteStyle};

    #[test]
    pub fn test_ident_plain_names_stay_bare() {
        let dialect = Dialect::default();

        assert_eq!(dialect.ident("employees"), "employees");
        assert_eq!(dialect.ident("full_name"), "full_name");
        assert_eq!(dialect.ident("*"), "*");
    }

    #[test]
    pub fn test_ident_quotes_names_with_spaces() {
        let dialect = Dialect::default();

        assert_eq!(dialect.ident("first name"), "\"first name\"");
    }

    #[test]
    pub fn test_ident_backtick_style() {
        let dialect = Dialect { quote_style: QuoteStyle::Backtick, ..Dialect::default() };

        assert_eq!(dialect.ident("first name"), "`first name`");
        assert_eq!(dialect.ident("a`b"), "`a``b`");
    }

    #[test]
    pub fn test_ident_escapes_embedded_quotes() {
        let dialect = Dialect::default();

        assert_eq!(dialect.ident("a\"b"), "\"a\"\"b\"");
    }
}

use std::fmt;

use crate::css::Value;

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: Value,
    pub important: bool,
}

impl Declaration {
    pub fn new(property: &'static str, value: Value) -> Self {
        Self {
            property,
            value,
            important: false,
        }
    }

    /// Marks the declaration `!important` so it wins over the host's own
    /// widget styling.
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)?;

        if self.important {
            f.write_str(" !important")?;
        }

        Ok(())
    }
}

/// A selector with an ordered declaration block.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    pub fn decl(mut self, property: &'static str, value: Value) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    pub fn push(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;

        for declaration in &self.declarations {
            writeln!(f, "    {declaration};")?;
        }

        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ColorTokenKind;

    #[test]
    fn test_declaration_display() {
        let declaration =
            Declaration::new("background-color", Value::Token(ColorTokenKind::PixelBlack));
        assert_eq!(declaration.to_string(), "background-color: var(--pixel-black)");
    }

    #[test]
    fn test_important_suffix() {
        let declaration = Declaration::new("color", Value::Token(ColorTokenKind::CoralMain))
            .important();
        assert_eq!(declaration.to_string(), "color: var(--coral-main) !important");
    }

    #[test]
    fn test_rule_display_is_indented_block() {
        let rule = Rule::new(".stApp")
            .decl("background-color", Value::Token(ColorTokenKind::PixelBlack));

        assert_eq!(
            rule.to_string(),
            ".stApp {\n    background-color: var(--pixel-black);\n}"
        );
    }
}

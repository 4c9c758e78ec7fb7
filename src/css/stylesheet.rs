use std::fmt;

use indexmap::IndexMap;
use quest_theme_units::Color;
use thiserror::Error;

use crate::{
    css::{Declaration, Keyframes, Rule},
    theme::ColorTokenKind,
};

/// An assembled stylesheet: font imports, the `:root` token block, component
/// rules in insertion order, and keyframe sequences.
///
/// Rendering is a pure function of the contents, so applying the same theme
/// twice yields byte-identical output.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    imports: Vec<String>,
    tokens: Vec<(ColorTokenKind, Color)>,
    rules: IndexMap<String, Vec<Declaration>>,
    keyframes: Vec<Keyframes>,
}

#[derive(Debug, Error, PartialEq)]
#[error("literal color value in `{selector}` ({declaration})")]
pub struct LintError {
    pub selector: String,
    pub declaration: String,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_import(&mut self, url: impl Into<String>) {
        self.imports.push(url.into());
    }

    pub fn push_token(&mut self, token: ColorTokenKind, color: Color) {
        self.tokens.push((token, color));
    }

    /// Appends a rule, merging declarations into any earlier rule with the
    /// same selector.
    pub fn push_rule(&mut self, rule: Rule) {
        self.rules
            .entry(rule.selector)
            .or_default()
            .extend(rule.declarations);
    }

    pub fn push_keyframes(&mut self, keyframes: Keyframes) {
        self.keyframes.push(keyframes);
    }

    /// Looks up the declarations bound to a selector.
    pub fn get(&self, selector: &str) -> Option<&[Declaration]> {
        self.rules.get(selector).map(Vec::as_slice)
    }

    pub fn keyframes(&self) -> &[Keyframes] {
        &self.keyframes
    }

    /// Verifies that no component rule or keyframe stop carries a literal
    /// color value; every color must go through a `var(--token)` reference.
    /// An authoring-time diagnostic, not a runtime failure path.
    pub fn lint(&self) -> Result<(), LintError> {
        for (selector, declarations) in &self.rules {
            for declaration in declarations {
                if declaration.to_string().contains('#') {
                    return Err(LintError {
                        selector: selector.clone(),
                        declaration: declaration.to_string(),
                    });
                }
            }
        }

        for keyframes in &self.keyframes {
            for stop in keyframes.stops() {
                for declaration in &stop.declarations {
                    if declaration.to_string().contains('#') {
                        return Err(LintError {
                            selector: format!("@keyframes {}", keyframes.name()),
                            declaration: declaration.to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Renders the full stylesheet text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for url in &self.imports {
            out.push_str(&format!("@import url('{url}');\n\n"));
        }

        if !self.tokens.is_empty() {
            out.push_str(":root {\n");

            for (token, color) in &self.tokens {
                out.push_str(&format!("    {}: {};\n", token.var_name(), color));
            }

            out.push_str("}\n\n");
        }

        for (selector, declarations) in &self.rules {
            out.push_str(&format!("{selector} {{\n"));

            for declaration in declarations {
                out.push_str(&format!("    {declaration};\n"));
            }

            out.push_str("}\n\n");
        }

        for keyframes in &self.keyframes {
            out.push_str(&keyframes.to_string());
            out.push_str("\n\n");
        }

        // One trailing newline.
        out.truncate(out.trim_end().len());
        out.push('\n');
        out
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

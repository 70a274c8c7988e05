//! Per-variant rendering rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::variant::Variant;
use crate::{Error, Result};

/// A pure rule mapping `(index, name)` to one piece of generated text.
///
/// Implemented for closures, so a test can pass
/// `|i, name: &str| format!("{i} => E::{name},\n")` directly.
pub trait Render {
    fn render(&self, index: usize, name: &str) -> String;
}

impl<F> Render for F
where
    F: Fn(usize, &str) -> String,
{
    fn render(&self, index: usize, name: &str) -> String {
        self(index, name)
    }
}

/// Render every variant in order and concatenate the results.
pub fn render_region(renderer: &dyn Render, variants: &[Variant]) -> String {
    variants
        .iter()
        .map(|v| renderer.render(v.index, &v.name))
        .collect()
}

/// Tokens: escaped braces, a placeholder, or a stray brace.
static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}|\{[^{}]*\}|[{}]").expect("Invalid template regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Index,
    Name,
    NameLower,
    NameUpper,
    NameSnake,
}

/// A string template rendered once per variant.
///
/// Placeholders: `{index}`, `{name}`, `{name_lower}`, `{name_upper}`,
/// `{name_snake}`. Literal braces are written `{{` and `}}`.
///
/// ```
/// use regen_core::{Render, Template};
///
/// let template = Template::parse("{index} => E::{name},\n").unwrap();
/// assert_eq!(template.render(2, "C"), "2 => E::C,\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    pieces: Vec<Piece>,
}

impl Template {
    /// Parse a template, rejecting unknown placeholders and stray braces.
    pub fn parse(source: &str) -> Result<Self> {
        let invalid = |message: String| Error::Template {
            template: source.to_string(),
            message,
        };

        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut last = 0;

        for token in TOKEN_REGEX.find_iter(source) {
            literal.push_str(&source[last..token.start()]);
            last = token.end();

            let placeholder = match token.as_str() {
                "{{" => {
                    literal.push('{');
                    continue;
                }
                "}}" => {
                    literal.push('}');
                    continue;
                }
                "{" | "}" => {
                    return Err(invalid(format!("unbalanced brace at byte {}", token.start())));
                }
                "{index}" => Piece::Index,
                "{name}" => Piece::Name,
                "{name_lower}" => Piece::NameLower,
                "{name_upper}" => Piece::NameUpper,
                "{name_snake}" => Piece::NameSnake,
                other => return Err(invalid(format!("unknown placeholder {other}"))),
            };

            if !literal.is_empty() {
                pieces.push(Piece::Literal(std::mem::take(&mut literal)));
            }
            pieces.push(placeholder);
        }

        literal.push_str(&source[last..]);
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            pieces,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Render for Template {
    fn render(&self, index: usize, name: &str) -> String {
        let mut out = String::with_capacity(self.source.len() + name.len());
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Index => out.push_str(&index.to_string()),
                Piece::Name => out.push_str(name),
                Piece::NameLower => out.push_str(&name.to_lowercase()),
                Piece::NameUpper => out.push_str(&name.to_uppercase()),
                Piece::NameSnake => out.push_str(&to_snake_case(name)),
            }
        }
        out
    }
}

fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev != '_'
                && (prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower))
            {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

//! Hand-written scanner for LUI source text.
//!
//! [`tokenize`] converts the resolver's combined source into a flat
//! token stream in a single forward pass. Classification of bare words
//! is context-sensitive and handled by [`classify::classify_word`] with
//! a read-only lookback over the tokens emitted so far; everything else
//! dispatches on the current character.
//!
//! Positions are tracked as 1-based line:column and attached to every
//! lexical error.

pub mod classify;
pub mod token;

pub use token::{LayerEdge, Literal, Token, Visibility};

use crate::error::LuiError;
use crate::vocab;
use classify::{WordClass, classify_word};

/// Scans `input` into tokens, or fails on the first lexical error.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LuiError> {
    let mut scanner = Scanner::new(input);
    let tokens = scanner.run()?;
    log::trace!("tokenized {} chars into {} tokens", input.len(), tokens.len());
    Ok(tokens)
}

struct Scanner {
    input: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            current: 0,
            line: 1,
            column: 1,
        }
    }

    fn run(&mut self) -> Result<Vec<Token>, LuiError> {
        let mut tokens = Vec::new();

        while let Some(c) = self.peek() {
            if is_inline_whitespace(c) {
                self.consume();
                continue;
            }

            if c == '/' && self.peek_next() == Some('/') {
                // An equals sign with nothing but a comment after it has
                // no value to bind.
                if matches!(tokens.last(), Some(Token::Equals)) {
                    return Err(self.error("expected value after ="));
                }
                tokens.push(self.comment());
                continue;
            }

            if c == '\n' {
                tokens.push(Token::Newline);
                self.consume();
                self.line += 1;
                self.column = 1;
                continue;
            }

            if c == 'L' && self.rest_starts_with("LAYER ") {
                tokens.push(self.layer_marker()?);
                continue;
            }

            if c == '@' {
                tokens.push(self.media()?);
                continue;
            }

            if c == '$' {
                tokens.push(self.identifier()?);
                continue;
            }

            if c == ':' {
                tokens.push(self.pseudo_class()?);
                continue;
            }

            if c.is_ascii_digit() || (c == '-' && self.peek_next().is_some_and(|n| n.is_ascii_digit())) {
                tokens.push(self.number());
                continue;
            }

            if is_word_char(c) {
                tokens.push(self.word(&tokens));
                continue;
            }

            if c == '%' {
                self.consume();
                tokens.push(Token::ValueType("%".to_string()));
                continue;
            }

            if c == '{' {
                tokens.push(self.variable_reference()?);
                continue;
            }

            if c == '#' {
                tokens.push(self.hex_color());
                continue;
            }

            if c == '=' {
                self.consume();
                tokens.push(Token::Equals);
                self.skip_inline_whitespace();
                if self.at_end() || self.peek() == Some('\n') {
                    return Err(self.error("expected value after ="));
                }
                // A trailing comment is handled by the comment branch,
                // which raises the same error when it follows `=`.
                let at_comment = self.peek() == Some('/') && self.peek_next() == Some('/');
                if !at_comment {
                    tokens.push(self.value_after_equals()?);
                }
                continue;
            }

            match c {
                '[' => {
                    self.consume();
                    tokens.push(Token::LeftBracket);
                }
                ']' => {
                    self.consume();
                    tokens.push(Token::RightBracket);
                }
                ',' => {
                    self.consume();
                    tokens.push(Token::Comma);
                }
                other => {
                    self.consume();
                    tokens.push(Token::Unknown(other));
                }
            }
        }

        Ok(tokens)
    }

    /// `// text` or `//* text`; runs to end of line.
    fn comment(&mut self) -> Token {
        self.consume();
        self.consume();

        let visibility = if self.peek() == Some('*') {
            self.consume();
            Visibility::Public
        } else {
            Visibility::Private
        };

        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.consume();
        }

        Token::Comment {
            visibility,
            text: text.trim().to_string(),
        }
    }

    /// `LAYER <name> START|END`, one per resolved source file.
    fn layer_marker(&mut self) -> Result<Token, LuiError> {
        self.advance("LAYER ".len());

        let name = self.take_until_space();
        self.skip_inline_whitespace();
        let action = self.take_until_space();

        let edge = match action.as_str() {
            "START" => LayerEdge::Start,
            "END" => LayerEdge::End,
            other => return Err(self.error(format!("unknown LAYER action: {other}"))),
        };

        // The marker owns its line; swallow the terminator.
        if self.peek() == Some('\n') {
            self.consume();
            self.line += 1;
            self.column = 1;
        }

        Ok(Token::LayerMarker { name, edge })
    }

    /// `@768px` or `@{breakpoint}` — the right-hand side of a media condition.
    fn media(&mut self) -> Result<Token, LuiError> {
        self.consume();

        if self.peek() == Some('{') {
            self.consume();
            let name = self.take_until_brace_close()?;
            return Ok(Token::MediaVariableRef(name));
        }

        let mut value = String::new();
        while let Some(c) = self.peek() {
            if is_word_char(c) || c == '%' {
                value.push(c);
                self.consume();
            } else {
                break;
            }
        }

        if value.is_empty() {
            return Err(self.error("expected media value after @"));
        }
        Ok(Token::MediaValue(value))
    }

    /// `$all`, `$top`, ... — must name a recognized identifier.
    fn identifier(&mut self) -> Result<Token, LuiError> {
        self.consume();

        let mut value = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                value.push(c);
                self.consume();
            } else {
                break;
            }
        }

        if vocab::IDENTIFIERS.contains(value.as_str()) {
            Ok(Token::Identifier(value))
        } else {
            Err(self.error(format!("unknown identifier: ${value}")))
        }
    }

    /// `:hover`, `:nth-child(2n)` — name plus optional parenthesized
    /// argument, nesting-aware.
    fn pseudo_class(&mut self) -> Result<Token, LuiError> {
        self.consume();

        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '-' {
                name.push(c);
                self.consume();
            } else {
                break;
            }
        }

        let mut full = name.clone();
        if self.peek() == Some('(') {
            let mut depth = 0usize;
            while let Some(c) = self.peek() {
                match c {
                    '(' => depth += 1,
                    ')' => depth -= 1,
                    '\n' => break,
                    _ => {}
                }
                full.push(c);
                self.consume();
                if depth == 0 {
                    break;
                }
            }
        }

        if vocab::PSEUDO_CLASSES.contains(name.as_str()) {
            Ok(Token::PseudoClass(full))
        } else {
            Err(self.error(format!("unknown pseudo-class: :{name}")))
        }
    }

    /// Numeric literal: optional leading `-`, optional `.`-fraction or
    /// `/`-rational suffix, optional trailing unit letters. Only a bare
    /// integer stays numeric; anything richer is kept as text.
    fn number(&mut self) -> Token {
        let mut value = String::new();
        let mut plain_integer = true;

        if self.peek() == Some('-') {
            value.push('-');
            self.consume();
        }

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                value.push(c);
                self.consume();
            } else {
                break;
            }
        }

        if let Some(sep) = self.peek() {
            if (sep == '.' || sep == '/') && self.peek_next().is_some_and(|n| n.is_ascii_digit()) {
                plain_integer = false;
                value.push(sep);
                self.consume();
                while let Some(c) = self.peek() {
                    if c.is_ascii_digit() {
                        value.push(c);
                        self.consume();
                    } else {
                        break;
                    }
                }
            }
        }

        while let Some(c) = self.peek() {
            if c.is_ascii_alphabetic() {
                plain_integer = false;
                value.push(c);
                self.consume();
            } else {
                break;
            }
        }

        match value.parse::<i64>() {
            Ok(n) if plain_integer => Token::Value(Literal::Number(n)),
            _ => Token::Value(Literal::Text(value)),
        }
    }

    /// A bare word, classified against the emitted token prefix.
    fn word(&mut self, prior: &[Token]) -> Token {
        let mut value = String::new();
        while let Some(c) = self.peek() {
            if is_word_char(c) {
                value.push(c);
                self.consume();
            } else {
                break;
            }
        }

        match classify_word(&value, prior) {
            WordClass::Keyword => Token::Keyword(value),
            WordClass::Value => Token::Value(Literal::Text(value)),
            WordClass::Property => Token::Property(value),
            WordClass::Variable => Token::Variable(value),
        }
    }

    /// `{name}` with an optional trailing unit override (`{size}rem`).
    fn variable_reference(&mut self) -> Result<Token, LuiError> {
        self.consume();
        let name = self.take_until_brace_close()?;

        let mut unit = None;
        if self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            let mut suffix = String::new();
            while let Some(c) = self.peek() {
                if c.is_ascii_alphabetic() {
                    suffix.push(c);
                    self.consume();
                } else {
                    break;
                }
            }
            if !vocab::UNITS.contains(suffix.as_str()) {
                return Err(self.error(format!("unrecognized unit: {suffix}")));
            }
            unit = Some(suffix);
        }

        Ok(Token::VariableRef { name, unit })
    }

    /// `#fff`, `#11223344` — up to 8 hex digits, kept as a text value.
    fn hex_color(&mut self) -> Token {
        self.consume();
        let mut value = String::from("#");
        while let Some(c) = self.peek() {
            if c.is_ascii_hexdigit() && value.len() < 9 {
                value.push(c);
                self.consume();
            } else {
                break;
            }
        }
        Token::Value(Literal::Text(value))
    }

    /// The single value that must follow `=` on a `VAR` line.
    fn value_after_equals(&mut self) -> Result<Token, LuiError> {
        let Some(c) = self.peek() else {
            return Err(self.error("expected value after ="));
        };

        if c == '{' {
            return self.variable_reference();
        }
        if c == '#' {
            return Ok(self.hex_color());
        }
        if c.is_ascii_digit() || (c == '-' && self.peek_next().is_some_and(|n| n.is_ascii_digit())) {
            return Ok(self.number());
        }

        if is_word_char(c) {
            let mut word = String::new();
            while let Some(w) = self.peek() {
                if is_word_char(w) {
                    word.push(w);
                    self.consume();
                } else {
                    break;
                }
            }

            // A unit name here prefixes a typed variable reference:
            // `VAR half = px {size}`.
            if vocab::UNITS.contains(word.as_str()) {
                self.skip_inline_whitespace();
                if self.peek() == Some('{') {
                    self.consume();
                    let name = self.take_until_brace_close()?;
                    return Ok(Token::VariableRef {
                        name,
                        unit: Some(word),
                    });
                }
                return Err(self.error(format!("expected variable reference after unit {word}")));
            }

            return Ok(Token::Value(Literal::Text(word)));
        }

        Err(self.error(format!("unexpected value after =: {c}")))
    }

    fn take_until_space(&mut self) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                break;
            }
            out.push(c);
            self.consume();
        }
        out
    }

    fn take_until_brace_close(&mut self) -> Result<String, LuiError> {
        let mut out = String::new();
        loop {
            match self.peek() {
                Some('}') => {
                    self.consume();
                    return Ok(out);
                }
                Some(c) => {
                    out.push(c);
                    self.consume();
                }
                None => return Err(self.error("unterminated brace")),
            }
        }
    }

    fn skip_inline_whitespace(&mut self) {
        while self.peek().is_some_and(is_inline_whitespace) {
            self.consume();
        }
    }

    fn rest_starts_with(&self, prefix: &str) -> bool {
        let mut idx = self.current;
        for expected in prefix.chars() {
            if self.input.get(idx).copied() != Some(expected) {
                return false;
            }
            idx += 1;
        }
        true
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.input.get(self.current + 1).copied()
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.current).copied();
        if c.is_some() {
            self.current += 1;
            self.column += 1;
        }
        c
    }

    fn advance(&mut self, n: usize) {
        self.current += n;
        self.column += n;
    }

    fn at_end(&self) -> bool {
        self.current >= self.input.len()
    }

    fn error(&self, message: impl Into<String>) -> LuiError {
        LuiError::lexical(message, self.line, self.column)
    }
}

fn is_inline_whitespace(c: char) -> bool {
    c.is_whitespace() && c != '\n'
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '@' || c == '-'
}

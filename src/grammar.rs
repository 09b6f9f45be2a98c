//! String-rewriting engine for L-System grammars.
//!
//! A [`Grammar`] maps single-character symbols to replacement strings.
//! [`Grammar::expand`] rewrites an axiom generation by generation: every
//! symbol with a rule is substituted, every other symbol is copied through.
//! Control symbols are never substituted, so the structural skeleton of a
//! derivation (`[`, `]`, turns) survives every generation intact.

use crate::error::VerdureError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Symbols with fixed turtle semantics. They pass through expansion
/// literally and can never be the left-hand side of a rewrite rule.
pub const CONTROL_SYMBOLS: [char; 9] = ['+', '-', '&', '^', '\\', '/', '|', '[', ']'];

/// Returns true if `symbol` has a fixed structural meaning for the turtle.
pub fn is_control_symbol(symbol: char) -> bool {
    CONTROL_SYMBOLS.contains(&symbol)
}

/// A table of single-symbol rewrite rules.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Grammar {
    rules: HashMap<char, String>,
}

impl Grammar {
    /// Creates an empty grammar. Expanding with it copies the axiom through
    /// unchanged at every generation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grammar from an ordered list of `(symbol, replacement)`
    /// pairs. If a symbol is defined more than once, the last definition
    /// wins.
    ///
    /// # Errors
    ///
    /// [`VerdureError::MalformedGrammar`] if any key is a control symbol.
    pub fn from_rules<I, S>(rules: I) -> Result<Self, VerdureError>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut grammar = Self::new();
        for (symbol, replacement) in rules {
            let _ = grammar.add_rule(symbol, replacement)?;
        }
        Ok(grammar)
    }

    /// Adds one rewrite rule, replacing any previous rule for `symbol`.
    ///
    /// An empty replacement is valid and deletes the symbol on expansion.
    ///
    /// # Errors
    ///
    /// [`VerdureError::MalformedGrammar`] if `symbol` is a control symbol;
    /// such a rule could never fire (see [`is_control_symbol`]).
    pub fn add_rule(
        &mut self,
        symbol: char,
        replacement: impl Into<String>,
    ) -> Result<&mut Self, VerdureError> {
        if is_control_symbol(symbol) {
            return Err(VerdureError::MalformedGrammar(format!(
                "rule keyed on control symbol '{symbol}' can never apply"
            )));
        }
        let _ = self.rules.insert(symbol, replacement.into());
        Ok(self)
    }

    /// Returns the replacement string for `symbol`, if one is defined.
    pub fn replacement(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rewrites `axiom` for `generations` passes and returns the result.
    ///
    /// Each pass scans the current string left to right: control symbols and
    /// symbols without a rule are copied through, everything else is replaced
    /// by its rule's right-hand side. `generations == 0` returns the axiom
    /// unchanged. Output length can grow exponentially with `generations`;
    /// each pass appends into one pre-reserved buffer.
    pub fn expand(&self, axiom: &str, generations: u32) -> String {
        let mut current = axiom.to_owned();
        for _ in 0..generations {
            current = self.expand_once(&current);
        }
        current
    }

    /// Like [`expand`](Self::expand), but gives up with
    /// [`VerdureError::Timeout`] once `timeout` has elapsed.
    ///
    /// The deadline is checked between generations, so a single enormous
    /// pass can still overshoot the budget by the length of that pass.
    pub fn expand_bounded(
        &self,
        axiom: &str,
        generations: u32,
        timeout: Duration,
    ) -> Result<String, VerdureError> {
        let start_time = Instant::now();
        let mut current = axiom.to_owned();
        for _ in 0..generations {
            if start_time.elapsed() >= timeout {
                return Err(VerdureError::Timeout(timeout));
            }
            current = self.expand_once(&current);
        }
        Ok(current)
    }

    /// One rewrite pass over `current`.
    fn expand_once(&self, current: &str) -> String {
        let mut next = String::with_capacity(current.len() * 2);
        for symbol in current.chars() {
            if is_control_symbol(symbol) {
                next.push(symbol);
            } else if let Some(replacement) = self.rules.get(&symbol) {
                next.push_str(replacement);
            } else {
                next.push(symbol);
            }
        }
        next
    }
}

//! Reply Engine - turns a chat line into a scripted response.
//!
//! Rules are checked in order and the first match wins:
//! 1. **Sharing**: "how" and "share"
//! 2. **Festival**: "festival", "diwali" or "pongal"
//! 3. **Food**: "recipe", "food" or "khichdi"
//! 4. **Greeting**: "hello" or "hi"
//! 5. **Fallback**: anything else
//!
//! Matching is a case-insensitive substring search over the whole line.

mod rules;

pub use rules::*;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Keyword condition of a rule.
///
/// In TOML: `matcher = { any_of = ["lullaby", "song"] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Matcher {
    /// Every keyword must appear.
    AllOf(Vec<String>),

    /// At least one keyword must appear.
    AnyOf(Vec<String>),
}

impl Matcher {
    pub fn all_of<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Matcher::AllOf(lowercased(keywords))
    }

    pub fn any_of<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Matcher::AnyOf(lowercased(keywords))
    }

    /// The same matcher with lowercased keywords.
    pub fn normalized(self) -> Self {
        match self {
            Matcher::AllOf(words) => Matcher::AllOf(lowercased(words)),
            Matcher::AnyOf(words) => Matcher::AnyOf(lowercased(words)),
        }
    }

    /// Check a lowercased input line.
    pub fn matches(&self, input_lower: &str) -> bool {
        match self {
            Matcher::AllOf(words) => words.iter().all(|w| input_lower.contains(w.as_str())),
            Matcher::AnyOf(words) => words.iter().any(|w| input_lower.contains(w.as_str())),
        }
    }
}

fn lowercased<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    keywords.into_iter().map(|k| k.into().to_lowercase()).collect()
}

/// One row of the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyRule {
    /// Short name used in logs.
    pub name: String,
    pub matcher: Matcher,
    pub response: String,
}

impl ReplyRule {
    pub fn new(name: impl Into<String>, matcher: Matcher, response: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matcher,
            response: response.into(),
        }
    }
}

/// Ordered rule table with a fallback response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyEngine {
    rules: Vec<ReplyRule>,
    fallback: String,
}

impl Default for ReplyEngine {
    fn default() -> Self {
        Self::scripted()
    }
}

impl ReplyEngine {
    /// Create an engine with no rules.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Root's built-in rule table.
    pub fn scripted() -> Self {
        let mut engine = Self::new(FALLBACK_REPLY);
        engine.extend_rules(scripted_rules());
        engine
    }

    /// Append a rule. It is checked after every existing rule.
    pub fn push_rule(&mut self, mut rule: ReplyRule) {
        rule.matcher = rule.matcher.normalized();
        self.rules.push(rule);
    }

    /// Append several rules in order.
    pub fn extend_rules(&mut self, rules: impl IntoIterator<Item = ReplyRule>) {
        for rule in rules {
            self.push_rule(rule);
        }
    }

    pub fn rules(&self) -> &[ReplyRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// The first rule matching `input`, if any.
    pub fn matching_rule(&self, input: &str) -> Option<&ReplyRule> {
        let lowered = input.to_lowercase();
        self.rules.iter().find(|rule| rule.matcher.matches(&lowered))
    }

    /// Response for `input`.
    pub fn reply(&self, input: &str) -> &str {
        match self.matching_rule(input) {
            Some(rule) => {
                debug!(rule = %rule.name, "reply rule matched");
                &rule.response
            }
            None => {
                debug!("no reply rule matched, using fallback");
                &self.fallback
            }
        }
    }
}

/// Root's response to `input` using the built-in rule table.
pub fn reply(input: &str) -> String {
    ReplyEngine::scripted().reply(input).to_string()
}

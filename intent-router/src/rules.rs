//! Intent classifier: an ordered list of keyword rules evaluated
//! first-match-wins, with a total fallback.
//!
//! Rule order is a tie-break contract, not an accident: a message containing
//! keywords of several rules resolves to the earliest declared rule. The
//! default order lives in [`crate::catalog`] and is covered by tests.

use chatterly_core::HandlerKind;
use tracing::debug;

/// One routing rule: trigger keywords, target handler, and the task/output
/// templates handed to the backend as generation guidance.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Keywords matched by substring containment against the lowercased message.
    pub keywords: Vec<String>,
    pub handler: HandlerKind,
    /// Prefix of the task description; the original message is appended verbatim.
    pub task_prefix: String,
    /// Natural-language contract for the answer's shape. Guidance only, never validated.
    pub expected_output: String,
}

impl Rule {
    pub fn new(
        keywords: &[&str],
        handler: HandlerKind,
        task_prefix: impl Into<String>,
        expected_output: impl Into<String>,
    ) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            handler,
            task_prefix: task_prefix.into(),
            expected_output: expected_output.into(),
        }
    }

    fn matches(&self, lowered_message: &str) -> bool {
        self.keywords.iter().any(|k| lowered_message.contains(k))
    }

    fn classify(&self, message: &str) -> Classification {
        Classification {
            handler: self.handler,
            task_description: format!("{}{}", self.task_prefix, message),
            expected_output: self.expected_output.clone(),
        }
    }
}

/// The classifier's output: a handler plus the generation guidance for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub handler: HandlerKind,
    pub task_description: String,
    pub expected_output: String,
}

/// Ordered rule list plus a fallback rule whose keywords are ignored.
///
/// Keeping the fallback as a separate field makes classification total by
/// construction: `classify` can never fail to produce a handler.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<Rule>,
    fallback: Rule,
}

impl IntentClassifier {
    pub fn new(rules: Vec<Rule>, fallback: Rule) -> Self {
        Self { rules, fallback }
    }

    /// Rules in evaluation order (fallback excluded).
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Lowercases the message once and evaluates rules in declared order;
    /// the first rule with any contained keyword wins. Total: falls back to
    /// the fallback rule's classification when nothing matches.
    pub fn classify(&self, message: &str) -> Classification {
        let lowered = message.to_lowercase();
        for rule in &self.rules {
            if rule.matches(&lowered) {
                debug!(handler = %rule.handler, "intent rule matched");
                return rule.classify(message);
            }
        }
        debug!(handler = %self.fallback.handler, "no intent rule matched, using fallback");
        self.fallback.classify(message)
    }
}

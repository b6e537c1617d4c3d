//! Ordered first-match rule chains.
//!
//! Several decisions in the domain (interface style, voice persona) are
//! priority lists where more than one rule can match the same input. A
//! [`RuleChain`] keeps those rules as static data evaluated strictly top to
//! bottom; the first rule whose predicate holds decides the outcome and the
//! fallback applies when none does.

/// One `(predicate, outcome)` pair in a chain.
pub struct Rule<I: 'static, O: 'static> {
    /// Short identifier, used in logs and tests.
    pub name: &'static str,
    pub applies: fn(&I) -> bool,
    pub outcome: O,
}

/// An ordered list of rules plus the outcome used when nothing matches.
pub struct RuleChain<I: 'static, O: 'static> {
    rules: &'static [Rule<I, O>],
    fallback: O,
}

/// Result of evaluating a chain: which rule fired and what it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<O> {
    /// `None` when the fallback applied.
    pub rule: Option<&'static str>,
    pub outcome: O,
}

impl<I, O: Copy> RuleChain<I, O> {
    pub const fn new(rules: &'static [Rule<I, O>], fallback: O) -> Self {
        Self { rules, fallback }
    }

    /// Evaluates rules in order and returns the first match.
    pub fn evaluate(&self, input: &I) -> RuleMatch<O> {
        self.rules
            .iter()
            .find(|rule| (rule.applies)(input))
            .map(|rule| RuleMatch {
                rule: Some(rule.name),
                outcome: rule.outcome,
            })
            .unwrap_or(RuleMatch {
                rule: None,
                outcome: self.fallback,
            })
    }

    /// Shorthand for `evaluate(input).outcome`.
    pub fn outcome(&self, input: &I) -> O {
        self.evaluate(input).outcome
    }

    pub fn rules(&self) -> &'static [Rule<I, O>] {
        self.rules
    }

    pub fn fallback(&self) -> O {
        self.fallback
    }
}

/// Maps a small integer score through a fixed lookup table.
///
/// Entries are checked in order; `otherwise` covers every score the table
/// does not list.
pub fn threshold<T: Copy>(score: u8, table: &[(u8, T)], otherwise: T) -> T {
    table
        .iter()
        .find(|(key, _)| *key == score)
        .map(|(_, value)| *value)
        .unwrap_or(otherwise)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_even(n: &u32) -> bool {
        n % 2 == 0
    }

    fn is_multiple_of_three(n: &u32) -> bool {
        n % 3 == 0
    }

    static CHAIN: RuleChain<u32, &str> = RuleChain::new(
        &[
            Rule {
                name: "even",
                applies: is_even,
                outcome: "even",
            },
            Rule {
                name: "three",
                applies: is_multiple_of_three,
                outcome: "three",
            },
        ],
        "other",
    );

    #[test]
    fn first_matching_rule_wins() {
        // 6 matches both rules; order decides.
        let m = CHAIN.evaluate(&6);
        assert_eq!(m.rule, Some("even"));
        assert_eq!(m.outcome, "even");
    }

    #[test]
    fn later_rule_fires_when_earlier_ones_miss() {
        assert_eq!(CHAIN.outcome(&9), "three");
    }

    #[test]
    fn fallback_applies_when_nothing_matches() {
        let m = CHAIN.evaluate(&7);
        assert_eq!(m.rule, None);
        assert_eq!(m.outcome, "other");
    }

    #[test]
    fn threshold_uses_table_then_otherwise() {
        let table = [(1u8, 'a'), (2, 'b')];
        assert_eq!(threshold(1, &table, 'z'), 'a');
        assert_eq!(threshold(2, &table, 'z'), 'b');
        assert_eq!(threshold(3, &table, 'z'), 'z');
        assert_eq!(threshold(0, &table, 'z'), 'z');
    }
}

//! Miss-streak driven choice between best-score targeting and random search.
//!
//! The policy is an ordered list of rules over `(miss_streak, proba)`. Rules
//! are evaluated top to bottom and the first match decides the move mode.
//! Thresholds are empirically tuned and live in [`PolicyConfig`].

use crate::common::ConfigError;

/// How a move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum MoveMode {
    /// Highest-scoring unfired cell.
    Best,
    /// Random cell on the outer ring.
    Edge,
    /// Random interior cell away from known shots.
    Exploratory,
}

/// Attempt caps for the randomized fallback searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct SearchBudget {
    /// Attempts after which a search gives up.
    pub max_attempts: u32,
    /// Attempts after which the exploratory search accepts any unfired
    /// interior cell.
    pub relax_after: u32,
}

impl SearchBudget {
    pub const MAX_ATTEMPTS: u32 = 40;
    pub const RELAX_AFTER: u32 = 20;
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            max_attempts: Self::MAX_ATTEMPTS,
            relax_after: Self::RELAX_AFTER,
        }
    }
}

/// Tunable thresholds of the targeting policy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct PolicyConfig {
    /// Best-cell probability at or above which the best cell is always played.
    pub confident_proba: f64,
    /// Below this probability a 15..20 miss streak switches to edge search.
    pub edge_proba: f64,
    /// Miss streak up to which the best cell is always played.
    pub warmup_misses: u32,
    /// Lower bound (exclusive) of the streak window favouring edge search.
    pub edge_after: u32,
    /// Lower bound (exclusive) of the window returning to best-cell play.
    pub focus_after: u32,
    /// Upper bound (inclusive) of that window; edge search resumes above it.
    pub focus_until: u32,
    /// Miss streak above which random search is abandoned for good.
    pub surrender_after: u32,
    pub search: SearchBudget,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            confident_proba: 0.25,
            edge_proba: 0.23,
            warmup_misses: 5,
            edge_after: 15,
            focus_after: 20,
            focus_until: 25,
            surrender_after: 30,
            search: SearchBudget::default(),
        }
    }
}

/// One row of the rule table.
struct Rule {
    name: &'static str,
    applies: fn(&PolicyConfig, u32, f64) -> bool,
    mode: MoveMode,
}

static RULES: [Rule; 3] = [
    Rule {
        name: "best",
        applies: |p, streak, proba| {
            proba >= p.confident_proba
                || streak <= p.warmup_misses
                || streak > p.surrender_after
                || (p.focus_after < streak && streak <= p.focus_until)
        },
        mode: MoveMode::Best,
    },
    Rule {
        name: "edge",
        applies: |p, streak, proba| {
            (p.edge_after < streak && streak <= p.focus_after && proba < p.edge_proba)
                || (p.focus_until < streak && streak <= p.surrender_after)
        },
        mode: MoveMode::Edge,
    },
    Rule {
        name: "exploratory",
        applies: |p, streak, proba| {
            p.warmup_misses < streak && streak <= p.focus_after && proba < p.confident_proba
        },
        mode: MoveMode::Exploratory,
    },
];

impl PolicyConfig {
    /// Preset used when the AI plays alone against a random board: a longer
    /// warm-up and a later surrender.
    pub fn autoplay() -> Self {
        Self {
            warmup_misses: 10,
            surrender_after: 35,
            ..Self::default()
        }
    }

    /// Mode chosen for a given miss streak and best-cell probability.
    pub fn decide(&self, miss_streak: u32, proba: f64) -> MoveMode {
        self.matching_rule(miss_streak, proba)
            .map(|rule| rule.mode)
            .unwrap_or(MoveMode::Best)
    }

    /// Name of the first matching rule, or `None` when the table falls through.
    pub fn rule_name(&self, miss_streak: u32, proba: f64) -> Option<&'static str> {
        self.matching_rule(miss_streak, proba).map(|rule| rule.name)
    }

    fn matching_rule(&self, miss_streak: u32, proba: f64) -> Option<&'static Rule> {
        RULES
            .iter()
            .find(|rule| (rule.applies)(self, miss_streak, proba))
    }

    /// Check probability ranges, threshold ordering and search budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("confident_proba", self.confident_proba),
            ("edge_proba", self.edge_proba),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        let ordered = [
            ("warmup_misses", self.warmup_misses),
            ("edge_after", self.edge_after),
            ("focus_after", self.focus_after),
            ("focus_until", self.focus_until),
            ("surrender_after", self.surrender_after),
        ];
        for pair in ordered.windows(2) {
            if pair[0].1 > pair[1].1 {
                return Err(ConfigError::ThresholdOrder {
                    lower: pair[0].0,
                    upper: pair[1].0,
                });
            }
        }
        if self.search.relax_after >= self.search.max_attempts {
            return Err(ConfigError::SearchBudget {
                relax_after: self.search.relax_after,
                max_attempts: self.search.max_attempts,
            });
        }
        Ok(())
    }
}

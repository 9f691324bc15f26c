//! Breadth-first recipe exploration.
//!
//! Starting from the lowest-ranked matchable records, repeatedly combine
//! what has been reached so far and record which record each recipe lands
//! on. Every attempted recipe produces an edge; a result not yet reached is
//! appended to the frontier.
//!
//! For each record `a` taken from the front of the work queue:
//!
//! ```text
//! [a]       nearest neighbour of a
//! [a, a]    -a
//! [a, x]    a + x, for every reached x != a (including ones found meanwhile)
//! ```
//!
//! Recipes are deduplicated by their sorted abbreviation list.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{EmojiCatalog, EmojiRecord};
use crate::config::ExploreConfig;
use crate::equation::EquationBuilder;
use crate::error::{AlgebraError, AlgebraResult};
use crate::evaluator::Evaluator;

/// A record reached during exploration and the recipe that first reached it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discovery {
    pub abbreviation: String,
    pub glyph: String,
    pub rank: i32,
    /// Empty for seed records
    pub recipe: Vec<String>,
}

/// One attempted recipe and the record it evaluated to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExploreEdge {
    pub result: String,
    /// Abbreviations in sorted order
    pub recipe: Vec<String>,
}

/// Full outcome of an exploration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exploration {
    /// Seeds followed by discoveries, in the order they were reached
    pub discovered: Vec<Discovery>,
    pub edges: Vec<ExploreEdge>,
    /// Matchable abbreviations never reached, in rank order
    pub missed: Vec<String>,
    /// Distinct recipes evaluated
    pub attempts: usize,
    /// False when `max_attempts` stopped the run early
    pub complete: bool,
}

impl Exploration {
    #[inline]
    pub fn seed_count(&self) -> usize {
        self.discovered.iter().filter(|d| d.recipe.is_empty()).count()
    }
}

/// Working state shared by the attempt loop.
struct Explorer<'c> {
    builder: EquationBuilder<'c>,
    evaluator: Evaluator<'c>,
    max_attempts: usize,
    have: Vec<&'c EmojiRecord>,
    reached: HashSet<&'c str>,
    work: VecDeque<&'c EmojiRecord>,
    tried: HashSet<String>,
    discovered: Vec<Discovery>,
    edges: Vec<ExploreEdge>,
    /// Set once a new recipe was refused because of `max_attempts`
    stopped: bool,
}

impl<'c> Explorer<'c> {
    fn reach(&mut self, record: &'c EmojiRecord, recipe: Vec<String>) {
        self.reached.insert(record.abbreviation.as_str());
        self.have.push(record);
        self.work.push_back(record);
        self.discovered.push(Discovery {
            abbreviation: record.abbreviation.clone(),
            glyph: record.glyph.clone(),
            rank: record.rank,
            recipe,
        });
    }

    fn attempt(&mut self, mut records: Vec<&'c EmojiRecord>) -> AlgebraResult<()> {
        records.sort_by(|a, b| a.abbreviation.cmp(&b.abbreviation));
        let recipe: Vec<String> = records.iter().map(|r| r.abbreviation.clone()).collect();
        let key = recipe.join(" ");
        if self.tried.contains(&key) {
            return Ok(());
        }
        if self.tried.len() >= self.max_attempts {
            self.stopped = true;
            return Ok(());
        }
        self.tried.insert(key);

        let equation = self.builder.from_records(&records);
        let result = match self.evaluator.nearest(&equation) {
            Ok(record) => record,
            Err(AlgebraError::NoCandidates { .. }) => {
                debug!(target: "explore", recipe = %equation.recipe(), "No candidates left");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if !self.reached.contains(result.abbreviation.as_str()) {
            debug!(
                target: "explore",
                reached = self.have.len() + 1,
                queued = self.work.len() + 1,
                recipe = %equation,
                result = %result.glyph,
                "Discovered"
            );
            self.reach(result, recipe.clone());
        }

        self.edges.push(ExploreEdge {
            result: result.abbreviation.clone(),
            recipe,
        });
        Ok(())
    }
}

/// Explore which records are reachable by one- and two-term recipes.
///
/// # Errors
/// - `ConfigError` if `config` is invalid
pub fn explore(catalog: &EmojiCatalog, config: &ExploreConfig) -> AlgebraResult<Exploration> {
    config
        .validate()
        .map_err(|message| AlgebraError::ConfigError { message })?;

    let mut explorer = Explorer {
        builder: EquationBuilder::new(catalog),
        evaluator: Evaluator::new(catalog),
        max_attempts: config.max_attempts,
        have: Vec::new(),
        reached: HashSet::new(),
        work: VecDeque::new(),
        tried: HashSet::new(),
        discovered: Vec::new(),
        edges: Vec::new(),
        stopped: false,
    };

    for seed in catalog.matchable_subset().take(config.seed_count) {
        explorer.reach(seed, Vec::new());
    }

    info!(
        target: "explore",
        seeds = explorer.have.len(),
        matchable = catalog.matchable_len(),
        "Starting recipe exploration"
    );

    while let Some(a) = explorer.work.pop_front() {
        explorer.attempt(vec![a])?;
        explorer.attempt(vec![a, a])?;

        // `have` grows while this loop runs; newly reached records are paired too.
        let mut i = 0;
        while i < explorer.have.len() && !explorer.stopped {
            let x = explorer.have[i];
            if x.abbreviation != a.abbreviation {
                explorer.attempt(vec![a, x])?;
            }
            i += 1;
        }
        if explorer.stopped {
            break;
        }
    }

    let complete = !explorer.stopped;
    let missed: Vec<String> = catalog
        .matchable_subset()
        .filter(|r| !explorer.reached.contains(r.abbreviation.as_str()))
        .map(|r| r.abbreviation.clone())
        .collect();

    info!(
        target: "explore",
        reached = explorer.discovered.len(),
        missed = missed.len(),
        edges = explorer.edges.len(),
        attempts = explorer.tried.len(),
        complete,
        "Recipe exploration finished"
    );

    Ok(Exploration {
        discovered: explorer.discovered,
        edges: explorer.edges,
        missed,
        attempts: explorer.tried.len(),
        complete,
    })
}

//! First-UIP conflict analysis: walks the trail backwards from a falsified
//! clause, resolving against antecedents, until the resolvent contains a
//! single literal from the conflicting decision level.
use crate::assign::{AssignStack, Reason};
use crate::clause::{ClauseDb, ClauseId};
use crate::types::{DecisionLevel, Lit};

/// The outcome of conflict analysis: a clause entailed by the original
/// formula, to be learned, and the level the driver should backjump to.
pub struct Analysis {
    pub learned: Vec<Lit>,
    pub backjump_level: DecisionLevel,
}

/// Runs First-UIP analysis on the conflicting clause `conflict` given the
/// current trail. `asg.decision_level()` must be at least 1.
///
/// The resolvent is tracked with a per-variable "seen" flag (sized to the
/// variable universe) rather than a hash set: membership and sign are read
/// off directly from `resolvent`, and `in_resolvent` only tracks which
/// variables are present so duplicate literals are never added twice.
pub fn analyze(asg: &AssignStack, cdb: &ClauseDb, conflict: ClauseId) -> Analysis {
    let current_level = asg.decision_level();
    debug_assert!(current_level >= 1);

    let mut in_resolvent = vec![false; asg.num_vars() + 1];
    let mut resolvent: Vec<Lit> = Vec::new();
    let mut at_current_level = 0usize;

    for &lit in cdb.get(conflict).literals() {
        if in_resolvent[lit.vi()] {
            continue;
        }
        in_resolvent[lit.vi()] = true;
        if asg.level(lit.vi()) == Some(current_level) {
            at_current_level += 1;
        }
        resolvent.push(lit);
    }

    let mut ti = asg.trail().len();
    while at_current_level > 1 {
        // Find the next trail variable (newest to oldest) that is both at
        // the conflicting level and present in the resolvent.
        let v = loop {
            debug_assert!(ti > 0, "trail exhausted before resolvent converged");
            ti -= 1;
            let v = asg.trail()[ti];
            if asg.level(v) == Some(current_level) && in_resolvent[v] {
                break v;
            }
        };

        match asg.reason(v) {
            Some(Reason::Decision) | None => {
                // The level's decision variable: stop resolving against it.
                // Analysis only terminates here when at_current_level == 1,
                // which the loop guard already ensures we're not at.
                unreachable!("decision variable reached while at_current_level > 1");
            }
            Some(Reason::Implication(reason_id)) => {
                // The resolvent only ever holds literals that are false
                // under the assignment, so the occurrence of `v` in it is
                // the negation of `v`'s current (forced) value.
                let pivot = Lit::from_var(v, asg.value(v) == Some(false));
                in_resolvent[v] = false;
                resolvent.retain(|&l| l != pivot);
                at_current_level -= 1;

                for &m in cdb.get(reason_id).literals() {
                    if m.vi() == v {
                        continue;
                    }
                    if !in_resolvent[m.vi()] {
                        in_resolvent[m.vi()] = true;
                        resolvent.push(m);
                        if asg.level(m.vi()) == Some(current_level) {
                            at_current_level += 1;
                        }
                    }
                }
            }
        }
    }

    let levels: Vec<DecisionLevel> = resolvent
        .iter()
        .map(|l| asg.level(l.vi()).unwrap_or(0))
        .collect();
    let backjump_level = backjump_level_of(&levels, current_level);

    Analysis {
        learned: resolvent,
        backjump_level,
    }
}

/// The backjump level is the second-highest level among the resolvent's
/// variables when the highest equals the conflicting level (the ordinary
/// case), the highest otherwise (a defensive fallback whose reachability
/// under a correct First-UIP walk is not settled), or 0 when at most one
/// level is present.
fn backjump_level_of(levels: &[DecisionLevel], current_level: DecisionLevel) -> DecisionLevel {
    let mut distinct: Vec<DecisionLevel> = levels.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() <= 1 {
        return 0;
    }
    let max = *distinct.last().unwrap();
    if max == current_level {
        distinct[distinct.len() - 2]
    } else {
        log::warn!(
            "conflict analysis: resolvent's maximum level ({}) != conflicting level ({}); \
             using the documented defensive fallback",
            max,
            current_level
        );
        debug_assert!(
            max == current_level,
            "resolvent max level should equal the conflicting level"
        );
        max
    }
}

//! VSIDS-style decision heuristic: an activity score per variable, with a
//! growing bump increment (decay) and periodic rescaling to keep scores
//! bounded.
use crate::assign::AssignStack;
use crate::clause::Clause;
use crate::types::{Config, VarId};

/// Activity-weighted variable selector. Variables recently involved in a
/// conflict get bumped, so the heuristic favours the "active" part of the
/// search space — the idea behind VSIDS.
#[derive(Debug)]
pub struct Vsids {
    activity: Vec<f64>,
    increment: f64,
    decay: f64,
    rescale_threshold: f64,
    rescale_factor: f64,
}

impl Vsids {
    pub fn new(num_vars: usize, config: &Config) -> Vsids {
        Vsids {
            activity: vec![0.0; num_vars + 1],
            increment: config.init_increment,
            decay: config.var_decay,
            rescale_threshold: config.rescale_threshold,
            rescale_factor: config.rescale_factor,
        }
    }

    /// The unassigned variable with the highest activity, ties broken by
    /// smallest variable id. `None` iff every variable is assigned.
    pub fn choose_variable(&self, asg: &AssignStack) -> Option<VarId> {
        (1..=asg.num_vars())
            .filter(|&v| !asg.is_assigned(v))
            .max_by(|&a, &b| {
                self.activity[a]
                    .partial_cmp(&self.activity[b])
                    .unwrap()
                    .then(b.cmp(&a))
            })
    }

    /// The initial polarity to try for `v`. Fixed to `false`, matching the
    /// reference behaviour permitted by the contract (no phase-saving).
    pub fn choose_value(&self, _v: VarId) -> bool {
        false
    }

    /// Adds the current increment to `v`'s activity, rescaling everything
    /// if it would exceed `rescale_threshold`.
    pub fn bump_activity(&mut self, v: VarId) {
        self.activity[v] += self.increment;
        if self.activity[v] > self.rescale_threshold {
            self.rescale();
        }
    }

    /// Bumps every variable occurring in `clause`.
    pub fn bump_activities(&mut self, clause: &Clause) {
        for lit in clause.literals() {
            self.bump_activity(lit.vi());
        }
    }

    /// Grows the bump increment. Mathematically equivalent to multiplying
    /// every score by `decay` but cheaper, and it preserves score ordering.
    pub fn decay_activities(&mut self) {
        self.increment /= self.decay;
    }

    fn rescale(&mut self) {
        for a in &mut self.activity {
            *a *= self.rescale_factor;
        }
        self.increment *= self.rescale_factor;
    }

    /// Current activity of `v`. Exposed for tests and progress logging.
    pub fn activity(&self, v: VarId) -> f64 {
        self.activity[v]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bumping_preserves_relative_order_across_decay() {
        let config = Config::default();
        let mut h = Vsids::new(2, &config);
        h.bump_activity(1);
        h.bump_activity(1);
        h.decay_activities();
        h.bump_activity(2);
        // 1 was bumped twice, 2 once: 1 should still lead regardless of the
        // interleaved decay call.
        assert!(h.activity(1) > h.activity(2));
    }

    #[test]
    fn choose_variable_picks_highest_activity_unassigned() {
        let config = Config::default();
        let mut h = Vsids::new(3, &config);
        h.bump_activity(2);
        h.bump_activity(2);
        h.bump_activity(3);
        let asg = AssignStack::new(3);
        assert_eq!(h.choose_variable(&asg), Some(2));
    }

    #[test]
    fn choose_variable_ties_break_on_smallest_id() {
        let config = Config::default();
        let h = Vsids::new(3, &config);
        let asg = AssignStack::new(3);
        assert_eq!(h.choose_variable(&asg), Some(1));
    }

    #[test]
    fn rescale_preserves_pairwise_ordering() {
        let mut config = Config::default();
        config.rescale_threshold = 10.0;
        config.rescale_factor = 0.5;
        let mut h = Vsids::new(2, &config);
        h.bump_activity(1);
        h.bump_activity(2);
        h.bump_activity(2); // triggers rescale once activity(2) > 10? not yet; force it below
        for _ in 0..10 {
            h.bump_activity(2);
        }
        assert!(h.activity(2) > h.activity(1));
    }
}

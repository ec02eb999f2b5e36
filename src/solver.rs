//! The search driver: decide, propagate, analyse and backjump until the
//! assignment is complete (SAT) or a conflict survives at level 0 (UNSAT).
//! See the module-level docs below for the loop structure.
use crate::analyze::analyze;
use crate::assign::AssignStack;
use crate::clause::{ClauseDb, ClauseId};
use crate::error::{Result, SolverError};
use crate::heuristic::Vsids;
use crate::types::Config;

/// The result of a solve. `Sat` carries a model: `model[v]` is the value
/// assigned to variable `v` (slot 0 is unused).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Certificate {
    Sat(Vec<bool>),
    Unsat,
}

/// Owns the clause database, the trail and the decision heuristic for a
/// single solve. Not reusable across solves and not `Sync`/shareable: the
/// core is single-threaded by contract.
pub struct Solver {
    cdb: ClauseDb,
    asg: AssignStack,
    heuristic: Vsids,
    num_decisions: u64,
    num_conflicts: u64,
    num_propagations: u64,
}

impl Solver {
    /// Builds a solver from a pre-validated clause database and a variable
    /// universe `1..=num_vars`. Returns `SolverError::InvalidInput` if any
    /// clause is empty, tautological, or references a variable outside the
    /// universe — conditions the contract says are normally filtered by an
    /// external collaborator, checked here defensively since this is a
    /// library entry point.
    pub fn new(clauses: Vec<Vec<crate::types::Lit>>, num_vars: usize) -> Result<Solver> {
        Self::with_config(clauses, num_vars, Config::default())
    }

    pub fn with_config(
        clauses: Vec<Vec<crate::types::Lit>>,
        num_vars: usize,
        config: Config,
    ) -> Result<Solver> {
        let mut cdb = ClauseDb::new();
        for lits in clauses {
            if lits.is_empty() {
                return Err(SolverError::InvalidInput("empty clause".to_string()));
            }
            for l in &lits {
                if l.vi() == 0 || l.vi() > num_vars {
                    return Err(SolverError::InvalidInput(format!(
                        "literal {} references a variable outside 1..={}",
                        l, num_vars
                    )));
                }
            }
            let id = cdb.add_original(lits);
            if cdb.get(id).is_tautology() {
                return Err(SolverError::InvalidInput(format!(
                    "clause {} is a tautology",
                    id
                )));
            }
        }
        Ok(Solver {
            cdb,
            asg: AssignStack::new(num_vars),
            heuristic: Vsids::new(num_vars, &config),
            num_decisions: 0,
            num_conflicts: 0,
            num_propagations: 0,
        })
    }

    /// Runs the search loop to completion.
    pub fn solve(&mut self) -> Certificate {
        log::debug!("starting solve: {} clauses, {} vars", self.cdb.len(), self.asg.num_vars());
        if let Some(conflict) = self.propagate() {
            log::info!("UNSAT: conflict {} at level 0 during initial propagation", conflict);
            return Certificate::Unsat;
        }
        loop {
            if self.asg.is_complete() {
                log::info!(
                    "SAT after {} decisions, {} conflicts, {} propagations",
                    self.num_decisions, self.num_conflicts, self.num_propagations
                );
                return Certificate::Sat(self.model());
            }
            let v = match self.heuristic.choose_variable(&self.asg) {
                Some(v) => v,
                None => {
                    // No unassigned variable remains, but `is_complete` was
                    // false: only possible if num_vars is 0, handled above.
                    return Certificate::Sat(self.model());
                }
            };
            let value = self.heuristic.choose_value(v);
            self.num_decisions += 1;
            self.asg.decide(v, value);
            log::trace!("decide {}={} at level {}", v, value, self.asg.decision_level());

            while let Some(conflict) = self.propagate() {
                self.num_conflicts += 1;
                if self.asg.decision_level() == 0 {
                    log::info!(
                        "UNSAT after {} decisions, {} conflicts",
                        self.num_decisions, self.num_conflicts
                    );
                    return Certificate::Unsat;
                }
                let analysis = analyze(&self.asg, &self.cdb, conflict);
                log::trace!(
                    "learned {:?}, backjump to {}",
                    analysis.learned.iter().map(|l| l.to_i32()).collect::<Vec<_>>(),
                    analysis.backjump_level
                );
                let backjump_level = analysis.backjump_level;
                let learned_id = self.cdb.add_learned(analysis.learned);
                self.heuristic.bump_activities(self.cdb.get(learned_id));
                self.heuristic.decay_activities();

                self.asg.backtrack(backjump_level);
                // The learned clause is unit at the backjump level; the next
                // BCP pass below asserts its asserting literal.
            }
        }
    }

    /// Boolean Constraint Propagation: repeatedly scans every clause until
    /// a fixed point (no pass yields a new propagation) or a clause is
    /// found conflicting, in which case that clause's id is returned.
    fn propagate(&mut self) -> Option<ClauseId> {
        loop {
            let mut progressed = false;
            for id in self.cdb.ids() {
                let clause = self.cdb.get(id);
                if clause.is_satisfied(&self.asg) {
                    continue;
                }
                if clause.is_conflicting(&self.asg) {
                    return Some(id);
                }
                if let Some(unit) = clause.unit_literal(&self.asg) {
                    self.num_propagations += 1;
                    self.asg.propagate(unit.vi(), unit.positive(), id);
                    progressed = true;
                }
            }
            if !progressed {
                return None;
            }
        }
    }

    fn model(&self) -> Vec<bool> {
        let mut model = vec![false; self.asg.num_vars() + 1];
        for v in 1..=self.asg.num_vars() {
            model[v] = self.asg.value(v).unwrap_or(false);
        }
        model
    }

    /// Read-only access to the trail, for callers that want to inspect the
    /// assignment beyond the model (e.g. decision levels of each variable).
    pub fn assignment(&self) -> &AssignStack {
        &self.asg
    }
}

/// Convenience entry point:
/// `solve(clauses, variables) -> {SAT, UNSAT}`, extended with a `Config`
/// and a model on the `Sat` branch.
pub fn solve(
    clauses: Vec<Vec<crate::types::Lit>>,
    num_vars: usize,
    config: Config,
) -> Result<Certificate> {
    if clauses.is_empty() {
        return Ok(Certificate::Sat(vec![false; num_vars + 1]));
    }
    let mut solver = Solver::with_config(clauses, num_vars, config)?;
    Ok(solver.solve())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Lit;

    fn lit(x: i32) -> Lit {
        Lit::from_i32(x)
    }

    fn satisfies(clauses: &[Vec<Lit>], model: &[bool]) -> bool {
        clauses.iter().all(|c| {
            c.iter()
                .any(|l| (l.positive() && model[l.vi()]) || (!l.positive() && !model[l.vi()]))
        })
    }

    #[test]
    fn trivial_sat() {
        let clauses = vec![vec![lit(1)]];
        let cert = solve(clauses, 1, Config::default()).unwrap();
        match cert {
            Certificate::Sat(model) => assert!(model[1]),
            Certificate::Unsat => panic!("expected SAT"),
        }
    }

    #[test]
    fn trivial_unsat() {
        let clauses = vec![vec![lit(1)], vec![lit(-1)]];
        assert_eq!(solve(clauses, 1, Config::default()).unwrap(), Certificate::Unsat);
    }

    #[test]
    fn forced_chain_is_sat_with_all_true_at_level_zero() {
        let clauses = vec![vec![lit(1)], vec![lit(-1), lit(2)], vec![lit(-2), lit(3)]];
        let mut solver = Solver::new(clauses, 3).unwrap();
        match solver.solve() {
            Certificate::Sat(model) => {
                assert!(model[1] && model[2] && model[3]);
                for v in 1..=3 {
                    assert_eq!(solver.assignment().level(v), Some(0));
                }
            }
            Certificate::Unsat => panic!("expected SAT"),
        }
    }

    #[test]
    fn classic_triangle_is_unsat() {
        let clauses = vec![
            vec![lit(1), lit(2)],
            vec![lit(-1), lit(2)],
            vec![lit(1), lit(-2)],
            vec![lit(-1), lit(-2)],
        ];
        assert_eq!(solve(clauses, 2, Config::default()).unwrap(), Certificate::Unsat);
    }

    #[test]
    fn empty_clause_list_is_sat() {
        assert_eq!(solve(vec![], 5, Config::default()).unwrap(), Certificate::Sat(vec![false; 6]));
    }

    #[test]
    fn rejects_empty_clause() {
        let clauses = vec![vec![]];
        assert!(matches!(
            Solver::new(clauses, 1),
            Err(SolverError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_tautology() {
        let clauses = vec![vec![lit(1), lit(-1)]];
        assert!(matches!(
            Solver::new(clauses, 1),
            Err(SolverError::InvalidInput(_))
        ));
    }

    #[test]
    fn pigeonhole_three_into_two_is_unsat() {
        // var(p, h) = p * 2 + h + 1 for p in 0..3, h in 0..2
        let var = |p: usize, h: usize| -> i32 { (p * 2 + h + 1) as i32 };
        let mut clauses = Vec::new();
        for p in 0..3 {
            clauses.push(vec![lit(var(p, 0)), lit(var(p, 1))]);
        }
        for h in 0..2 {
            for p1 in 0..3 {
                for p2 in (p1 + 1)..3 {
                    clauses.push(vec![lit(-var(p1, h)), lit(-var(p2, h))]);
                }
            }
        }
        assert_eq!(solve(clauses, 6, Config::default()).unwrap(), Certificate::Unsat);
    }

    #[test]
    fn sat_model_is_verified_against_every_clause() {
        let clauses = vec![
            vec![lit(1), lit(2), lit(3)],
            vec![lit(-1), lit(2)],
            vec![lit(-2), lit(3), lit(-1)],
        ];
        match solve(clauses.clone(), 3, Config::default()).unwrap() {
            Certificate::Sat(model) => assert!(satisfies(&clauses, &model)),
            Certificate::Unsat => panic!("expected SAT"),
        }
    }
}

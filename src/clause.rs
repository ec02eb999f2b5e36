//! Clause storage. Clauses are immutable disjunctions of literals, queried
//! against a partial assignment; the database arena-allocates them so the
//! trail can carry a stable [`ClauseId`] as a reason instead of a pointer.
use crate::assign::AssignStack;
use crate::types::Lit;

/// Index into a [`ClauseDb`]. Stable for the lifetime of a solve: clauses
/// are appended, never removed or relocated.
pub type ClauseId = usize;

/// An immutable disjunction of literals.
#[derive(Debug, Clone)]
pub struct Clause {
    pub(crate) lits: Vec<Lit>,
    /// `false` for clauses present in the original input, `true` for
    /// clauses produced by conflict analysis.
    pub(crate) learned: bool,
}

impl Clause {
    fn new(lits: Vec<Lit>, learned: bool) -> Clause {
        Clause { lits, learned }
    }

    /// The clause's literals, in the order they were given.
    pub fn literals(&self) -> &[Lit] {
        &self.lits
    }

    /// `true` iff this clause was produced by conflict analysis rather
    /// than present in the original input.
    pub fn is_learned(&self) -> bool {
        self.learned
    }

    /// `true` iff the clause contains a literal and its negation.
    pub fn is_tautology(&self) -> bool {
        self.lits
            .iter()
            .any(|l| self.lits.iter().any(|m| *m == l.negate()))
    }

    /// `true` iff some literal evaluates to `true` under `asg`.
    pub fn is_satisfied(&self, asg: &AssignStack) -> bool {
        self.lits.iter().any(|l| l.eval(asg.value(l.vi())) == Some(true))
    }

    /// `true` iff every literal is assigned and evaluates to `false`.
    pub fn is_conflicting(&self, asg: &AssignStack) -> bool {
        self.lits.iter().all(|l| l.eval(asg.value(l.vi())) == Some(false))
    }

    /// Returns the sole unassigned literal if the clause is unit under
    /// `asg`: not satisfied, and exactly one literal is unassigned.
    /// Aborts the scan as soon as a second unassigned literal is found.
    pub fn unit_literal(&self, asg: &AssignStack) -> Option<Lit> {
        let mut candidate = None;
        for &l in &self.lits {
            match l.eval(asg.value(l.vi())) {
                Some(true) => return None,
                Some(false) => continue,
                None => {
                    if candidate.is_some() {
                        return None;
                    }
                    candidate = Some(l);
                }
            }
        }
        candidate
    }
}

impl PartialEq for Clause {
    /// Clauses compare as the set of their literals; order and duplicates
    /// do not matter.
    fn eq(&self, other: &Clause) -> bool {
        self.lits.len() == other.lits.len()
            && self.lits.iter().all(|l| other.lits.contains(l))
    }
}

/// Arena holding every clause known to the solver, original and learned
/// alike. Clauses are appended only; `ClauseId`s remain valid for the
/// lifetime of a solve.
#[derive(Debug, Default)]
pub struct ClauseDb {
    clauses: Vec<Clause>,
}

impl ClauseDb {
    pub fn new() -> ClauseDb {
        ClauseDb { clauses: Vec::new() }
    }

    /// Registers an original (input) clause and returns its id.
    pub fn add_original(&mut self, lits: Vec<Lit>) -> ClauseId {
        let id = self.clauses.len();
        self.clauses.push(Clause::new(lits, false));
        id
    }

    /// Registers a clause learned by conflict analysis and returns its id.
    pub fn add_learned(&mut self, lits: Vec<Lit>) -> ClauseId {
        let id = self.clauses.len();
        self.clauses.push(Clause::new(lits, true));
        id
    }

    pub fn get(&self, id: ClauseId) -> &Clause {
        &self.clauses[id]
    }

    /// Total number of clauses currently stored (original + learned).
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Ids of every clause currently stored, in insertion order. Used by
    /// BCP to scan the whole database each pass.
    pub fn ids(&self) -> impl Iterator<Item = ClauseId> {
        0..self.clauses.len()
    }

    /// Number of learned clauses currently stored. Exposed for progress
    /// logging only.
    pub fn num_learned(&self) -> usize {
        self.clauses.iter().filter(|c| c.learned).count()
    }
}

impl std::ops::Index<ClauseId> for ClauseDb {
    type Output = Clause;
    fn index(&self, id: ClauseId) -> &Clause {
        &self.clauses[id]
    }
}

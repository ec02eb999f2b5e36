//! Basic types shared across the solver: variables, literals, decision
//! levels and the small `Config` struct that holds the VSIDS constants.
use std::fmt;
use std::ops::Neg;

/// A propositional variable, 1-based as in the DIMACS convention.
pub type VarId = usize;

/// A decision level. Level 0 holds only facts forced without any decision.
pub type DecisionLevel = usize;

/// Literal encoded as a signed integer: `v` denotes the variable, `-v` its
/// negation. `Lit(0)` never occurs; variable ids start at 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Lit(i32);

impl Lit {
    /// Builds a literal from a variable id and a polarity (`true` = positive).
    #[inline]
    pub fn from_var(vi: VarId, positive: bool) -> Lit {
        debug_assert!(vi > 0);
        Lit(if positive { vi as i32 } else { -(vi as i32) })
    }

    /// Builds a literal from a non-zero signed integer, DIMACS style.
    #[inline]
    pub fn from_i32(x: i32) -> Lit {
        debug_assert_ne!(x, 0);
        Lit(x)
    }

    /// The underlying variable.
    #[inline]
    pub fn vi(self) -> VarId {
        self.0.unsigned_abs() as VarId
    }

    /// `true` iff this is the positive occurrence of its variable.
    #[inline]
    pub fn positive(self) -> bool {
        self.0 > 0
    }

    /// The complementary literal.
    #[inline]
    pub fn negate(self) -> Lit {
        Lit(-self.0)
    }

    /// The signed DIMACS-style integer this literal represents.
    #[inline]
    pub fn to_i32(self) -> i32 {
        self.0
    }

    /// The value this literal takes under an assignment of its variable,
    /// or `None` if the variable is unassigned.
    #[inline]
    pub fn eval(self, value: Option<bool>) -> Option<bool> {
        value.map(|b| if self.positive() { b } else { !b })
    }
}

impl Neg for Lit {
    type Output = Lit;
    #[inline]
    fn neg(self) -> Lit {
        self.negate()
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata about the problem being solved; kept for progress reporting,
/// never consulted for correctness.
#[derive(Debug, Clone, Default)]
pub struct CnfDescription {
    pub num_vars: usize,
    pub num_clauses: usize,
}

impl fmt::Display for CnfDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CNF(vars: {}, clauses: {})", self.num_vars, self.num_clauses)
    }
}

/// Tunable constants for the VSIDS decision heuristic. The contract (see
/// `Config::default`) fixes specific values; callers may override them, but
/// changing them can only affect search order, never soundness.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Growth factor applied to the bump increment on every conflict.
    pub var_decay: f64,
    /// Starting bump increment.
    pub init_increment: f64,
    /// Activities (and the increment) are rescaled once any activity
    /// exceeds this threshold.
    pub rescale_threshold: f64,
    /// Multiplier applied to every activity and to the increment on rescale.
    pub rescale_factor: f64,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            var_decay: 0.95,
            init_increment: 1.0,
            rescale_threshold: 1e100,
            rescale_factor: 1e-100,
        }
    }
}

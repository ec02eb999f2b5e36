/*!
# cdcl-core

A from-scratch Conflict-Driven Clause Learning (CDCL) core for propositional
satisfiability: a trail-based partial assignment with reason tracking,
fixed-point Boolean Constraint Propagation, First-UIP conflict analysis, and
a VSIDS-style decision heuristic, wired together by a small search driver.

This crate implements the *core* decision procedure only. It does not parse
DIMACS/AST input into clauses, does not perform CNF conversion, and does not
filter tautologies or detect empty clauses beyond a defensive check at
construction — those are the caller's job. A small convenience DIMACS reader
is included for running the crate's own test suite and examples end to end,
but it sits outside the core and callers are free to ignore it.

## Usage

```
use cdcl_core::solver::{solve, Certificate};
use cdcl_core::types::{Config, Lit};

let clauses = vec![vec![Lit::from_i32(1), Lit::from_i32(2)], vec![Lit::from_i32(-1)]];
match solve(clauses, 2, Config::default()).unwrap() {
    Certificate::Sat(model) => assert!(model[2]),
    Certificate::Unsat => unreachable!(),
}
```

## Non-goals

No incremental solving under assumptions, no proof/unsat-core emission, no
restart policy, no clause-database reduction, no preprocessing, no parallel
search.
*/

/// Conflict analysis: First-UIP resolution over the implication graph.
pub mod analyze;
/// The partial-assignment trail (decisions, propagations, backjump).
pub mod assign;
/// Clause storage: the immutable clause type and its arena.
pub mod clause;
/// A minimal DIMACS CNF reader, for tests and examples only.
pub mod dimacs;
/// Structured error kinds for the solver's entry points.
pub mod error;
/// The VSIDS-style decision heuristic.
pub mod heuristic;
/// The search driver tying the other components together.
pub mod solver;
/// Shared basic types: variables, literals, decision levels, `Config`.
pub mod types;

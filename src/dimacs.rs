//! A minimal DIMACS CNF reader.
//!
//! This is ambient convenience code, not part of the solving core: the core
//! consumes a pre-validated clause list and variable count. It exists so the
//! crate's own tests and examples can load a `.cnf` file end to end without
//! every caller having to write their own parser.
use std::io::BufRead;

use thiserror::Error;

use crate::types::{CnfDescription, Lit};

/// Failures while reading a DIMACS CNF file.
#[derive(Error, Debug)]
pub enum DimacsError {
    #[error("line {line}: invalid header, expected 'p cnf <vars> <clauses>', got {header:?}")]
    InvalidHeader { line: usize, header: String },
    #[error("line {line}: could not parse literal {token:?}")]
    InvalidLiteral { line: usize, token: String },
    #[error("missing 'p cnf' header")]
    MissingHeader,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The result of parsing a DIMACS CNF document: the declared problem size
/// and the clauses, each as a list of non-zero signed integers.
pub struct DimacsCnf {
    pub description: CnfDescription,
    pub clauses: Vec<Vec<Lit>>,
}

/// Parses a DIMACS CNF document from `reader`.
///
/// Lines starting with `c` are comments. The header line `p cnf <vars>
/// <clauses>` must appear before any clause line. Clauses are terminated by
/// a trailing `0` and may span multiple lines.
pub fn parse<R: BufRead>(reader: R) -> Result<DimacsCnf, DimacsError> {
    let mut description = None;
    let mut clauses = Vec::new();
    let mut current: Vec<Lit> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('c') {
            continue;
        }
        if trimmed.starts_with('p') {
            let mut fields = trimmed.split_whitespace();
            let (p, cnf, vars, clause_count) = (
                fields.next(),
                fields.next(),
                fields.next(),
                fields.next(),
            );
            let parsed = match (p, cnf, vars, clause_count) {
                (Some("p"), Some("cnf"), Some(v), Some(c)) => {
                    v.parse::<usize>().ok().zip(c.parse::<usize>().ok())
                }
                _ => None,
            };
            match parsed {
                Some((num_vars, num_clauses)) => {
                    description = Some(CnfDescription { num_vars, num_clauses });
                }
                None => {
                    return Err(DimacsError::InvalidHeader {
                        line: line_no,
                        header: trimmed.to_string(),
                    })
                }
            }
            continue;
        }
        if description.is_none() {
            return Err(DimacsError::MissingHeader);
        }
        for token in trimmed.split_whitespace() {
            let value: i32 = token.parse().map_err(|_| DimacsError::InvalidLiteral {
                line: line_no,
                token: token.to_string(),
            })?;
            if value == 0 {
                clauses.push(std::mem::take(&mut current));
            } else {
                current.push(Lit::from_i32(value));
            }
        }
    }

    let description = description.ok_or(DimacsError::MissingHeader)?;
    Ok(DimacsCnf { description, clauses })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_clauses() {
        let text = "c a comment\np cnf 2 2\n1 -2 0\n-1 2 0\n";
        let parsed = parse(text.as_bytes()).unwrap();
        assert_eq!(parsed.description.num_vars, 2);
        assert_eq!(parsed.clauses.len(), 2);
        assert_eq!(parsed.clauses[0][0].to_i32(), 1);
        assert_eq!(parsed.clauses[0][1].to_i32(), -2);
    }

    #[test]
    fn clause_without_header_is_an_error() {
        assert!(matches!(parse("1 2 0\n".as_bytes()), Err(DimacsError::MissingHeader)));
    }
}

//! Input validation for simulation requests.
//!
//! Checks structural integrity of the submitted processes before any
//! simulation work starts. Detects:
//! - Empty process sets
//! - Duplicate process IDs
//! - Bursts below 1 or negative arrivals
//! - Missing or negative priorities when the algorithm needs them
//! - Round-robin selected without a usable quantum
//!
//! All problems are collected and reported together rather than failing
//! on the first one.

use std::collections::HashSet;

use crate::models::{Algorithm, Process};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were submitted.
    EmptyProcessSet,
    /// Two processes share the same ID.
    DuplicateId,
    /// A burst time is below 1.
    InvalidBurst,
    /// An arrival time is negative.
    InvalidArrival,
    /// The algorithm needs a priority but a process has none.
    MissingPriority,
    /// A priority value is negative.
    InvalidPriority,
    /// Round-robin without a quantum >= 1.
    InvalidQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a simulation input.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. Every burst >= 1 and every arrival >= 0
/// 4. Priorities present and non-negative for priority algorithms
/// 5. Quantum present and >= 1 for round-robin
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    processes: &[Process],
    algorithm: Algorithm,
    quantum: Option<i64>,
) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "No processes to schedule",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process {} has burst {} (must be >= 1)", p.id, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                format!("Process {} has arrival {} (must be >= 0)", p.id, p.arrival),
            ));
        }

        if algorithm.uses_priority() {
            match p.priority {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::MissingPriority,
                    format!("Process {} has no priority but {algorithm} requires one", p.id),
                )),
                Some(prio) if prio < 0 => errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPriority,
                    format!("Process {} has priority {prio} (must be >= 0)", p.id),
                )),
                Some(_) => {}
            }
        }
    }

    if algorithm.is_round_robin() && !quantum.is_some_and(|q| q >= 1) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            "Round-robin requires a time quantum >= 1",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1).with_arrival(0).with_burst(8).with_priority(3),
            Process::new(2).with_arrival(1).with_burst(4).with_priority(1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample(), Algorithm::Fcfs, None).is_ok());
        assert!(validate_input(&sample(), Algorithm::Priority, None).is_ok());
        assert!(validate_input(&sample(), Algorithm::RoundRobin, Some(2)).is_ok());
    }

    #[test]
    fn test_empty_process_set() {
        let errors = validate_input(&[], Algorithm::Fcfs, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyProcessSet));
    }

    #[test]
    fn test_duplicate_id() {
        let procs = vec![Process::new(1), Process::new(1)];
        let errors = validate_input(&procs, Algorithm::Fcfs, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_invalid_burst_and_arrival() {
        let procs = vec![Process::new(1).with_arrival(-1).with_burst(0)];
        let errors = validate_input(&procs, Algorithm::Fcfs, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidBurst));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidArrival));
    }

    #[test]
    fn test_priority_required() {
        let procs = vec![Process::new(1).with_burst(3)];
        let errors = validate_input(&procs, Algorithm::PreemptivePriority, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingPriority));

        let procs = vec![Process::new(1).with_burst(3).with_priority(-2)];
        let errors = validate_input(&procs, Algorithm::Priority, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidPriority));
    }

    #[test]
    fn test_priority_ignored_when_unused() {
        // Missing priority is fine outside priority algorithms.
        let procs = vec![Process::new(1).with_burst(3)];
        assert!(validate_input(&procs, Algorithm::Sjf, None).is_ok());
    }

    #[test]
    fn test_quantum_required_for_round_robin() {
        let errors = validate_input(&sample(), Algorithm::RoundRobin, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidQuantum));

        let errors = validate_input(&sample(), Algorithm::RoundRobin, Some(0)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidQuantum));

        // Quantum is irrelevant elsewhere.
        assert!(validate_input(&sample(), Algorithm::Fcfs, Some(0)).is_ok());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let procs = vec![
            Process::new(1).with_burst(0),
            Process::new(1).with_arrival(-5),
        ];
        let errors = validate_input(&procs, Algorithm::RoundRobin, None).unwrap_err();
        assert!(errors.len() >= 3);
    }
}

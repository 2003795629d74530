//! Size budget accounting for admitted files.
//!
//! The budget is an explicit value owned by one pipeline run and threaded
//! through the orchestrator; it is never ambient or shared across runs, so
//! concurrent runs are trivially isolated.

/// The outcome of offering one classified entry to the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The file fits; the budget has been charged.
    Admitted,
    /// The file alone exceeds the per-file ceiling.
    TooLarge { size: usize, limit: usize },
    /// Admitting the file would push the aggregate past the total ceiling.
    BudgetExceeded { size: usize, remaining: usize },
}

/// Mutable budget state for a single run.
///
/// `admitted_bytes` only increases during a run; a fresh state is allocated
/// at the start of every run.
#[derive(Debug, Clone)]
pub struct BudgetState {
    admitted_bytes: usize,
    per_file_limit: usize,
    total_limit: usize,
}

impl BudgetState {
    #[must_use]
    pub const fn new(per_file_limit: usize, total_limit: usize) -> Self {
        Self {
            admitted_bytes: 0,
            per_file_limit,
            total_limit,
        }
    }

    /// Offer a decoded text length to the budget.
    ///
    /// Per-file ceiling is checked first, then the aggregate. Exactly at
    /// either limit still admits; only exceeding rejects.
    pub const fn try_admit(&mut self, len: usize) -> Admission {
        if len > self.per_file_limit {
            return Admission::TooLarge {
                size: len,
                limit: self.per_file_limit,
            };
        }
        if self.admitted_bytes + len > self.total_limit {
            return Admission::BudgetExceeded {
                size: len,
                remaining: self.total_limit - self.admitted_bytes,
            };
        }
        self.admitted_bytes += len;
        Admission::Admitted
    }

    /// Total decoded bytes admitted so far.
    #[must_use]
    pub const fn admitted_bytes(&self) -> usize {
        self.admitted_bytes
    }

    /// The per-file ceiling this state was created with.
    #[must_use]
    pub const fn per_file_limit(&self) -> usize {
        self.per_file_limit
    }

    /// The aggregate ceiling this state was created with.
    #[must_use]
    pub const fn total_limit(&self) -> usize {
        self.total_limit
    }
}

//! Structured reasoning clauses.
//!
//! The justification string is assembled from an ordered clause list
//! rather than by ad-hoc concatenation, which keeps the adjustment order
//! (directedness before precision) explicit and testable.

/// One clause of the justification text.
#[derive(Debug, Clone, PartialEq)]
pub enum ReasonClause {
    /// The selected rule's base rationale
    Base(&'static str),
    /// Undirected graphs pay roughly a 1.7x slowdown
    UndirectedSlowdown,
    /// A strict tolerance tightens the convergence criterion
    HighPrecision { tolerance: f64 },
}

impl ReasonClause {
    fn render(&self) -> String {
        match self {
            Self::Base(text) => (*text).to_string(),
            Self::UndirectedSlowdown => {
                "[Undirected graphs run about 1.7x slower than directed ones; \
                 the denser effective topology raises the per-iteration cost]"
                    .to_string()
            }
            Self::HighPrecision { tolerance } => {
                format!(
                    "[High precision requirement ({:e}) strengthens the convergence criterion]",
                    tolerance
                )
            }
        }
    }
}

/// Ordered clause list, rendered once at assembly time.
#[derive(Debug, Clone, PartialEq)]
pub struct Reasoning {
    clauses: Vec<ReasonClause>,
}

impl Reasoning {
    /// Start from a base rationale
    pub fn new(base: &'static str) -> Self {
        Self {
            clauses: vec![ReasonClause::Base(base)],
        }
    }

    /// Append an adjustment clause. Callers push in adjustment order.
    pub fn push(&mut self, clause: ReasonClause) {
        self.clauses.push(clause);
    }

    /// The clauses in append order
    pub fn clauses(&self) -> &[ReasonClause] {
        &self.clauses
    }

    /// Join all clauses into the final justification string
    pub fn render(&self) -> String {
        self.clauses
            .iter()
            .map(ReasonClause::render)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

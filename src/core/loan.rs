// Estatery - core/loan.rs
//
// Home-loan EMI (equated monthly instalment) arithmetic backing the
// affordability widget on the buy page.

use crate::util::constants;

/// Loan parameters for the EMI calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    /// Principal in rupees.
    pub principal: f64,

    /// Annual interest rate in percent.
    pub annual_rate_pct: f64,

    /// Term in years.
    pub years: u32,
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self {
            principal: constants::DEFAULT_LOAN_PRINCIPAL,
            annual_rate_pct: constants::DEFAULT_LOAN_RATE_PCT,
            years: constants::DEFAULT_LOAN_TERM_YEARS,
        }
    }
}

impl LoanTerms {
    /// Number of monthly instalments over the term.
    pub fn months(&self) -> u32 {
        self.years * 12
    }

    /// Monthly instalment: P·r·(1+r)^n / ((1+r)^n − 1) with r the monthly
    /// rate and n the number of months. A zero rate degrades to straight
    /// division and a zero-month term yields 0.
    pub fn monthly_instalment(&self) -> f64 {
        let n = self.months();
        if n == 0 {
            return 0.0;
        }
        let r = self.annual_rate_pct / 12.0 / 100.0;
        if r == 0.0 {
            return self.principal / n as f64;
        }
        let growth = (1.0 + r).powi(n as i32);
        self.principal * r * growth / (growth - 1.0)
    }

    /// Total amount payable over the full term.
    pub fn total_payable(&self) -> f64 {
        self.monthly_instalment() * self.months() as f64
    }

    /// Interest component of the total payable.
    pub fn total_interest(&self) -> f64 {
        self.total_payable() - self.principal
    }
}

// =============================================================================
// Unit tests
// =============================================================================

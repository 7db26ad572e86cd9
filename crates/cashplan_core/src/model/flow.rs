use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Money moving toward (`income`) or away from (`expense`) the holder for
/// one month. Both sides are non-negative; the net effect is
/// `income - expense`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowChange {
    pub income: f64,
    pub expense: f64,
}

impl CashFlowChange {
    pub const ZERO: CashFlowChange = CashFlowChange {
        income: 0.0,
        expense: 0.0,
    };

    pub fn new(income: f64, expense: f64) -> Self {
        Self { income, expense }
    }

    pub fn income(amount: f64) -> Self {
        Self {
            income: amount,
            expense: 0.0,
        }
    }

    pub fn expense(amount: f64) -> Self {
        Self {
            income: 0.0,
            expense: amount,
        }
    }

    pub fn net(&self) -> f64 {
        self.income - self.expense
    }

    /// True only when both sides are exactly zero. Zero changes are omitted
    /// from breakdowns, so "present in a breakdown" means "active this month".
    pub fn is_zero(&self) -> bool {
        self.income == 0.0 && self.expense == 0.0
    }
}

impl Add for CashFlowChange {
    type Output = CashFlowChange;

    fn add(self, rhs: CashFlowChange) -> CashFlowChange {
        CashFlowChange {
            income: self.income + rhs.income,
            expense: self.expense + rhs.expense,
        }
    }
}

impl AddAssign for CashFlowChange {
    fn add_assign(&mut self, rhs: CashFlowChange) {
        self.income += rhs.income;
        self.expense += rhs.expense;
    }
}

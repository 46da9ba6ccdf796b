//! Common types used across multiple endpoints
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reporting cadence of a financial statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Annual reports
    #[default]
    Annual,
    /// Quarterly reports
    Quarter,
}

impl Period {
    /// The value the API expects for this period
    pub const fn as_str(&self) -> &'static str {
        match self {
            Period::Annual => "annual",
            Period::Quarter => "quarter",
        }
    }
}

impl FromStr for Period {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annual" => Ok(Period::Annual),
            "quarter" => Ok(Period::Quarter),
            _ => Err(crate::error::Error::InvalidArgument(format!(
                "invalid period {s:?}, expected \"annual\" or \"quarter\""
            ))),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Period> for String {
    fn from(value: Period) -> Self {
        value.as_str().to_string()
    }
}

/// Which financial statement to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// Enterprise value, including shares outstanding
    EnterpriseValue,
    /// Income statement
    Income,
    /// Cash flow statement
    CashFlow,
    /// Balance sheet statement
    BalanceSheet,
}

impl StatementKind {
    /// Path of the endpoint relative to the API base, without the ticker
    pub const fn path(&self) -> &'static str {
        match self {
            StatementKind::EnterpriseValue => "enterprise-value",
            StatementKind::Income => "financials/income-statement",
            StatementKind::CashFlow => "financials/cash-flow-statement",
            StatementKind::BalanceSheet => "financials/balance-sheet-statement",
        }
    }

    /// All statement kinds
    pub const ALL: [StatementKind; 4] = [
        StatementKind::EnterpriseValue,
        StatementKind::Income,
        StatementKind::CashFlow,
        StatementKind::BalanceSheet,
    ];
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatementKind::EnterpriseValue => write!(f, "enterprise value"),
            StatementKind::Income => write!(f, "income statement"),
            StatementKind::CashFlow => write!(f, "cash flow statement"),
            StatementKind::BalanceSheet => write!(f, "balance sheet statement"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn period_parses_recognized_values() {
        assert_eq!("annual".parse::<Period>().unwrap(), Period::Annual);
        assert_eq!("quarter".parse::<Period>().unwrap(), Period::Quarter);
        assert_eq!(Period::default(), Period::Annual);
    }

    #[test]
    fn period_rejects_everything_else() {
        for bad in ["", "Annual", "QUARTER", "quarterly", "monthly", " annual"] {
            let err = bad.parse::<Period>().unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{bad:?} gave {err:?}");
        }
    }

    #[test]
    fn statement_paths() {
        assert_eq!(StatementKind::EnterpriseValue.path(), "enterprise-value");
        assert_eq!(StatementKind::Income.path(), "financials/income-statement");
        assert_eq!(StatementKind::CashFlow.path(), "financials/cash-flow-statement");
        assert_eq!(StatementKind::BalanceSheet.path(), "financials/balance-sheet-statement");
    }
}

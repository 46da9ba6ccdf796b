//! Financial statement endpoints returning parsed JSON

use crate::client::FinancialModelingPrep;
use crate::processor::Json;
use crate::request::Request;
use crate::request::common::StatementKind;
use crate::request::fundamentals::Statement;

/// Get the enterprise value statement for a stock
///
/// Returns a request builder that will return the parsed JSON body, one
/// record per reporting period.
///
/// # Example
/// ```no_run
/// # use fmprep::FinancialModelingPrep;
/// # async fn example() {
/// # let client = FinancialModelingPrep::default();
/// let json = fmprep::rest::fundamentals::enterprise_value(&client, "AAPL")
///     .period("quarter")
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn enterprise_value<'a, Client: Request>(
    client: &'a FinancialModelingPrep<Client>,
    symbol: impl Into<String>,
) -> Statement<'a, Client, Json> {
    Statement::new(client, StatementKind::EnterpriseValue, symbol)
}

/// Get the income statement for a stock
pub fn income_statement<'a, Client: Request>(
    client: &'a FinancialModelingPrep<Client>,
    symbol: impl Into<String>,
) -> Statement<'a, Client, Json> {
    Statement::new(client, StatementKind::Income, symbol)
}

/// Get the cash flow statement for a stock
pub fn cash_flow_statement<'a, Client: Request>(
    client: &'a FinancialModelingPrep<Client>,
    symbol: impl Into<String>,
) -> Statement<'a, Client, Json> {
    Statement::new(client, StatementKind::CashFlow, symbol)
}

/// Get the balance sheet statement for a stock
pub fn balance_sheet_statement<'a, Client: Request>(
    client: &'a FinancialModelingPrep<Client>,
    symbol: impl Into<String>,
) -> Statement<'a, Client, Json> {
    Statement::new(client, StatementKind::BalanceSheet, symbol)
}

/// Get any statement by kind
pub fn statement<'a, Client: Request>(
    client: &'a FinancialModelingPrep<Client>,
    kind: StatementKind,
    symbol: impl Into<String>,
) -> Statement<'a, Client, Json> {
    Statement::new(client, kind, symbol)
}

//! DataFrame conversion for statement and price history responses
#![cfg(feature = "table")]

mod common;

use common::client;
use fmprep::Error;
use fmprep::rest::{fundamentals, prices};

#[tokio::test]
async fn financials_member_becomes_rows() {
    let client = client();
    client.client().ok(
        r#"{"symbol":"AAPL","financials":[
            {"date":"2019-09-28","Revenue":"2.6017E11","Net Income":"5.5256E10"},
            {"date":"2018-09-29","Revenue":"2.65595E11","Net Income":"5.9531E10"},
            {"date":"2017-09-30","Revenue":"2.29234E11","Net Income":"4.8351E10"}
        ]}"#,
    );

    let df = fundamentals::income_statement(&client, "AAPL")
        .table()
        .get()
        .await
        .unwrap();

    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 3);
}

#[tokio::test]
async fn enterprise_values_member_becomes_rows() {
    let client = client();
    client.client().ok(
        r#"{"symbol":"AAPL","enterpriseValues":[
            {"date":"2019-12-28","Stock Price":289.8,"Number of Shares":4.4433E9},
            {"date":"2019-09-28","Stock Price":223.97,"Number of Shares":4.5748E9}
        ]}"#,
    );

    let df = fundamentals::enterprise_value(&client, "AAPL")
        .period("quarter")
        .table()
        .get()
        .await
        .unwrap();

    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 3);
}

#[tokio::test]
async fn price_history_becomes_rows() {
    let client = client();
    client.client().ok(
        r#"{"symbol":"AAPL","historical":[
            {"date":"2020-01-31","open":320.93,"close":309.51},
            {"date":"2020-01-30","open":320.54,"close":323.87}
        ]}"#,
    );

    let df = prices::historical_price_full(&client, "AAPL")
        .from("2020-01-30")
        .to("2020-01-31")
        .table()
        .get()
        .await
        .unwrap();

    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 3);
}

#[tokio::test]
async fn bare_array_becomes_rows() {
    let client = client();
    client.client().ok(r#"[{"date":"2019-09-28","revenue":260174000000.0}]"#);

    let df = fundamentals::cash_flow_statement(&client, "AAPL")
        .table()
        .get()
        .await
        .unwrap();

    assert_eq!(df.height(), 1);
}

#[tokio::test]
async fn object_without_records_is_rejected() {
    let client = client();
    client.client().ok(r#"{"Error Message":"Invalid API KEY."}"#);

    let err = fundamentals::balance_sheet_statement(&client, "AAPL")
        .table()
        .get()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Custom(_)));
}

//! Table processor using Polars DataFrames
use crate::error::Result;
use crate::processor::{Processor, ensure_success};
use crate::response::Response;
use polars_core::frame::DataFrame;
use polars_io::prelude::*;
use std::io::Cursor;

/// Table processor that converts statement and price history responses to Polars DataFrames
pub struct Table;

impl Processor for Table {
    type Output = DataFrame;

    fn process<R: Response>(&self, response: Result<R>) -> Result<DataFrame> {
        let resp = response?;
        ensure_success(&resp)?;

        let json_value: serde_json::Value = serde_json::from_str(resp.body())?;

        // v3 wraps records in a per-endpoint member; newer endpoints return a bare array
        let data = json_value
            .get("historical")
            .or_else(|| json_value.get("financials"))
            .or_else(|| json_value.get("enterpriseValues"))
            .unwrap_or(&json_value);

        if !data.is_array() {
            return Err(crate::error::Error::Custom(format!(
                "Expected array data for DataFrame conversion, got: {}",
                if data.is_object() {
                    "object"
                } else if data.is_null() {
                    "null"
                } else {
                    "other"
                }
            )));
        }

        let json_bytes = serde_json::to_vec(data)?;
        let json_preview = String::from_utf8_lossy(&json_bytes[..json_bytes.len().min(200)]).to_string();
        let df = JsonReader::new(Cursor::new(json_bytes)).finish().map_err(|e| {
            crate::error::Error::Custom(format!(
                "Failed to parse JSON as DataFrame: {}. Data preview: {}",
                e, json_preview
            ))
        })?;
        Ok(df)
    }
}

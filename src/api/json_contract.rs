use serde::Serialize;

use crate::error::ChartResult;

use super::AxesOption;

pub const AXES_OPTION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct AxesOptionJsonContractV1<'a> {
    pub schema_version: u32,
    pub axes: &'a AxesOption,
}

impl AxesOption {
    /// Serializes the declarative part of the option.
    ///
    /// Label formatters are omitted and deferred bounds are evaluated.
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = AxesOptionJsonContractV1 {
            schema_version: AXES_OPTION_JSON_SCHEMA_V1,
            axes: self,
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    pub fn to_json_value(&self) -> ChartResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for the calculator tool
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateParams {
    /// Mathematical expression to evaluate. Supports basic arithmetic,
    /// functions, and more.
    #[schemars(length(min = 1))]
    pub expression: String,
}

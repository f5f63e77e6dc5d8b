// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

use crate::error::RestApiError;
use serde_json::Value;

/// Decoded JSON body of a REST API response.
/// The schema is owned by the node and is not modelled here.
pub type RestResponse = Value;

/// Moves `field` out of a JSON object, e.g. the `data` or `link` member of a response.
///
/// # Errors
///
/// Returns [`RestApiError::MissingField`] if `value` is not an object or lacks `field`.
pub fn take_field(mut value: RestResponse, field: &'static str) -> Result<Value, RestApiError> {
    value
        .get_mut(field)
        .map(Value::take)
        .ok_or(RestApiError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_take_field() {
        let body = json!({"data": [{"header_signature": "abc"}], "head": "abc"});
        let data = take_field(body, "data").unwrap();
        assert_eq!(data, json!([{"header_signature": "abc"}]));
    }

    #[test]
    fn test_take_field_missing() {
        let body = json!({"error": {"code": 75}});
        assert!(matches!(
            take_field(body, "link"),
            Err(RestApiError::MissingField("link"))
        ));
        assert!(matches!(
            take_field(json!([1, 2]), "data"),
            Err(RestApiError::MissingField("data"))
        ));
    }
}

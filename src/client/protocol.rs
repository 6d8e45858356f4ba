use crate::error::Error;

#[derive(serde::Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) id: u64,
    pub(super) method: &'a str,
    pub(super) params: Vec<serde_json::Value>,
}

#[derive(serde::Deserialize)]
pub(super) struct JsonRpcResponse {
    pub(super) result: Option<serde_json::Value>,
    pub(super) error: Option<serde_json::Value>,
}

/// Parse a JSON-RPC error value into a structured [`Error`].
///
/// The JSON-RPC spec defines errors as `{"code": <int>, "message": <string>}`.
/// If the error value matches that shape, we produce an [`Error::Rpc`]
/// carrying the daemon's code and message verbatim; otherwise we fall back
/// to [`Error::InvalidResponse`] with the raw JSON.
pub(super) fn parse_jsonrpc_error(err: serde_json::Value) -> Error {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
    }

    if let Ok(parsed) = serde_json::from_value::<JsonRpcError>(err.clone()) {
        Error::Rpc {
            code: parsed.code,
            message: parsed.message,
        }
    } else {
        Error::InvalidResponse(format!("non-standard JSON-RPC error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_standard_error_object() {
        let err = parse_jsonrpc_error(serde_json::json!({"code": -8, "message": "bad"}));
        assert!(matches!(err, Error::Rpc { code: -8, message } if message == "bad"));
    }

    #[test]
    fn parse_error_with_extra_data_field() {
        let err = parse_jsonrpc_error(serde_json::json!({
            "code": -32601,
            "message": "Method not found",
            "data": {"hint": "typo?"},
        }));
        assert!(matches!(err, Error::Rpc { code: -32601, .. }));
    }

    #[test]
    fn parse_non_standard_error_falls_back() {
        let err = parse_jsonrpc_error(serde_json::json!("wallet exploded"));
        assert!(matches!(err, Error::InvalidResponse(_)));
    }
}

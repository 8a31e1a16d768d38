//! Wire types for the roles endpoints
//!
//! The backend wraps every response in an
//! `{ isSuccess, result, errorMessage }` envelope with camelCase
//! field names.

use serde::{Deserialize, Serialize};

/// A named permission group record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Server-assigned identity
    pub id: i64,
    pub name: String,
}

/// Response envelope shared by all roles endpoints.
///
/// `isSuccess` is assumed true when the field is absent: the update
/// endpoint omits it on success.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default = "default_true")]
    pub is_success: bool,

    #[serde(default)]
    pub result: Option<T>,

    #[serde(default)]
    pub error_message: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Create role request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRoleRequest {
    pub role_name: String,
}

/// `result` payload returned by the add endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRole {
    #[serde(default)]
    pub id: Option<i64>,
    pub role_name: String,
}

/// Request body shared by the update and delete endpoints
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutateRoleRequest {
    pub role_id: i64,
    pub role_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_uses_camel_case() {
        let role: Role = serde_json::from_str(r#"{"id": 3, "name": "Admin"}"#).unwrap();
        assert_eq!(role, Role { id: 3, name: "Admin".into() });
    }

    #[test]
    fn test_envelope_missing_is_success_defaults_true() {
        let envelope: Envelope<Vec<Role>> = serde_json::from_str("{}").unwrap();
        assert!(envelope.is_success);
        assert!(envelope.result.is_none());
    }

    #[test]
    fn test_envelope_error_message() {
        let envelope: Envelope<Vec<Role>> =
            serde_json::from_str(r#"{"isSuccess": false, "errorMessage": "denied"}"#).unwrap();
        assert!(!envelope.is_success);
        assert_eq!(envelope.error_message.as_deref(), Some("denied"));
    }

    #[test]
    fn test_mutate_request_camel_case() {
        let body = MutateRoleRequest { role_id: 7, role_name: "Manager".into() };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"roleId\":7"));
        assert!(json.contains("\"roleName\":\"Manager\""));
    }
}

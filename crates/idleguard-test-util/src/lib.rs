//! Shared test utilities: inventory fixture builders and report
//! normalization for comparing CLI output against expected JSON.

#![forbid(unsafe_code)]

use serde_json::{json, Value};

pub const TEST_ACCOUNT: &str = "123456789012";

/// Build a security-group snapshot. `in_use: None` models a group returned
/// without the usage annotation.
pub fn sample_group(name: &str, id: &str, in_use: Option<bool>) -> Value {
    let mut group = json!({
        "account": TEST_ACCOUNT,
        "id": id,
        "name": name,
        "vpc_id": "vpc-0123",
    });
    if let Some(in_use) = in_use {
        group["in_use"] = json!(in_use);
    }
    group
}

/// Build a role snapshot. Dates are RFC 3339 strings.
pub fn sample_role(
    name: &str,
    path: Option<&str>,
    created: &str,
    last_used: Option<&str>,
) -> Value {
    let mut role = json!({
        "account": TEST_ACCOUNT,
        "name": name,
        "id": format!("AROA{}", name.to_uppercase()),
        "arn": format!("arn:aws:iam::{TEST_ACCOUNT}:role/{name}"),
        "max_session_duration": 3600,
        "created_date": created,
    });
    if let Some(path) = path {
        role["path"] = json!(path);
    }
    if let Some(used) = last_used {
        role["last_used"] = json!({ "used_date": used });
    }
    role
}

/// Build a user snapshot. `key_last_used` creates one access key per entry;
/// `None` entries are keys that were provisioned but never used.
pub fn sample_user(
    name: &str,
    created: &str,
    password_last_used: Option<&str>,
    login_profile_created: Option<&str>,
    key_last_used: Vec<Option<&str>>,
) -> Value {
    let mut user = json!({
        "account": TEST_ACCOUNT,
        "name": name,
        "id": format!("AIDA{}", name.to_uppercase()),
        "arn": format!("arn:aws:iam::{TEST_ACCOUNT}:user/{name}"),
        "created_date": created,
    });
    if let Some(used) = password_last_used {
        user["password_last_used_date"] = json!(used);
    }
    if let Some(created) = login_profile_created {
        user["login_profile"] = json!({ "created_date": created });
    }
    if !key_last_used.is_empty() {
        let keys: Vec<Value> = key_last_used
            .into_iter()
            .enumerate()
            .map(|(i, used)| {
                let mut key = json!({
                    "id": format!("AKIAEXAMPLE{i}"),
                    "status": "Active",
                    "created_date": "2022-06-18T00:00:00Z",
                });
                if let Some(used) = used {
                    key["last_used_date"] = json!(used);
                }
                key
            })
            .collect();
        user["access_keys"] = json!(keys);
    }
    user
}

/// Build a full `idleguard.inventory.v1` export document.
pub fn inventory_json(groups: Vec<Value>, roles: Vec<Value>, users: Vec<Value>) -> Value {
    json!({
        "schema": "idleguard.inventory.v1",
        "account": TEST_ACCOUNT,
        "security_groups": groups,
        "roles": roles,
        "users": users,
    })
}

/// Replace run-dependent report fields (timestamps, computed ages) with
/// stable placeholders so reports can be compared structurally.
pub fn normalize_report(mut value: Value) -> Value {
    normalize_in_place(&mut value);
    value
}

fn normalize_in_place(value: &mut Value) {
    match value {
        Value::Object(obj) => {
            for key in ["started_at", "finished_at"] {
                if obj.contains_key(key) {
                    obj.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            if obj.contains_key("age_days") {
                obj.insert("age_days".to_string(), Value::String("__AGE__".to_string()));
            }
            // Messages embed computed ages; findings stay comparable via
            // check_id/code/subject.
            if obj.contains_key("message") && obj.contains_key("check_id") {
                obj.insert(
                    "message".to_string(),
                    Value::String("__MESSAGE__".to_string()),
                );
            }
            for (_, v) in obj.iter_mut() {
                normalize_in_place(v);
            }
        }
        Value::Array(arr) => {
            for v in arr.iter_mut() {
                normalize_in_place(v);
            }
        }
        _ => {}
    }
}

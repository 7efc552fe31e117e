//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and either the expected parse result or the expected error variant.
//! Comparing parsed JSON (not raw strings) avoids false negatives from
//! field-ordering differences.

use serde::de::DeserializeOwned;
use serde_json::Value;
use todo_sync::{
    ApiError, CreateTodo, HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoId, TodoItem,
    ToggleTodo, ToggledTodo,
};

const BASE_URL: &str = "http://localhost:7000";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    match expected.get("body") {
        Some(body) => {
            let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: unexpected body"),
    }
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Compare a parse outcome with the case's `expected_result` or `expected_error`.
fn check_outcome<T>(name: &str, case: &Value, outcome: Result<T, ApiError>)
where
    T: DeserializeOwned + PartialEq + std::fmt::Debug,
{
    match case.get("expected_error").and_then(Value::as_str) {
        Some(expected) => {
            let err = outcome.unwrap_err();
            let matched = match expected {
                "NotFound" => matches!(err, ApiError::NotFound),
                "HttpError" => matches!(err, ApiError::HttpError { .. }),
                "DeserializationError" => matches!(err, ApiError::DeserializationError(_)),
                other => panic!("{name}: unknown error kind {other}"),
            };
            assert!(matched, "{name}: expected {expected}, got {err:?}");
        }
        None => {
            let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(outcome.unwrap(), expected, "{name}: parsed result");
        }
    }
}

fn input_id(case: &Value) -> TodoId {
    serde_json::from_value(case["input"]["id"].clone()).unwrap()
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        check_request(name, &c.build_list(), &case["expected_request"]);
        check_outcome::<Vec<TodoItem>>(name, &case, c.parse_list(simulated_response(&case)));
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: CreateTodo = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_create(&input).unwrap();
        check_request(name, &req, &case["expected_request"]);
        check_outcome::<TodoItem>(name, &case, c.parse_create(simulated_response(&case)));
    }
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

#[test]
fn toggle_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/toggle.json")) {
        let name = case["name"].as_str().unwrap();
        let input = ToggleTodo {
            completed: case["input"]["completed"].as_bool().unwrap(),
        };
        let req = c.build_toggle(&input_id(&case), &input).unwrap();
        check_request(name, &req, &case["expected_request"]);
        check_outcome::<ToggledTodo>(name, &case, c.parse_toggle(simulated_response(&case)));
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let req = c.build_delete(&input_id(&case));
        check_request(name, &req, &case["expected_request"]);
        check_outcome::<Vec<TodoItem>>(name, &case, c.parse_delete(simulated_response(&case)));
    }
}

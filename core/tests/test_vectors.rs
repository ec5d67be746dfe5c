//! Replay operation test vectors from `test-vectors/` through a scripted
//! transport.
//!
//! Each vector file describes one resource kind: the operation to call, its
//! params, the expected request (method, path, body, token header), a
//! simulated response, and the expected outcome. Pre-send failures carry no
//! `expected_request` and the runner asserts the transport was never
//! invoked. Comparing bodies as parsed JSON (not raw strings) avoids false
//! negatives from field-ordering differences.

use std::cell::RefCell;
use std::collections::HashMap;

use cachet_core::{
    CachetClient, Error, HttpMethod, HttpRequest, HttpResponse, Params, Transport, TransportError,
};
use serde_json::Value;

const BASE_URL: &str = "https://status.example.com";
const TOKEN: &str = "secret";

/// Records requests and replays the vector's scripted response.
struct ScriptedTransport {
    requests: RefCell<Vec<HttpRequest>>,
    response: Option<(u16, String)>,
}

impl ScriptedTransport {
    fn from_case(case: &Value) -> Self {
        let response = case.get("simulated_response").map(|sim| {
            (
                sim["status"].as_u64().unwrap() as u16,
                sim["body"].as_str().unwrap().to_string(),
            )
        });
        Self {
            requests: RefCell::new(Vec::new()),
            response,
        }
    }
}

impl Transport for &ScriptedTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        match &self.response {
            Some((status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            None => Err(TransportError("no scripted response".to_string())),
        }
    }
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn dispatch(
    client: &CachetClient<HashMap<String, String>, &ScriptedTransport>,
    operation: &str,
    id: Option<u64>,
    metric_id: Option<u64>,
    params: &Params,
) -> Result<Value, Error> {
    let need_id = || id.expect("vector is missing an id");
    let need_metric = || metric_id.expect("vector is missing a metric_id");
    match operation {
        "ping" => client.ping(),
        "get_components" => client.get_components(id),
        "add_component" => client.add_component(params),
        "update_component" => client.update_component(need_id(), params),
        "delete_component" => client.delete_component(need_id()),
        "get_component_groups" => client.get_component_groups(id),
        "add_component_group" => client.add_component_group(params),
        "update_component_group" => client.update_component_group(need_id(), params),
        "delete_component_group" => client.delete_component_group(need_id()),
        "get_incidents" => client.get_incidents(id),
        "add_incident" => client.add_incident(params),
        "update_incident" => client.update_incident(need_id(), params),
        "delete_incident" => client.delete_incident(need_id()),
        "get_metrics" => client.get_metrics(id),
        "add_metric" => client.add_metric(params),
        "delete_metric" => client.delete_metric(need_id()),
        "get_metric_points" => client.get_metric_points(need_metric(), id),
        "add_metric_point" => client.add_metric_point(need_metric(), params),
        "delete_metric_point" => client.delete_metric_point(need_metric(), need_id()),
        other => panic!("unknown operation: {other}"),
    }
}

fn run_vectors(raw: &str) {
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let mut config = HashMap::new();
    config.insert("cachet.api_url".to_string(), BASE_URL.to_string());
    config.insert("cachet.api_token".to_string(), TOKEN.to_string());

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let transport = ScriptedTransport::from_case(case);
        let client = CachetClient::new(config.clone(), &transport);

        let params: Params = case
            .get("params")
            .and_then(|p| p.as_object())
            .cloned()
            .unwrap_or_default();
        let result = dispatch(
            &client,
            case["operation"].as_str().unwrap(),
            case["id"].as_u64(),
            case["metric_id"].as_u64(),
            &params,
        );

        match case.get("expected_request") {
            Some(expected) => {
                let request = transport
                    .requests
                    .borrow()
                    .last()
                    .cloned()
                    .unwrap_or_else(|| panic!("{name}: no request was sent"));
                assert_eq!(
                    request.method,
                    parse_method(expected["method"].as_str().unwrap()),
                    "{name}: method"
                );
                assert_eq!(
                    request.url,
                    format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
                    "{name}: url"
                );

                match expected.get("body") {
                    Some(expected_body) => {
                        let body: Value =
                            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
                        assert_eq!(&body, expected_body, "{name}: body");
                    }
                    None => assert!(request.body.is_none(), "{name}: body should be empty"),
                }

                let has_token = request
                    .headers
                    .contains(&("X-Cachet-Token".to_string(), TOKEN.to_string()));
                assert_eq!(
                    has_token,
                    expected["token"].as_bool().unwrap(),
                    "{name}: token header"
                );
            }
            None => {
                assert_eq!(
                    transport.requests.borrow().len(),
                    0,
                    "{name}: expected the failure before any request"
                );
            }
        }

        match case.get("expected_error") {
            Some(expected) => {
                let err = match result {
                    Err(err) => err,
                    Ok(value) => panic!("{name}: expected an error, got {value}"),
                };
                let expected = expected.as_str().unwrap();
                assert!(
                    err.to_string().contains(expected),
                    "{name}: error {err:?} does not mention {expected:?}"
                );
            }
            None => {
                let value = result.unwrap_or_else(|e| panic!("{name}: unexpected error {e}"));
                assert_eq!(value, case["expected_result"], "{name}: result");
            }
        }
    }
}

#[test]
fn component_vectors() {
    run_vectors(include_str!("../../test-vectors/components.json"));
}

#[test]
fn component_group_vectors() {
    run_vectors(include_str!("../../test-vectors/component_groups.json"));
}

#[test]
fn incident_vectors() {
    run_vectors(include_str!("../../test-vectors/incidents.json"));
}

#[test]
fn metric_vectors() {
    run_vectors(include_str!("../../test-vectors/metrics.json"));
}

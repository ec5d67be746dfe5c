//! In-memory mock of the Cachet v1 API surface the client targets.
//!
//! Responses use Cachet's `{"data": ...}` envelope, deletes answer 204,
//! and mutating routes require the `X-Cachet-Token` header to match
//! [`API_TOKEN`], answering 401 with an `{"error": ...}` body otherwise.
//! Ids are sequential integers per resource kind, like a fresh Cachet
//! installation.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

/// Token accepted on mutating routes.
pub const API_TOKEN: &str = "test-token";

#[derive(Clone, Debug, Serialize)]
pub struct Component {
    pub id: u64,
    pub name: String,
    pub status: i64,
    pub description: Option<String>,
    pub link: Option<String>,
    pub order: i64,
    pub group_id: Option<u64>,
    pub enabled: bool,
}

#[derive(Deserialize)]
pub struct CreateComponent {
    pub name: String,
    pub status: i64,
    pub description: Option<String>,
    pub link: Option<String>,
    #[serde(default)]
    pub order: i64,
    pub group_id: Option<u64>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Deserialize)]
pub struct UpdateComponent {
    pub name: Option<String>,
    pub status: Option<i64>,
    pub link: Option<String>,
    pub order: Option<i64>,
    pub group_id: Option<u64>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ComponentGroup {
    pub id: u64,
    pub name: String,
    pub order: i64,
}

#[derive(Deserialize)]
pub struct CreateComponentGroup {
    pub name: String,
    #[serde(default)]
    pub order: i64,
}

#[derive(Deserialize)]
pub struct UpdateComponentGroup {
    pub name: Option<String>,
    pub order: Option<i64>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Incident {
    pub id: u64,
    pub name: String,
    pub message: String,
    pub status: i64,
    pub visible: i64,
    pub component_id: Option<u64>,
    pub component_status: Option<i64>,
    pub notify: bool,
}

#[derive(Deserialize)]
pub struct CreateIncident {
    pub name: String,
    pub message: String,
    pub status: i64,
    #[serde(default = "default_one")]
    pub visible: i64,
    pub component_id: Option<u64>,
    pub component_status: Option<i64>,
    #[serde(default)]
    pub notify: bool,
}

#[derive(Deserialize)]
pub struct UpdateIncident {
    pub name: Option<String>,
    pub message: Option<String>,
    pub status: Option<i64>,
    pub visible: Option<i64>,
    pub component_id: Option<u64>,
    pub notify: Option<bool>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Metric {
    pub id: u64,
    pub name: String,
    pub suffix: String,
    pub description: String,
    pub default_value: f64,
    pub display_chart: i64,
}

#[derive(Deserialize)]
pub struct CreateMetric {
    pub name: String,
    pub suffix: String,
    pub description: String,
    #[serde(default)]
    pub default_value: f64,
    #[serde(default = "default_one")]
    pub display_chart: i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct MetricPoint {
    pub id: u64,
    pub value: f64,
}

#[derive(Deserialize)]
pub struct CreateMetricPoint {
    pub value: f64,
}

fn default_true() -> bool {
    true
}

fn default_one() -> i64 {
    1
}

/// Rows of one resource kind with its id counter.
#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

#[derive(Default, Debug)]
pub struct Store {
    components: Table<Component>,
    groups: Table<ComponentGroup>,
    incidents: Table<Incident>,
    metrics: Table<Metric>,
    points: BTreeMap<u64, Table<MetricPoint>>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/v1/ping", get(ping))
        .route("/api/v1/components", get(list_components).post(create_component))
        .route(
            "/api/v1/components/{id}",
            get(get_component).put(update_component).delete(delete_component),
        )
        .route("/api/v1/components/groups", get(list_groups).post(create_group))
        .route(
            "/api/v1/components/groups/{id}",
            get(get_group).put(update_group).delete(delete_group),
        )
        .route("/api/v1/incidents", get(list_incidents).post(create_incident))
        .route(
            "/api/v1/incidents/{id}",
            get(get_incident).put(update_incident).delete(delete_incident),
        )
        .route("/api/v1/metrics", get(list_metrics).post(create_metric))
        .route("/api/v1/metrics/{id}", get(get_metric).delete(delete_metric))
        .route("/api/v1/metrics/{id}/points", get(list_points).post(create_point))
        .route(
            "/api/v1/metrics/{id}/points/{point_id}",
            get(get_point).delete(delete_point),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// 401 unless the request carries the expected token.
fn require_token(headers: &HeaderMap) -> Result<(), Response> {
    let supplied = headers
        .get("x-cachet-token")
        .and_then(|value| value.to_str().ok());
    if supplied == Some(API_TOKEN) {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "invalid or missing API token"})),
        )
            .into_response())
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response()
}

fn data<T: Serialize>(payload: T) -> Response {
    Json(json!({"data": payload})).into_response()
}

async fn ping() -> Response {
    data("Pong!")
}

// --- components ---

async fn list_components(State(db): State<Db>) -> Response {
    data(db.read().await.components.list())
}

async fn get_component(State(db): State<Db>, Path(id): Path<u64>) -> Response {
    match db.read().await.components.rows.get(&id) {
        Some(component) => data(component),
        None => not_found(),
    }
}

async fn create_component(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreateComponent>,
) -> Response {
    if let Err(response) = require_token(&headers) {
        return response;
    }
    let component = db.write().await.components.insert_with(|id| Component {
        id,
        name: input.name,
        status: input.status,
        description: input.description,
        link: input.link,
        order: input.order,
        group_id: input.group_id,
        enabled: input.enabled,
    });
    data(component)
}

async fn update_component(
    State(db): State<Db>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(input): Json<UpdateComponent>,
) -> Response {
    if let Err(response) = require_token(&headers) {
        return response;
    }
    let mut store = db.write().await;
    let Some(component) = store.components.rows.get_mut(&id) else {
        return not_found();
    };
    if let Some(name) = input.name {
        component.name = name;
    }
    if let Some(status) = input.status {
        component.status = status;
    }
    if let Some(link) = input.link {
        component.link = Some(link);
    }
    if let Some(order) = input.order {
        component.order = order;
    }
    if let Some(group_id) = input.group_id {
        component.group_id = Some(group_id);
    }
    data(component.clone())
}

async fn delete_component(
    State(db): State<Db>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = require_token(&headers) {
        return response;
    }
    match db.write().await.components.rows.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(),
    }
}

// --- component groups ---

async fn list_groups(State(db): State<Db>) -> Response {
    data(db.read().await.groups.list())
}

async fn get_group(State(db): State<Db>, Path(id): Path<u64>) -> Response {
    match db.read().await.groups.rows.get(&id) {
        Some(group) => data(group),
        None => not_found(),
    }
}

async fn create_group(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreateComponentGroup>,
) -> Response {
    if let Err(response) = require_token(&headers) {
        return response;
    }
    let group = db.write().await.groups.insert_with(|id| ComponentGroup {
        id,
        name: input.name,
        order: input.order,
    });
    data(group)
}

async fn update_group(
    State(db): State<Db>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(input): Json<UpdateComponentGroup>,
) -> Response {
    if let Err(response) = require_token(&headers) {
        return response;
    }
    let mut store = db.write().await;
    let Some(group) = store.groups.rows.get_mut(&id) else {
        return not_found();
    };
    if let Some(name) = input.name {
        group.name = name;
    }
    if let Some(order) = input.order {
        group.order = order;
    }
    data(group.clone())
}

async fn delete_group(State(db): State<Db>, Path(id): Path<u64>, headers: HeaderMap) -> Response {
    if let Err(response) = require_token(&headers) {
        return response;
    }
    match db.write().await.groups.rows.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(),
    }
}

// --- incidents ---

async fn list_incidents(State(db): State<Db>) -> Response {
    data(db.read().await.incidents.list())
}

async fn get_incident(State(db): State<Db>, Path(id): Path<u64>) -> Response {
    match db.read().await.incidents.rows.get(&id) {
        Some(incident) => data(incident),
        None => not_found(),
    }
}

async fn create_incident(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreateIncident>,
) -> Response {
    if let Err(response) = require_token(&headers) {
        return response;
    }
    let incident = db.write().await.incidents.insert_with(|id| Incident {
        id,
        name: input.name,
        message: input.message,
        status: input.status,
        visible: input.visible,
        component_id: input.component_id,
        component_status: input.component_status,
        notify: input.notify,
    });
    data(incident)
}

async fn update_incident(
    State(db): State<Db>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(input): Json<UpdateIncident>,
) -> Response {
    if let Err(response) = require_token(&headers) {
        return response;
    }
    let mut store = db.write().await;
    let Some(incident) = store.incidents.rows.get_mut(&id) else {
        return not_found();
    };
    if let Some(name) = input.name {
        incident.name = name;
    }
    if let Some(message) = input.message {
        incident.message = message;
    }
    if let Some(status) = input.status {
        incident.status = status;
    }
    if let Some(visible) = input.visible {
        incident.visible = visible;
    }
    if let Some(component_id) = input.component_id {
        incident.component_id = Some(component_id);
    }
    if let Some(notify) = input.notify {
        incident.notify = notify;
    }
    data(incident.clone())
}

async fn delete_incident(
    State(db): State<Db>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = require_token(&headers) {
        return response;
    }
    match db.write().await.incidents.rows.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(),
    }
}

// --- metrics and points ---

async fn list_metrics(State(db): State<Db>) -> Response {
    data(db.read().await.metrics.list())
}

async fn get_metric(State(db): State<Db>, Path(id): Path<u64>) -> Response {
    match db.read().await.metrics.rows.get(&id) {
        Some(metric) => data(metric),
        None => not_found(),
    }
}

async fn create_metric(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreateMetric>,
) -> Response {
    if let Err(response) = require_token(&headers) {
        return response;
    }
    let metric = db.write().await.metrics.insert_with(|id| Metric {
        id,
        name: input.name,
        suffix: input.suffix,
        description: input.description,
        default_value: input.default_value,
        display_chart: input.display_chart,
    });
    data(metric)
}

async fn delete_metric(State(db): State<Db>, Path(id): Path<u64>, headers: HeaderMap) -> Response {
    if let Err(response) = require_token(&headers) {
        return response;
    }
    let mut store = db.write().await;
    match store.metrics.rows.remove(&id) {
        Some(_) => {
            store.points.remove(&id);
            StatusCode::NO_CONTENT.into_response()
        }
        None => not_found(),
    }
}

async fn list_points(State(db): State<Db>, Path(id): Path<u64>) -> Response {
    let store = db.read().await;
    if !store.metrics.rows.contains_key(&id) {
        return not_found();
    }
    match store.points.get(&id) {
        Some(points) => data(points.list()),
        None => data(Vec::<MetricPoint>::new()),
    }
}

async fn get_point(State(db): State<Db>, Path((id, point_id)): Path<(u64, u64)>) -> Response {
    match db.read().await.points.get(&id).and_then(|points| points.rows.get(&point_id)) {
        Some(point) => data(point),
        None => not_found(),
    }
}

async fn create_point(
    State(db): State<Db>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(input): Json<CreateMetricPoint>,
) -> Response {
    if let Err(response) = require_token(&headers) {
        return response;
    }
    let mut store = db.write().await;
    if !store.metrics.rows.contains_key(&id) {
        return not_found();
    }
    let point = store
        .points
        .entry(id)
        .or_default()
        .insert_with(|point_id| MetricPoint {
            id: point_id,
            value: input.value,
        });
    data(point)
}

async fn delete_point(
    State(db): State<Db>,
    Path((id, point_id)): Path<(u64, u64)>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = require_token(&headers) {
        return response;
    }
    match db.write().await.points.get_mut(&id).and_then(|points| points.rows.remove(&point_id)) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(),
    }
}

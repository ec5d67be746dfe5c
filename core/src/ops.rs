//! The resource operation catalog.
//!
//! One method per (resource, verb) pair, each a thin composition of the
//! argument builder, the status checks, and the request executor. Paths
//! follow the Cachet v1 layout: a collection path when no id is given, a
//! single-resource path otherwise; metric points nest under their metric.
//! Mutating operations authenticate, reads and `ping` do not.

use serde_json::Value;

use crate::args::{build_args, Params};
use crate::client::CachetClient;
use crate::config::ConfigSource;
use crate::error::Error;
use crate::http::{HttpMethod, Transport};
use crate::schema::{Operation, Resource};
use crate::status::{check_component_status, check_incident_status};

/// `collection` or `collection/{id}`.
fn item_path(collection: &str, id: Option<u64>) -> String {
    match id {
        Some(id) => format!("{collection}/{id}"),
        None => collection.to_string(),
    }
}

/// Run `check` against `args[key]` when the argument is present and
/// non-null; absent and null arguments are left for the server's own
/// defaulting.
fn check_if_set(
    args: &Params,
    key: &str,
    check: fn(&Value) -> Result<(), Error>,
) -> Result<(), Error> {
    match args.get(key) {
        Some(value) if !value.is_null() => check(value),
        _ => Ok(()),
    }
}

impl<C: ConfigSource, T: Transport> CachetClient<C, T> {
    /// GET `ping` — the API liveness endpoint.
    pub fn ping(&self) -> Result<Value, Error> {
        self.execute("ping", HttpMethod::Get, None, false, &[])
    }

    // -----------------------------------------------------------------
    // Components
    // -----------------------------------------------------------------

    /// All components, or the one named by `id`.
    pub fn get_components(&self, id: Option<u64>) -> Result<Value, Error> {
        self.execute(&item_path("components", id), HttpMethod::Get, None, false, &[])
    }

    /// Create a component. Mandatory params: `name`, `status`.
    pub fn add_component(&self, params: &Params) -> Result<Value, Error> {
        let args = build_args(Resource::Components, Operation::Add, params)?;
        if let Some(status) = args.get("status") {
            check_component_status(status)?;
        }
        self.execute("components", HttpMethod::Post, Some(args), true, &[])
    }

    /// Update component `id`; only the supplied params change.
    pub fn update_component(&self, id: u64, params: &Params) -> Result<Value, Error> {
        let args = build_args(Resource::Components, Operation::Update, params)?;
        check_if_set(&args, "status", check_component_status)?;
        self.execute(
            &format!("components/{id}"),
            HttpMethod::Put,
            Some(args),
            true,
            &[],
        )
    }

    /// Delete component `id`.
    pub fn delete_component(&self, id: u64) -> Result<Value, Error> {
        self.execute(&format!("components/{id}"), HttpMethod::Delete, None, true, &[])
    }

    // -----------------------------------------------------------------
    // Component groups
    // -----------------------------------------------------------------

    /// All component groups, or the one named by `id`.
    pub fn get_component_groups(&self, id: Option<u64>) -> Result<Value, Error> {
        self.execute(
            &item_path("components/groups", id),
            HttpMethod::Get,
            None,
            false,
            &[],
        )
    }

    /// Create a component group. Mandatory param: `name`.
    pub fn add_component_group(&self, params: &Params) -> Result<Value, Error> {
        let args = build_args(Resource::ComponentGroups, Operation::Add, params)?;
        self.execute("components/groups", HttpMethod::Post, Some(args), true, &[])
    }

    /// Update component group `id`.
    pub fn update_component_group(&self, id: u64, params: &Params) -> Result<Value, Error> {
        let args = build_args(Resource::ComponentGroups, Operation::Update, params)?;
        self.execute(
            &format!("components/groups/{id}"),
            HttpMethod::Put,
            Some(args),
            true,
            &[],
        )
    }

    /// Delete component group `id`.
    pub fn delete_component_group(&self, id: u64) -> Result<Value, Error> {
        self.execute(
            &format!("components/groups/{id}"),
            HttpMethod::Delete,
            None,
            true,
            &[],
        )
    }

    // -----------------------------------------------------------------
    // Incidents
    // -----------------------------------------------------------------

    /// All incidents, or the one named by `id`.
    pub fn get_incidents(&self, id: Option<u64>) -> Result<Value, Error> {
        self.execute(&item_path("incidents", id), HttpMethod::Get, None, false, &[])
    }

    /// Report an incident. Mandatory params: `name`, `message`, `status`;
    /// `visible` defaults to 1. A `component_status` is range-checked when
    /// given.
    pub fn add_incident(&self, params: &Params) -> Result<Value, Error> {
        let args = build_args(Resource::Incidents, Operation::Add, params)?;
        if let Some(status) = args.get("status") {
            check_incident_status(status)?;
        }
        check_if_set(&args, "component_status", check_component_status)?;
        self.execute("incidents", HttpMethod::Post, Some(args), true, &[])
    }

    /// Update incident `id`.
    pub fn update_incident(&self, id: u64, params: &Params) -> Result<Value, Error> {
        let args = build_args(Resource::Incidents, Operation::Update, params)?;
        check_if_set(&args, "status", check_incident_status)?;
        self.execute(
            &format!("incidents/{id}"),
            HttpMethod::Put,
            Some(args),
            true,
            &[],
        )
    }

    /// Delete incident `id`.
    pub fn delete_incident(&self, id: u64) -> Result<Value, Error> {
        self.execute(&format!("incidents/{id}"), HttpMethod::Delete, None, true, &[])
    }

    // -----------------------------------------------------------------
    // Metrics and metric points
    // -----------------------------------------------------------------

    /// All metrics, or the one named by `id`.
    pub fn get_metrics(&self, id: Option<u64>) -> Result<Value, Error> {
        self.execute(&item_path("metrics", id), HttpMethod::Get, None, false, &[])
    }

    /// Create a metric. Mandatory params: `name`, `suffix`, `description`;
    /// `default_value` defaults to 0. Cachet has no metric update.
    pub fn add_metric(&self, params: &Params) -> Result<Value, Error> {
        let args = build_args(Resource::Metrics, Operation::Add, params)?;
        self.execute("metrics", HttpMethod::Post, Some(args), true, &[])
    }

    /// Delete metric `id`.
    pub fn delete_metric(&self, id: u64) -> Result<Value, Error> {
        self.execute(&format!("metrics/{id}"), HttpMethod::Delete, None, true, &[])
    }

    /// All points of `metric_id`, or the one named by `id`.
    pub fn get_metric_points(&self, metric_id: u64, id: Option<u64>) -> Result<Value, Error> {
        self.execute(
            &item_path(&format!("metrics/{metric_id}/points"), id),
            HttpMethod::Get,
            None,
            false,
            &[],
        )
    }

    /// Record a point on `metric_id`. Mandatory param: `value`.
    pub fn add_metric_point(&self, metric_id: u64, params: &Params) -> Result<Value, Error> {
        let args = build_args(Resource::MetricPoints, Operation::Add, params)?;
        self.execute(
            &format!("metrics/{metric_id}/points"),
            HttpMethod::Post,
            Some(args),
            true,
            &[],
        )
    }

    /// Delete point `id` of `metric_id`.
    pub fn delete_metric_point(&self, metric_id: u64, id: u64) -> Result<Value, Error> {
        self.execute(
            &format!("metrics/{metric_id}/points/{id}"),
            HttpMethod::Delete,
            None,
            true,
            &[],
        )
    }
}

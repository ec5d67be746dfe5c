//! Parameter schema registry for every Cachet write operation.
//!
//! # Design
//! One `const` table per (resource, operation) pair, listing each accepted
//! parameter with its mandatory flag and optional default. Tables are
//! slices rather than maps so iteration order is fixed at compile time —
//! when several mandatory fields are missing, the first one in table order
//! is the one reported. List and delete operations carry no body and have
//! no schema.
//!
//! Asking for a schema that does not exist is a programming error in the
//! caller, not a runtime condition, and panics.

use serde_json::Value;

/// A Cachet resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Components,
    ComponentGroups,
    Incidents,
    Metrics,
    MetricPoints,
}

/// A write operation with a parameter schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Update,
}

/// Default value a schema can declare for a field.
///
/// `Null` is a declared default of JSON `null` — distinct from declaring no
/// default at all, which matters for mandatory fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Null,
    Int(i64),
    Bool(bool),
}

impl DefaultValue {
    /// Falsy defaults (`null`, `0`, `false`) are substituted for missing
    /// mandatory fields but never materialized for optional ones.
    pub fn is_truthy(self) -> bool {
        match self {
            DefaultValue::Null => false,
            DefaultValue::Int(n) => n != 0,
            DefaultValue::Bool(b) => b,
        }
    }

    pub fn to_value(self) -> Value {
        match self {
            DefaultValue::Null => Value::Null,
            DefaultValue::Int(n) => Value::from(n),
            DefaultValue::Bool(b) => Value::from(b),
        }
    }
}

/// Validation rule for one named parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub mandatory: bool,
    pub default: Option<DefaultValue>,
}

const fn mandatory() -> FieldSpec {
    FieldSpec { mandatory: true, default: None }
}

const fn mandatory_with(default: DefaultValue) -> FieldSpec {
    FieldSpec { mandatory: true, default: Some(default) }
}

const fn optional() -> FieldSpec {
    FieldSpec { mandatory: false, default: None }
}

const fn optional_with(default: DefaultValue) -> FieldSpec {
    FieldSpec { mandatory: false, default: Some(default) }
}

/// One (parameter name, rule) entry of an operation schema.
pub type SchemaEntry = (&'static str, FieldSpec);

const COMPONENTS_ADD: &[SchemaEntry] = &[
    ("name", mandatory()),
    ("status", mandatory()),
    ("description", optional_with(DefaultValue::Null)),
    ("link", optional_with(DefaultValue::Null)),
    ("order", optional_with(DefaultValue::Int(0))),
    ("group_id", optional_with(DefaultValue::Null)),
    ("enabled", optional_with(DefaultValue::Bool(true))),
];

const COMPONENTS_UPDATE: &[SchemaEntry] = &[
    ("name", optional()),
    ("status", optional()),
    ("link", optional_with(DefaultValue::Null)),
    ("order", optional_with(DefaultValue::Null)),
    ("group_id", optional_with(DefaultValue::Null)),
];

const COMPONENT_GROUPS_ADD: &[SchemaEntry] = &[
    ("name", mandatory()),
    ("order", optional_with(DefaultValue::Int(0))),
];

const COMPONENT_GROUPS_UPDATE: &[SchemaEntry] = &[
    ("name", optional_with(DefaultValue::Null)),
    ("order", optional_with(DefaultValue::Null)),
];

const INCIDENTS_ADD: &[SchemaEntry] = &[
    ("name", mandatory()),
    ("message", mandatory()),
    ("status", mandatory()),
    ("visible", mandatory_with(DefaultValue::Int(1))),
    ("component_id", optional_with(DefaultValue::Null)),
    ("component_status", optional_with(DefaultValue::Null)),
    ("notify", optional_with(DefaultValue::Bool(false))),
];

const INCIDENTS_UPDATE: &[SchemaEntry] = &[
    ("name", optional()),
    ("message", optional()),
    ("status", optional()),
    ("visible", optional_with(DefaultValue::Int(1))),
    ("component_id", optional()),
    ("notify", optional()),
];

const METRICS_ADD: &[SchemaEntry] = &[
    ("name", mandatory()),
    ("suffix", mandatory()),
    ("description", mandatory()),
    ("default_value", mandatory_with(DefaultValue::Int(0))),
    ("display_chart", optional_with(DefaultValue::Int(1))),
];

const METRIC_POINTS_ADD: &[SchemaEntry] = &[("value", mandatory())];

/// Look up the parameter schema for a (resource, operation) pair.
///
/// # Panics
/// Panics when the pair has no schema (Cachet has no metric or metric-point
/// update). Hitting this means a wrapper was wired to the wrong pair.
pub fn operation_schema(resource: Resource, operation: Operation) -> &'static [SchemaEntry] {
    match (resource, operation) {
        (Resource::Components, Operation::Add) => COMPONENTS_ADD,
        (Resource::Components, Operation::Update) => COMPONENTS_UPDATE,
        (Resource::ComponentGroups, Operation::Add) => COMPONENT_GROUPS_ADD,
        (Resource::ComponentGroups, Operation::Update) => COMPONENT_GROUPS_UPDATE,
        (Resource::Incidents, Operation::Add) => INCIDENTS_ADD,
        (Resource::Incidents, Operation::Update) => INCIDENTS_UPDATE,
        (Resource::Metrics, Operation::Add) => METRICS_ADD,
        (Resource::MetricPoints, Operation::Add) => METRIC_POINTS_ADD,
        (resource, operation) => {
            panic!("no parameter schema for {resource:?}/{operation:?}")
        }
    }
}

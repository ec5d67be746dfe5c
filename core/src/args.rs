//! Schema-driven assembly of request arguments.
//!
//! # Design
//! `build_args` walks the operation schema in table order and assembles the
//! argument set that will become the request body (or query). Mandatory
//! fields must be supplied or carry a schema default; optional fields pass
//! through when supplied and otherwise materialize only if their default is
//! truthy — a `null`/`0`/`false` default means "the server's own default is
//! fine, send nothing". Supplied keys the schema does not name are dropped,
//! so a host can forward its whole keyword set unfiltered.

use serde_json::{Map, Value};

use crate::error::Error;
use crate::schema::{operation_schema, Operation, Resource};

/// Named arguments for one operation call, as supplied by the host and as
/// produced by the builder.
pub type Params = Map<String, Value>;

/// Validate and default `supplied` against the schema for
/// (`resource`, `operation`).
///
/// Fails with `Error::MissingParam` on the first mandatory field (in schema
/// order) that is absent and has no default.
pub fn build_args(
    resource: Resource,
    operation: Operation,
    supplied: &Params,
) -> Result<Params, Error> {
    let schema = operation_schema(resource, operation);
    let mut args = Params::new();

    for &(name, spec) in schema {
        if spec.mandatory {
            match supplied.get(name) {
                Some(value) => {
                    args.insert(name.to_string(), value.clone());
                }
                None => match spec.default {
                    Some(default) => {
                        args.insert(name.to_string(), default.to_value());
                    }
                    None => return Err(Error::MissingParam(name)),
                },
            }
        } else if let Some(value) = supplied.get(name) {
            args.insert(name.to_string(), value.clone());
        } else if let Some(default) = spec.default {
            if default.is_truthy() {
                args.insert(name.to_string(), default.to_value());
            }
        }
    }

    Ok(args)
}

//! Shared helpers for the conformance test suites.
//!
//! External harnesses feed the engines from JSON input files whose bee
//! scenarios look like
//!
//! ```json
//! {
//!   "beeGraphs": [
//!     {
//!       "connections": [{"a": "A", "b": "B", "time": 1}],
//!       "maxTime": 3,
//!       "empty": false
//!     }
//!   ]
//! }
//! ```
//!
//! This crate parses exactly that shape (`Value`-based, no derive) so the
//! integration tests can run fixture scenarios end to end. The loading
//! harness itself is an external collaborator; only the data contract is
//! reproduced here.

#![forbid(unsafe_code)]

use std::fmt;

use busybee_graph::Connection;

/// One bee scenario: a connection list, a budget, and whether the expected
/// result is the empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeeScenario {
    pub connections: Vec<Connection>,
    pub max_time: u32,
    pub empty: bool,
}

/// Typed failure for fixture parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// The input is not valid JSON.
    Json { detail: String },
    /// The JSON does not match the expected scenario shape.
    Shape { detail: String },
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { detail } => write!(f, "fixture is not valid JSON: {detail}"),
            Self::Shape { detail } => write!(f, "unexpected fixture shape: {detail}"),
        }
    }
}

impl std::error::Error for FixtureError {}

/// Parse the `beeGraphs` scenarios out of a fixture document.
///
/// # Errors
///
/// Returns [`FixtureError::Json`] for malformed JSON and
/// [`FixtureError::Shape`] when a required field is missing or mistyped.
pub fn scenarios_from_json(input: &str) -> Result<Vec<BeeScenario>, FixtureError> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| FixtureError::Json {
            detail: e.to_string(),
        })?;
    let graphs = value
        .get("beeGraphs")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| shape("missing beeGraphs array"))?;
    graphs.iter().map(scenario_from_value).collect()
}

fn scenario_from_value(value: &serde_json::Value) -> Result<BeeScenario, FixtureError> {
    let raw_connections = value
        .get("connections")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| shape("scenario missing connections array"))?;
    let connections = raw_connections
        .iter()
        .map(connection_from_value)
        .collect::<Result<Vec<_>, _>>()?;
    let max_time = value
        .get("maxTime")
        .and_then(serde_json::Value::as_u64)
        .and_then(|t| u32::try_from(t).ok())
        .ok_or_else(|| shape("scenario missing non-negative maxTime"))?;
    // An absent flag means a path is expected.
    let empty = value
        .get("empty")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false);
    Ok(BeeScenario {
        connections,
        max_time,
        empty,
    })
}

fn connection_from_value(value: &serde_json::Value) -> Result<Connection, FixtureError> {
    let a = value
        .get("a")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| shape("connection missing a"))?;
    let b = value
        .get("b")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| shape("connection missing b"))?;
    let time = value
        .get("time")
        .and_then(serde_json::Value::as_u64)
        .and_then(|t| u32::try_from(t).ok())
        .ok_or_else(|| shape("connection missing non-negative time"))?;
    Ok(Connection::new(a, b, time))
}

fn shape(detail: &str) -> FixtureError {
    FixtureError::Shape {
        detail: detail.to_string(),
    }
}

/// Cumulative travel time of a path, looked up from the connection list.
///
/// Returns `None` if any consecutive pair has no recorded connection.
#[must_use]
pub fn path_cost(path: &[String], connections: &[Connection]) -> Option<u64> {
    let mut total: u64 = 0;
    for pair in path.windows(2) {
        let step = connections.iter().find_map(|c| {
            if (c.a == pair[0] && c.b == pair[1]) || (c.b == pair[0] && c.a == pair[1]) {
                Some(c.time)
            } else {
                None
            }
        })?;
        total += u64::from(step);
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "beeGraphs": [
            {
                "connections": [
                    {"a": "A", "b": "B", "time": 1},
                    {"a": "B", "b": "C", "time": 2}
                ],
                "maxTime": 3
            },
            {
                "connections": [{"a": "A", "b": "B", "time": 1}],
                "maxTime": 0,
                "empty": true
            }
        ]
    }"#;

    #[test]
    fn parses_scenarios_with_defaulted_empty_flag() {
        let scenarios = scenarios_from_json(FIXTURE).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].max_time, 3);
        assert!(!scenarios[0].empty);
        assert_eq!(scenarios[0].connections[1], Connection::new("B", "C", 2));
        assert!(scenarios[1].empty);
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            scenarios_from_json("{"),
            Err(FixtureError::Json { .. })
        ));
    }

    #[test]
    fn missing_bee_graphs_is_a_shape_error() {
        assert!(matches!(
            scenarios_from_json("{}"),
            Err(FixtureError::Shape { .. })
        ));
    }

    #[test]
    fn negative_time_is_a_shape_error() {
        let input = r#"{"beeGraphs": [{"connections": [{"a":"A","b":"B","time":-1}], "maxTime": 1}]}"#;
        assert!(matches!(
            scenarios_from_json(input),
            Err(FixtureError::Shape { .. })
        ));
    }

    #[test]
    fn path_cost_walks_both_directions() {
        let connections = vec![Connection::new("A", "B", 1), Connection::new("B", "C", 2)];
        let path: Vec<String> = ["C", "B", "A"].iter().map(|s| (*s).to_string()).collect();
        assert_eq!(path_cost(&path, &connections), Some(3));
        let broken: Vec<String> = ["A", "C"].iter().map(|s| (*s).to_string()).collect();
        assert_eq!(path_cost(&broken, &connections), None);
    }
}

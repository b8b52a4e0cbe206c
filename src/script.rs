//! defines scenario steps run against a map by the demo driver

use crate::error::KvMapError;
use crate::{KvMap, Result};
use serde::{Deserialize, Serialize};
use slog::{info, Logger};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One operation together with the outcome it must produce
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Step {
    /// `put` must succeed
    Put { key: String, value: i64 },
    /// `put` must fail with `PreconditionViolation`
    Rejected { key: String, value: i64 },
    /// `get` must return `expect`
    Get { key: String, expect: i64 },
    /// `get` must fail with `EntryNotFound`
    Missing { key: String },
    /// `contains` must return `expect`
    Contains { key: String, expect: bool },
}

/// The scenario every map must pass
///
/// Checked maps additionally have to reject an empty key.
pub fn default_scenario(checked: bool) -> Vec<Step> {
    let mut steps = vec![
        Step::Put {
            key: "a".into(),
            value: 0,
        },
        Step::Get {
            key: "a".into(),
            expect: 0,
        },
        Step::Put {
            key: "a".into(),
            value: 1,
        },
        Step::Get {
            key: "a".into(),
            expect: 1,
        },
        Step::Contains {
            key: "a".into(),
            expect: true,
        },
        Step::Contains {
            key: "b".into(),
            expect: false,
        },
        Step::Missing { key: "b".into() },
    ];
    if checked {
        steps.push(Step::Rejected {
            key: "".into(),
            value: 42,
        });
    }
    steps
}

/// read a JSON array of steps
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Step>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// run `steps` in order, stopping at the first unmet expectation
pub fn run(map: &mut dyn KvMap<i64>, steps: &[Step], log: &Logger) -> Result<()> {
    for (i, step) in steps.iter().enumerate() {
        let failed = |reason: String| KvMapError::Expectation { step: i, reason };
        match step {
            Step::Put { key, value } => {
                info!(log, "step"; "n" => i, "command" => "put", "key" => key, "value" => value);
                map.put(key.clone(), *value)?;
            }
            Step::Rejected { key, value } => {
                info!(log, "step"; "n" => i, "command" => "put", "key" => key, "value" => value);
                match map.put(key.clone(), *value) {
                    Err(KvMapError::PreconditionViolation { .. }) => {}
                    Err(e) => return Err(e),
                    Ok(()) => {
                        return Err(failed(format!(
                            "put of {:?} was accepted, expected a precondition violation",
                            key
                        )))
                    }
                }
            }
            Step::Get { key, expect } => {
                info!(log, "step"; "n" => i, "command" => "get", "key" => key);
                let value = map.get(key)?;
                if value != *expect {
                    return Err(failed(format!(
                        "get {:?} returned {}, expected {}",
                        key, value, expect
                    )));
                }
            }
            Step::Missing { key } => {
                info!(log, "step"; "n" => i, "command" => "get", "key" => key);
                match map.get(key) {
                    Err(KvMapError::EntryNotFound { .. }) => {}
                    Err(e) => return Err(e),
                    Ok(value) => {
                        return Err(failed(format!(
                            "get {:?} returned {}, expected entry not found",
                            key, value
                        )))
                    }
                }
            }
            Step::Contains { key, expect } => {
                info!(log, "step"; "n" => i, "command" => "contains", "key" => key);
                let present = map.contains(key)?;
                if present != *expect {
                    return Err(failed(format!(
                        "contains {:?} returned {}, expected {}",
                        key, present, expect
                    )));
                }
            }
        }
    }
    Ok(())
}

//! Connectivity validation applied when a machine is initialized.

use serde::{Deserialize, Serialize};

/// How thoroughly [`ProcessBuilder::init`](crate::builder::ProcessBuilder::init)
/// checks that a process graph is wired up.
///
/// # Example
///
/// ```rust
/// use stepwise::builder::ValidationPolicy;
///
/// assert_eq!(ValidationPolicy::default(), ValidationPolicy::CountHeuristic);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Size checks only: `events >= states - 1` and `transitions >= events`.
    ///
    /// Cheap, but a graph can pass them and still contain islands.
    #[default]
    CountHeuristic,

    /// Size checks, then every state must be reachable from the initial
    /// state and every event must label at least one transition.
    Reachability,
}

impl ValidationPolicy {
    /// Check if `init` runs the reachability and event-coverage analysis.
    pub fn checks_reachability(&self) -> bool {
        matches!(self, Self::Reachability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_deserializes_from_snake_case() {
        let policy: ValidationPolicy = serde_json::from_str("\"reachability\"").unwrap();
        assert_eq!(policy, ValidationPolicy::Reachability);
        assert!(policy.checks_reachability());

        let json = serde_json::to_string(&ValidationPolicy::CountHeuristic).unwrap();
        assert_eq!(json, "\"count_heuristic\"");
    }

    #[test]
    fn default_policy_skips_reachability() {
        assert!(!ValidationPolicy::default().checks_reachability());
    }
}

//! Scheduling algorithm selection.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which policy the simulator uses to pick the next process.
///
/// # Preemption
/// `Srtf` and `PreemptivePriority` may take the CPU away from a running
/// process when a strictly better candidate is waiting. `RoundRobin`
/// preempts only on quantum expiry. The rest run each pick to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// First-Come First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive, by original burst).
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    Srtf,
    /// Priority scheduling, non-preemptive. Lower number = more urgent.
    Priority,
    /// Priority scheduling with preemption.
    PreemptivePriority,
    /// Fixed time-slice FIFO scheduling.
    RoundRobin,
}

impl Algorithm {
    /// Whether this policy can take the CPU from a running process
    /// in favor of a strictly better ready candidate.
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srtf | Self::PreemptivePriority)
    }

    /// Whether process records must carry a priority value.
    pub const fn uses_priority(&self) -> bool {
        matches!(self, Self::Priority | Self::PreemptivePriority)
    }

    /// Whether this policy requires a time quantum.
    pub const fn is_round_robin(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Parses the canonical string form.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "srtf" => Ok(Self::Srtf),
            "priority" => Ok(Self::Priority),
            "preemptive-priority" => Ok(Self::PreemptivePriority),
            "round-robin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(format!(
                "unknown algorithm '{s}'; expected one of fcfs, sjf, srtf, \
                 priority, preemptive-priority, round-robin"
            )),
        }
    }

    /// Canonical string form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::Priority => "priority",
            Self::PreemptivePriority => "preemptive-priority",
            Self::RoundRobin => "round-robin",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preemption_classes() {
        assert!(Algorithm::Srtf.is_preemptive());
        assert!(Algorithm::PreemptivePriority.is_preemptive());
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(!Algorithm::RoundRobin.is_preemptive());
    }

    #[test]
    fn test_priority_requirement() {
        assert!(Algorithm::Priority.uses_priority());
        assert!(Algorithm::PreemptivePriority.uses_priority());
        assert!(!Algorithm::Srtf.uses_priority());
    }

    #[test]
    fn test_string_round_trip() {
        for algo in [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Srtf,
            Algorithm::Priority,
            Algorithm::PreemptivePriority,
            Algorithm::RoundRobin,
        ] {
            assert_eq!(Algorithm::parse(algo.as_str()).unwrap(), algo);
        }
        assert_eq!(Algorithm::parse("RR").unwrap(), Algorithm::RoundRobin);
        assert!(Algorithm::parse("lottery").is_err());
    }

    #[test]
    fn test_serde_uses_string_form() {
        let json = serde_json::to_string(&Algorithm::PreemptivePriority).unwrap();
        assert_eq!(json, "\"preemptive-priority\"");
        let back: Algorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Algorithm::PreemptivePriority);
    }
}

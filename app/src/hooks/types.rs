use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentStatus {
    #[default]
    Running,
    Completed,
    Failed,
}

impl ExperimentStatus {
    pub fn label(self) -> &'static str {
        match self {
            ExperimentStatus::Running => "Running",
            ExperimentStatus::Completed => "Completed",
            ExperimentStatus::Failed => "Failed",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ExperimentStatus::Running => "bg-brand-50 text-brand-700",
            ExperimentStatus::Completed => "bg-green-50 text-green-700",
            ExperimentStatus::Failed => "bg-red-50 text-red-700",
        }
    }

    /// Whether the experiment can still produce new actions.
    pub fn is_live(self) -> bool {
        matches!(self, ExperimentStatus::Running)
    }
}

/// Row in the dashboard's experiment table.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ExperimentSummary {
    pub name: String,
    pub status: ExperimentStatus,
    #[serde(default)]
    pub customers: u32,
    #[serde(default)]
    pub businesses: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ExperimentDetail {
    pub name: String,
    pub status: ExperimentStatus,
    #[serde(default)]
    pub customers: u32,
    #[serde(default)]
    pub businesses: u32,
    #[serde(default)]
    pub actions: u64,
    #[serde(default)]
    pub messages: u64,
    #[serde(default)]
    pub searches: u64,
    #[serde(default)]
    pub payments: u64,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AgentSummary {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MessageSummary {
    pub from_agent: String,
    pub to_agent: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Everything the visualizer page draws for one marketplace run.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MarketplaceSnapshot {
    #[serde(default)]
    pub experiment: Option<String>,
    #[serde(default)]
    pub customers: Vec<AgentSummary>,
    #[serde(default)]
    pub businesses: Vec<AgentSummary>,
    #[serde(default)]
    pub messages: Vec<MessageSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_experiment_list() {
        let body = r#"[
            {"name": "run-1", "status": "running", "customers": 10, "businesses": 5,
             "created_at": "2025-10-01T12:00:00Z"},
            {"name": "run-0", "status": "failed"}
        ]"#;
        let experiments: Vec<ExperimentSummary> = serde_json::from_str(body).unwrap();

        assert_eq!(experiments.len(), 2);
        assert_eq!(experiments[0].status, ExperimentStatus::Running);
        assert_eq!(experiments[0].customers, 10);
        assert_eq!(experiments[1].status, ExperimentStatus::Failed);
        assert_eq!(experiments[1].businesses, 0);
        assert!(experiments[1].created_at.is_none());
    }

    #[test]
    fn decodes_failed_detail_with_error() {
        let body = r#"{"name": "run-2", "status": "failed", "actions": 42,
                       "error": "database unavailable"}"#;
        let detail: ExperimentDetail = serde_json::from_str(body).unwrap();

        assert_eq!(detail.actions, 42);
        assert_eq!(detail.error.as_deref(), Some("database unavailable"));
        assert!(!detail.status.is_live());
    }

    #[test]
    fn rejects_unknown_status() {
        let body = r#"{"name": "run-3", "status": "paused"}"#;
        assert!(serde_json::from_str::<ExperimentSummary>(body).is_err());
    }

    #[test]
    fn empty_snapshot_decodes() {
        let snapshot: MarketplaceSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, MarketplaceSnapshot::default());
    }

    #[test]
    fn only_running_is_live() {
        assert!(ExperimentStatus::Running.is_live());
        assert!(!ExperimentStatus::Completed.is_live());
        assert_eq!(ExperimentStatus::Completed.label(), "Completed");
    }
}

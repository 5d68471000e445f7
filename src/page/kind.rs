use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Root,
    SearchRecords,
    RecordDetail,
    Copilot,
    WorkflowStepSelectTriggerType,
    WorkflowStepSelectAction,
    WorkflowStepEdit,
    WorkflowStepView,
    WorkflowRunStepView,
}

impl PageKind {
    pub const ALL: [PageKind; 9] = [
        Self::Root,
        Self::SearchRecords,
        Self::RecordDetail,
        Self::Copilot,
        Self::WorkflowStepSelectTriggerType,
        Self::WorkflowStepSelectAction,
        Self::WorkflowStepEdit,
        Self::WorkflowStepView,
        Self::WorkflowRunStepView,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::SearchRecords => "search-records",
            Self::RecordDetail => "record-detail",
            Self::Copilot => "copilot",
            Self::WorkflowStepSelectTriggerType => "workflow-step-select-trigger-type",
            Self::WorkflowStepSelectAction => "workflow-step-select-action",
            Self::WorkflowStepEdit => "workflow-step-edit",
            Self::WorkflowStepView => "workflow-step-view",
            Self::WorkflowRunStepView => "workflow-run-step-view",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == value)
    }

    pub fn is_root(self) -> bool {
        self == Self::Root
    }

    /// Pages that keep the free-text search input in the top bar.
    pub fn shows_search_input(self) -> bool {
        matches!(self, Self::Root | Self::SearchRecords)
    }
}

use cbaplan_core::ProjectId;

use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Scenarios,
    Discount,
    BreakEven,
    Tornado,
    Waterfall,
    MonteCarlo,
}

impl TabId {
    pub const ALL: [TabId; 6] = [
        TabId::Scenarios,
        TabId::Discount,
        TabId::BreakEven,
        TabId::Tornado,
        TabId::Waterfall,
        TabId::MonteCarlo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Scenarios => "Scenarios",
            TabId::Discount => "Discount Rate",
            TabId::BreakEven => "Break-even",
            TabId::Tornado => "Tornado",
            TabId::Waterfall => "Waterfall",
            TabId::MonteCarlo => "Monte Carlo",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Scenarios => 0,
            TabId::Discount => 1,
            TabId::BreakEven => 2,
            TabId::Tornado => 3,
            TabId::Waterfall => 4,
            TabId::MonteCarlo => 5,
        }
    }

    /// Tab selected by a number key (1-based)
    pub fn from_digit(c: char) -> Option<TabId> {
        let n = c.to_digit(10)? as usize;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    pub fn next(&self) -> TabId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> TabId {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether the tab shows one project at a time
    pub fn is_per_project(&self) -> bool {
        matches!(self, TabId::Tornado | TabId::Waterfall | TabId::MonteCarlo)
    }
}

/// Viewer state: the computed report plus what is on screen
#[derive(Debug)]
pub struct ViewState {
    pub report: Report,
    pub active_tab: TabId,
    /// Project shown on per-project tabs
    pub project: ProjectId,
    pub exit: bool,
}

impl ViewState {
    pub fn new(report: Report) -> Self {
        Self {
            report,
            active_tab: TabId::Scenarios,
            project: ProjectId::PatientVirtualCare,
            exit: false,
        }
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        tracing::debug!(tab = tab.name(), "switching tab");
        self.active_tab = tab;
    }

    pub fn toggle_project(&mut self) {
        self.project = match self.project {
            ProjectId::PatientVirtualCare => ProjectId::HospitalSimulation,
            ProjectId::HospitalSimulation => ProjectId::PatientVirtualCare,
        };
    }
}

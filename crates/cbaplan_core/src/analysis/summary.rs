use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::finance::{IRR_GUESS, IrrSolution, N_YEARS, bcr, irr, npv};
use crate::model::{ProjectId, RATES};

/// Headline appraisal figures of a project at one named rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub project: ProjectId,
    pub rate_label: String,
    pub rate: f64,
    /// Base-case NPV in millions
    pub npv: f64,
    pub bcr: f64,
    pub irr: IrrSolution,
}

pub fn project_summaries() -> Result<Vec<ProjectSummary>> {
    let mut summaries = Vec::with_capacity(ProjectId::ALL.len() * RATES.len());
    for project in ProjectId::ALL {
        let p = project.project();
        let irr = irr(p.capex, p.opex, p.benefit, N_YEARS, IRR_GUESS)?;
        for named in RATES {
            summaries.push(ProjectSummary {
                project,
                rate_label: named.label.to_string(),
                rate: named.rate,
                npv: npv(p.capex, p.opex, p.benefit, named.rate, N_YEARS)? / 1_000_000.0,
                bcr: bcr(p.capex, p.opex, p.benefit, named.rate, N_YEARS)?,
                irr,
            });
        }
    }
    Ok(summaries)
}

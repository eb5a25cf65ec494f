//! Registry of the two appraised projects.
//!
//! The set is closed: every project is reachable through a [`ProjectId`]
//! variant, so there is no lookup that can fail.

use serde::{Deserialize, Serialize};

/// Immutable cost and benefit parameters of a project
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Project {
    pub name: &'static str,
    /// Label used on chart legends
    pub short_name: &'static str,
    /// Up-front capital expenditure
    pub capex: f64,
    /// Annual operating expenditure
    pub opex: f64,
    /// Annual gross benefit at full uptake and compliance
    pub benefit: f64,
    /// Fraction of capex attributable to hardware (0.0 - 1.0)
    pub hw_share: f64,
}

/// Hardware line items of the hospital simulation project capex
pub const HOSPITAL_HARDWARE_COSTS: [f64; 3] = [75_800.0, 38_500.0, 91_000.0];

const HOSPITAL_CAPEX: f64 = 1_145_300.0;

const fn sum(values: &[f64]) -> f64 {
    let mut total = 0.0;
    let mut i = 0;
    while i < values.len() {
        total += values[i];
        i += 1;
    }
    total
}

static PATIENT_VIRTUAL_CARE: Project = Project {
    name: "Patient-Specific Virtual Care",
    short_name: "Patient-Specific VC",
    capex: 121_900.0,
    opex: 79_800.0,
    benefit: 1_389_166.7,
    hw_share: 1.0,
};

static HOSPITAL_SIMULATION: Project = Project {
    name: "Hospital Simulation & Education",
    short_name: "Hospital Sim & Ed",
    capex: HOSPITAL_CAPEX,
    opex: 166_000.0,
    benefit: 2_876_333.0,
    hw_share: sum(&HOSPITAL_HARDWARE_COSTS) / HOSPITAL_CAPEX,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectId {
    #[serde(rename = "MACRO1")]
    PatientVirtualCare,
    #[serde(rename = "MACRO2")]
    HospitalSimulation,
}

impl ProjectId {
    pub const ALL: [ProjectId; 2] = [ProjectId::PatientVirtualCare, ProjectId::HospitalSimulation];

    pub fn project(self) -> &'static Project {
        match self {
            ProjectId::PatientVirtualCare => &PATIENT_VIRTUAL_CARE,
            ProjectId::HospitalSimulation => &HOSPITAL_SIMULATION,
        }
    }

    /// Stable identifier used in exported file names
    pub fn key(self) -> &'static str {
        match self {
            ProjectId::PatientVirtualCare => "macro1",
            ProjectId::HospitalSimulation => "macro2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardware_share() {
        let share = ProjectId::HospitalSimulation.project().hw_share;
        assert!((share - 205_300.0 / 1_145_300.0).abs() < 1e-15);
        assert!((share - 0.18).abs() < 0.005);
        assert_eq!(ProjectId::PatientVirtualCare.project().hw_share, 1.0);
    }

    #[test]
    fn test_serde_keys() {
        let json = serde_json::to_string(&ProjectId::ALL).unwrap();
        assert_eq!(json, r#"["MACRO1","MACRO2"]"#);
    }
}

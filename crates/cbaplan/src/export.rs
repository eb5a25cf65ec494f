//! JSON export of every chart series.
//!
//! One pretty-printed file per chart is written into the output directory,
//! followed by `manifest.json` listing them.

use std::fs;
use std::path::{Path, PathBuf};

use cbaplan_core::ProjectId;
use cbaplan_core::analysis::{DistributionSummary, Histogram, MonteCarloConfig};
use color_eyre::eyre::WrapErr;
use jiff::Timestamp;
use serde::Serialize;

use crate::config::AnalysisSettings;
use crate::report::Report;
use crate::util::io::atomic_write;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Serialize)]
struct MonteCarloExport<'a> {
    project: ProjectId,
    config: &'a MonteCarloConfig,
    summary: &'a DistributionSummary,
    histogram: &'a Histogram,
    npvs: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    generated_at: Timestamp,
    settings: &'a AnalysisSettings,
    files: &'a [String],
}

fn monte_carlo_file(project: ProjectId) -> &'static str {
    match project {
        ProjectId::PatientVirtualCare => "monte_carlo_patient.json",
        ProjectId::HospitalSimulation => "monte_carlo_hospital.json",
    }
}

fn write_json<T: Serialize + ?Sized>(
    dir: &Path,
    name: &str,
    value: &T,
    written: &mut Vec<String>,
) -> color_eyre::Result<()> {
    let path = dir.join(name);
    let mut json = serde_json::to_string_pretty(value)
        .wrap_err_with(|| format!("failed to serialize {name}"))?;
    json.push('\n');
    atomic_write(&path, &json).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "exported chart data");
    written.push(name.to_string());
    Ok(())
}

/// Write every chart series of `report` into `out_dir`, creating it if needed.
///
/// Returns the paths written, manifest last.
pub fn export(report: &Report, out_dir: &Path) -> color_eyre::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .wrap_err_with(|| format!("failed to create {}", out_dir.display()))?;

    let mut files = Vec::new();
    write_json(out_dir, "scenario_comparison.json", &report.scenarios, &mut files)?;
    write_json(out_dir, "discount_rate_sensitivity.json", &report.discount, &mut files)?;
    write_json(out_dir, "break_even_analysis.json", &report.break_even, &mut files)?;

    for project in ProjectId::ALL {
        let name = format!("tornado_{}.json", project.key());
        write_json(out_dir, &name, report.tornado.get(project), &mut files)?;
    }

    for wf in &report.waterfalls {
        let name = format!("waterfall_{}.json", wf.project.key());
        write_json(out_dir, &name, wf, &mut files)?;
    }

    for dist in &report.distributions {
        let payload = MonteCarloExport {
            project: dist.project,
            config: &report.monte_carlo.config,
            summary: &dist.summary,
            histogram: &dist.histogram,
            npvs: report.monte_carlo.npvs(dist.project),
        };
        write_json(out_dir, monte_carlo_file(dist.project), &payload, &mut files)?;
    }

    let manifest = Manifest {
        generated_at: Timestamp::now(),
        settings: &report.settings,
        files: &files,
    };
    let mut paths: Vec<PathBuf> = files.iter().map(|name| out_dir.join(name)).collect();
    write_json(out_dir, MANIFEST_FILE, &manifest, &mut Vec::new())?;
    paths.push(out_dir.join(MANIFEST_FILE));

    tracing::info!(
        out_dir = %out_dir.display(),
        files = paths.len(),
        "export complete"
    );
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonteCarloSettings;
    use tempfile::tempdir;

    fn report() -> Report {
        let settings = AnalysisSettings {
            monte_carlo: MonteCarloSettings {
                samples: 100,
                seed: 3,
            },
            ..Default::default()
        };
        Report::compute(&settings).unwrap()
    }

    fn read_json(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_export_writes_every_chart() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("output");

        let paths = export(&report(), &out).unwrap();
        assert_eq!(paths.len(), 10);

        for name in [
            "scenario_comparison.json",
            "discount_rate_sensitivity.json",
            "break_even_analysis.json",
            "tornado_macro1.json",
            "tornado_macro2.json",
            "waterfall_macro1.json",
            "waterfall_macro2.json",
            "monte_carlo_patient.json",
            "monte_carlo_hospital.json",
            MANIFEST_FILE,
        ] {
            assert!(out.join(name).exists(), "{name} missing");
        }
    }

    #[test]
    fn test_export_contents() {
        let dir = tempdir().unwrap();
        export(&report(), dir.path()).unwrap();

        let scenarios = read_json(&dir.path().join("scenario_comparison.json"));
        let expected = scenarios["values"]["MACRO1"]["Expected"].as_f64().unwrap();
        assert!((expected - 18.316_601).abs() < 1e-5);

        let mc = read_json(&dir.path().join("monte_carlo_hospital.json"));
        assert_eq!(mc["project"], "MACRO2");
        assert_eq!(mc["npvs"].as_array().unwrap().len(), 100);

        let manifest = read_json(&dir.path().join(MANIFEST_FILE));
        assert_eq!(manifest["files"].as_array().unwrap().len(), 9);
        assert!(manifest["generated_at"].as_str().is_some());
    }
}

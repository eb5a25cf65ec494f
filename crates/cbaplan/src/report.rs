//! Full analysis run and its plain-text rendering.

use std::fmt;

use cbaplan_core::analysis::{
    BreakEvenTable, DiscountSweep, DistributionSummary, Histogram, MonteCarloResult,
    ProjectSummary, TornadoAnalysis, Waterfall, break_even_table, discount_sweep,
    monte_carlo_with_config, project_summaries, tornado, waterfall,
};
use cbaplan_core::{AnalysisError, ProjectId, Scenario, ScenarioTable, scenario_table};
use serde::Serialize;

use crate::config::AnalysisSettings;
use crate::util::format::{format_delta, format_millions, format_percentage, format_rate};

/// Sampled NPV distribution of one project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NpvDistribution {
    pub project: ProjectId,
    pub summary: DistributionSummary,
    pub histogram: Histogram,
}

/// Every computed series needed by the text report, the export and the viewer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub settings: AnalysisSettings,
    pub scenarios: ScenarioTable,
    pub summaries: Vec<ProjectSummary>,
    pub discount: DiscountSweep,
    pub break_even: BreakEvenTable,
    pub tornado: TornadoAnalysis,
    pub waterfalls: Vec<Waterfall>,
    pub monte_carlo: MonteCarloResult,
    pub distributions: Vec<NpvDistribution>,
}

impl Report {
    pub fn compute(settings: &AnalysisSettings) -> Result<Self, AnalysisError> {
        let rate = settings.discount_rate;
        tracing::info!(rate, samples = settings.monte_carlo.samples, "computing report");

        let waterfalls = ProjectId::ALL
            .into_iter()
            .map(|project| waterfall(project, rate))
            .collect::<Result<Vec<_>, _>>()?;

        let monte_carlo = monte_carlo_with_config(&settings.monte_carlo_config())?;
        let distributions = ProjectId::ALL
            .into_iter()
            .map(|project| {
                let npvs = monte_carlo.npvs(project);
                Ok(NpvDistribution {
                    project,
                    summary: DistributionSummary::from_values(&npvs)?,
                    histogram: Histogram::from_values(&npvs, settings.histogram_bins)?,
                })
            })
            .collect::<Result<Vec<_>, AnalysisError>>()?;

        let report = Self {
            settings: settings.clone(),
            scenarios: scenario_table(rate)?,
            summaries: project_summaries()?,
            discount: discount_sweep()?,
            break_even: break_even_table()?,
            tornado: tornado(rate)?,
            waterfalls,
            monte_carlo,
            distributions,
        };

        tracing::debug!("report computed");
        Ok(report)
    }

    pub fn waterfall(&self, project: ProjectId) -> Option<&Waterfall> {
        self.waterfalls.iter().find(|w| w.project == project)
    }

    pub fn distribution(&self, project: ProjectId) -> Option<&NpvDistribution> {
        self.distributions.iter().find(|d| d.project == project)
    }
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "=".repeat(title.chars().count()))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rate_label = format_rate(self.settings.discount_rate);

        heading(f, &format!("Scenario NPV at {rate_label}"))?;
        write!(f, "{:<34}", "Project")?;
        for scenario in Scenario::ALL {
            write!(f, "{:>14}", scenario.name())?;
        }
        writeln!(f)?;
        for project in ProjectId::ALL {
            write!(f, "{:<34}", project.project().name)?;
            for scenario in Scenario::ALL {
                let value = self.scenarios.get(project, scenario).unwrap_or(f64::NAN);
                write!(f, "{:>14}", format_millions(value))?;
            }
            writeln!(f)?;
        }

        heading(f, "Project summary")?;
        writeln!(
            f,
            "{:<22}{:<12}{:>12}{:>8}{:>12}",
            "Project", "Rate", "NPV", "BCR", "IRR"
        )?;
        for s in &self.summaries {
            let irr = if s.irr.converged {
                format_percentage(s.irr.rate)
            } else {
                "n/a".to_string()
            };
            writeln!(
                f,
                "{:<22}{:<12}{:>12}{:>8.2}{:>12}",
                s.project.project().short_name,
                s.rate_label,
                format_millions(s.npv),
                s.bcr,
                irr
            )?;
        }

        heading(f, "Discount rate sensitivity")?;
        writeln!(f, "{:<8}{:>22}{:>22}", "Rate", "Patient-Specific VC", "Hospital Sim & Ed")?;
        for (i, label) in self.discount.labels().iter().enumerate() {
            let marker = if self.discount.highlighted.contains(&i) {
                "*"
            } else {
                " "
            };
            write!(f, "{marker}{label:<7}")?;
            for project in ProjectId::ALL {
                let value = self.discount.series(project).get(i).copied().unwrap_or(f64::NAN);
                write!(f, "{:>22}", format_millions(value))?;
            }
            writeln!(f)?;
        }

        heading(f, "Break-even adoption")?;
        for row in &self.break_even.rows {
            write!(f, "{:<12}", row.label)?;
            for project in ProjectId::ALL {
                let t = row.thresholds.get(&project).copied().unwrap_or(f64::NAN);
                write!(f, "{:>22}", format_percentage(t))?;
            }
            writeln!(f)?;
        }

        for project in ProjectId::ALL {
            let result = self.tornado.get(project);
            heading(
                f,
                &format!(
                    "Tornado: {} (base {})",
                    project.project().short_name,
                    format_millions(result.base_npv)
                ),
            )?;
            for (param, bar) in result.ranked() {
                writeln!(
                    f,
                    "{:<24}{:>12}{:>12}",
                    param.label(),
                    format_delta(bar.low),
                    format_delta(bar.high)
                )?;
            }
        }

        for wf in &self.waterfalls {
            heading(f, &format!("Waterfall: {}", wf.project.project().short_name))?;
            writeln!(f, "{:<32}{:>12}", "Pessimistic base", format_millions(wf.base))?;
            for bar in &wf.steps {
                writeln!(f, "{:<32}{:>12}", bar.step.label(), format_delta(bar.delta))?;
            }
            writeln!(f, "{:<32}{:>12}", "Optimistic total", format_millions(wf.total))?;
        }

        let config = &self.monte_carlo.config;
        heading(
            f,
            &format!(
                "Monte Carlo ({} samples, seed {})",
                config.n_samples, config.seed
            ),
        )?;
        for dist in &self.distributions {
            let s = &dist.summary;
            writeln!(
                f,
                "{:<22} mean {:>9}  sd {:>8}  p5 {:>9}  p95 {:>9}  P(NPV<0) {}",
                dist.project.project().short_name,
                format_millions(s.mean),
                format_millions(s.std_dev),
                format_millions(s.p5),
                format_millions(s.p95),
                format_percentage(s.prob_negative)
            )?;
        }

        Ok(())
    }
}

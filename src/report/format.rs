//! Terminal tables and summaries.
//!
//! We keep formatting code in one place so:
//! - the math/model code stays clean and testable
//! - output changes are localized (snapshot-friendly)

use crate::app::pipeline::{OrbitalOutput, SweepOutput};
use crate::domain::{CurveKind, GrowthSettings, RadialQuantity, SweepConfig, SweepRow};
use crate::models::{FIRST_BOUNDARY, SECOND_BOUNDARY, Stages};
use crate::orbital::radial_norm;

/// Atom counts highlighted in the sweep table (clipped to the swept range).
pub const CHECKPOINTS: [f64; 8] = [1.0, 30.0, 59.0, 100.0, 136.0, 186.0, 300.0, 600.0];

/// Format the sweep summary: settings, anchors, and a checkpoint table.
pub fn format_sweep_summary(output: &SweepOutput, config: &SweepConfig) -> String {
    let mut out = String::new();

    out.push_str("=== cpg - critical-point memory growth ===\n");
    out.push_str(&format!("{}\n", format_settings(output.model.settings())));
    let anchors = output.model.anchors();
    out.push_str(&format!(
        "Anchors: f1({FIRST_BOUNDARY}) = {:.4} | f2({SECOND_BOUNDARY}) = {:.4}\n",
        anchors.first, anchors.second
    ));
    out.push_str(&format!(
        "Sweep: n=[{}, {}] | points={}\n\n",
        config.start, config.end, config.points
    ));

    out.push_str("Memory (MB) at checkpoints:\n");
    out.push_str(&format_sweep_table(&checkpoint_rows(&output.rows), &config.curves));

    out
}

/// One-line settings summary.
pub fn format_settings(settings: &GrowthSettings) -> String {
    format!(
        "Settings: k1={} | d3={} | c={} | d={}",
        settings.k1, settings.d3, settings.c, settings.d
    )
}

/// Rows nearest to each checkpoint inside the swept range, without duplicates.
pub fn checkpoint_rows(rows: &[SweepRow]) -> Vec<&SweepRow> {
    let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
        return Vec::new();
    };

    let mut picked: Vec<&SweepRow> = Vec::new();
    for target in CHECKPOINTS {
        if target < first.natoms || target > last.natoms {
            continue;
        }
        let nearest = rows.iter().min_by(|a, b| {
            (a.natoms - target)
                .abs()
                .total_cmp(&(b.natoms - target).abs())
        });
        if let Some(row) = nearest {
            if !picked.iter().any(|p| std::ptr::eq(*p, row)) {
                picked.push(row);
            }
        }
    }
    picked
}

/// Table of memory per curve for the given rows.
pub fn format_sweep_table(rows: &[&SweepRow], curves: &[CurveKind]) -> String {
    let mut out = String::new();

    let mut header = format!("{:>8}", "natoms");
    let mut rule = format!("{:-<8}", "");
    for kind in curves {
        header.push_str(&format!(" {:>14}", kind.slug()));
        rule.push_str(&format!(" {:-<14}", ""));
    }
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for row in rows {
        let mut line = format!("{:>8.1}", row.natoms);
        for &kind in curves {
            match row.sample(kind) {
                Some(s) => line.push_str(&format!(" {:>14.3}", s.memory_mb)),
                None => line.push_str(&format!(" {:>14}", "-")),
            }
        }
        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// Per-stage breakdown of the smooth model (for `cpg eval`).
pub fn format_stages(stages: &[Stages]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>8} {:>12} {:>10} {:>10} {:>8} {:>10} {:>8} {:>10} {:>8}\n",
        "n", "f1", "f2", "f3", "w1", "mid", "w2", "blend", "units"
    ));
    out.push_str(&format!(
        "{:-<8} {:-<12} {:-<10} {:-<10} {:-<8} {:-<10} {:-<8} {:-<10} {:-<8}\n",
        "", "", "", "", "", "", "", "", ""
    ));
    for s in stages {
        out.push_str(&format!(
            "{:>8.2} {:>12.3} {:>10.3} {:>10.3} {:>8.5} {:>10.3} {:>8.5} {:>10.3} {:>8}\n",
            s.n, s.regime1, s.regime2, s.regime3, s.w1, s.mid, s.w2, s.blend, s.value
        ));
    }
    out
}

/// Per-basis summary: ψ(0), distribution peak, and grid norm.
pub fn format_orbital_summary(output: &OrbitalOutput, quantity: RadialQuantity) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== cpg - 1s radial functions ({}) ===\n",
        match quantity {
            RadialQuantity::Wavefunction => "wavefunction",
            RadialQuantity::Distribution => "radial distribution",
        }
    ));
    out.push_str(&format!(
        "Grid: r=[{:.3}, {:.3}] bohr | points={}\n\n",
        output.r.first().copied().unwrap_or(0.0),
        output.r.last().copied().unwrap_or(0.0),
        output.r.len()
    ));

    out.push_str(&format!("{:<10} {:>10} {:>10} {:>10}\n", "basis", "psi(0)", "r_peak", "norm"));
    out.push_str(&format!("{:-<10} {:-<10} {:-<10} {:-<10}\n", "", "", "", ""));
    for p in &output.profiles {
        let peak = p
            .distribution
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| output.r[i])
            .unwrap_or(f64::NAN);
        let norm = radial_norm(&output.r, &p.psi).unwrap_or(f64::NAN);
        out.push_str(&format!(
            "{:<10} {:>10.5} {:>10.3} {:>10.6}\n",
            p.basis.display_name(),
            p.psi.first().copied().unwrap_or(f64::NAN),
            peak,
            norm
        ));
    }
    out
}

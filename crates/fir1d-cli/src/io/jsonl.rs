// crates/fir1d-cli/src/io/jsonl.rs

use anyhow::Context;
use fir1d_core::report::CompareReport;

fn join_u64(values: &[u64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn join_f64(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// One line per row: {"row":N,"y":[..]}
pub fn write_u64_rows_stdout(rows: &[Vec<u64>]) -> anyhow::Result<()> {
    for (i, row) in rows.iter().enumerate() {
        println!("{{\"row\":{},\"y\":[{}]}}", i, join_u64(row));
    }
    Ok(())
}

pub fn write_f64_rows_stdout(rows: &[Vec<f64>]) -> anyhow::Result<()> {
    for (i, row) in rows.iter().enumerate() {
        println!("{{\"row\":{},\"y\":[{}]}}", i, join_f64(row));
    }
    Ok(())
}

pub fn report_to_json(r: &CompareReport) -> String {
    let worst = r
        .worst
        .iter()
        .map(|w| {
            format!(
                "{{\"index\":{},\"ideal\":{},\"fixed\":{},\"abs_err\":{}}}",
                w.index, w.ideal, w.fixed, w.abs_err
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{{\"num_samples\":{},\"max_abs_err\":{},\"mae\":{},\"rmse\":{},\"mean_err\":{},\
         \"sat_low_ratio\":{},\"sat_high_ratio\":{},\"sat_ratio\":{},\"clip_needed_ratio\":{},\
         \"worst\":[{}]}}",
        r.num_samples,
        r.max_abs_err,
        r.mae,
        r.rmse,
        r.mean_err,
        r.sat_low_ratio,
        r.sat_high_ratio,
        r.sat_ratio,
        r.clip_needed_ratio,
        worst
    )
}

pub fn write_report_file(path: &str, r: &CompareReport) -> anyhow::Result<()> {
    let mut s = report_to_json(r);
    s.push('\n');
    std::fs::write(path, s).with_context(|| format!("write report jsonl: {path}"))?;
    Ok(())
}

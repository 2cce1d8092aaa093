// crates/fir1d-cli/tests/vector_file_roundtrip.rs

use std::fs;
use std::path::Path;
use std::process::Command;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fir1d-cli"))
}

fn run_ok(cmd: &mut Command) -> (String, String) {
    let out = cmd.output().expect("spawn command");
    let stdout = String::from_utf8_lossy(&out.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&out.stderr).into_owned();
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{stdout}\nstderr:\n{stderr}",
        out.status.code()
    );
    (stdout, stderr)
}

// FV1 layout: magic, version u16, dtype u8, rows u32, cols u32, payload,
// crc32. Built by hand so the test does not trust the writer under test.
fn write_case_u8(path: &Path, rows: u32, cols: u32, pixels: &[u8]) {
    let mut b = Vec::new();
    b.extend_from_slice(b"FV1\0");
    b.extend_from_slice(&1u16.to_le_bytes());
    b.push(0);
    b.extend_from_slice(&rows.to_le_bytes());
    b.extend_from_slice(&cols.to_le_bytes());
    b.extend_from_slice(pixels);
    let mut h = crc32fast::Hasher::new();
    h.update(&b);
    b.extend_from_slice(&h.finalize().to_le_bytes());
    fs::write(path, b).unwrap();
}

#[test]
fn fixed_filter_round_trips_through_inspect_and_restore() {
    let dir = tempfile::tempdir().unwrap();
    let y_fv = dir.path().join("y.fv");

    run_ok(
        cli()
            .args(["filter", "--kind", "fixed"])
            .args(["--x", "10,20,30,40", "--h", "0.25,0.5,0.25"])
            .arg("--out")
            .arg(&y_fv),
    );

    let (_, err) = run_ok(cli().arg("inspect").arg("--in").arg(&y_fv));
    assert!(err.contains("1x4"), "{err}");
    assert!(err.contains("u8"), "{err}");

    let pgm = dir.path().join("y.pgm");
    run_ok(
        cli()
            .arg("restore")
            .arg("--in")
            .arg(&y_fv)
            .arg("--out")
            .arg(&pgm),
    );
    let mut want = b"P5\n4 1\n255\n".to_vec();
    want.extend_from_slice(&[10, 20, 30, 28]);
    assert_eq!(fs::read(&pgm).unwrap(), want);
}

#[test]
fn compare_reports_ideal_vs_fixed_error() {
    let dir = tempfile::tempdir().unwrap();
    let fixed_fv = dir.path().join("fixed.fv");
    let ideal_fv = dir.path().join("ideal.fv");
    let report = dir.path().join("report.jsonl");

    for (kind, out) in [("fixed", &fixed_fv), ("ideal", &ideal_fv)] {
        run_ok(
            cli()
                .args(["filter", "--kind", kind])
                .args(["--x", "10,20,30,40", "--h", "0.25,0.5,0.25"])
                .arg("--out")
                .arg(out),
        );
    }

    run_ok(
        cli()
            .arg("compare")
            .arg("--ideal")
            .arg(&ideal_fv)
            .arg("--fixed")
            .arg(&fixed_fv)
            .args(["--fmt", "jsonl"])
            .arg("--out")
            .arg(&report),
    );

    // ideal y[3] = 27.5 against fixed y[3] = 28.
    let json = fs::read_to_string(&report).unwrap();
    assert!(json.contains("\"num_samples\":4"), "{json}");
    assert!(json.contains("\"max_abs_err\":0.5,"), "{json}");
}

#[test]
fn gen_sweep_writes_convention_named_vectors() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    let out = dir.path().join("out");
    fs::create_dir_all(&input).unwrap();
    write_case_u8(&input.join("bright_x_u8.fv"), 1, 4, &[200, 220, 240, 250]);

    let (_, err) = run_ok(
        cli()
            .arg("gen")
            .arg("--input-dir")
            .arg(&input)
            .arg("--output-dir")
            .arg(&out)
            .args(["--tap", "3", "--kind", "fixed"]),
    );
    assert!(err.contains("generated=4"), "{err}");

    let lp = out
        .join("fixed_3tap")
        .join("bright__simple_lp_fixed_3tap_y_u8.fv");
    let bytes = fs::read(&lp).unwrap();
    assert_eq!(&bytes[15..19], &[155u8, 220, 238, 185][..]);
}

#[test]
fn gen_strict_rejects_pixels_wider_than_u8() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    let out = dir.path().join("out");
    fs::create_dir_all(&input).unwrap();
    write_case_u8(&input.join("bright_x_u8.fv"), 1, 4, &[200, 220, 240, 250]);

    let got = cli()
        .arg("gen")
        .arg("--input-dir")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .args(["--tap", "3", "--kind", "fixed"])
        .args(["--data-bits", "16", "--strict"])
        .output()
        .expect("spawn command");
    assert!(!got.status.success());
    let err = String::from_utf8_lossy(&got.stderr);
    assert!(err.contains("data_bits"), "{err}");
}

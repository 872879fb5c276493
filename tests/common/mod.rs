use std::fs;
use std::path::PathBuf;

const UPDATE_VAR: &str = "RSGEN_UPDATE_SNAPSHOTS";

fn snapshot_path(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "snapshots", name]
        .iter()
        .collect()
}

/// Compare rendered coefficients (one per line) against a stored snapshot
pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_path(name);
    if std::env::var_os(UPDATE_VAR).is_some() {
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    let mismatches = coefficient_diff(&expected, actual);
    if !mismatches.is_empty() {
        panic!(
            "Snapshot mismatch for {:?} ({} lines differ). Set {}=1 to regenerate.\n{}",
            path,
            mismatches.len(),
            UPDATE_VAR,
            mismatches.join("\n")
        );
    }
}

/// One entry per differing line: `degree k: expected X, got Y`
fn coefficient_diff(expected: &str, actual: &str) -> Vec<String> {
    let expected: Vec<&str> = expected.lines().map(str::trim).collect();
    let actual: Vec<&str> = actual.lines().map(str::trim).collect();

    (0..expected.len().max(actual.len()))
        .filter_map(|k| {
            let want = expected.get(k).copied();
            let got = actual.get(k).copied();
            (want != got).then(|| {
                format!(
                    "degree {}: expected {}, got {}",
                    k,
                    want.unwrap_or("<missing>"),
                    got.unwrap_or("<missing>")
                )
            })
        })
        .collect()
}

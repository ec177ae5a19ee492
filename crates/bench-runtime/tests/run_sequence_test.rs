//! Output shape of a full (small) benchmark run.

use bench_runtime::{sampling_banner, BenchRuntime, WARMUP_BANNER};
use mc_copy_harness::{catalog, HarnessConfigBuilder};

const HEADER: &str = "Name\tUnlocked\tLocked";
const ROWS_PER_TABLE: usize = 11;

fn run(samples: usize, verify: bool) -> Vec<String> {
    let config = HarnessConfigBuilder::new()
        .warmup_size(10)
        .sample_size(200)
        .samples(samples)
        .verify_copies(verify)
        .build()
        .unwrap();
    let runtime = BenchRuntime::new(config).unwrap();

    let mut out = Vec::new();
    runtime.run(&mut out).unwrap();

    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_warm_up_precedes_first_table() {
    let lines = run(1, false);

    assert_eq!(lines[0], WARMUP_BANNER);
    assert_eq!(lines[1], HEADER);
}

#[test]
fn test_each_sample_has_banner_then_table() {
    let samples = 3;
    let lines = run(samples, false);

    let table_len = 1 + ROWS_PER_TABLE;
    assert_eq!(lines.len(), 1 + table_len + samples * (1 + table_len));

    for i in 0..samples {
        let banner_at = 1 + table_len + i * (1 + table_len);
        assert_eq!(lines[banner_at], sampling_banner(i));
        assert_eq!(lines[banner_at + 1], HEADER, "Header follows banner {}", i);
    }
}

#[test]
fn test_every_table_lists_cases_in_catalog_order() {
    let lines = run(2, true);
    let expected = catalog().unwrap().names();

    let tables: Vec<Vec<&str>> = lines
        .split(|l| l == HEADER)
        .skip(1)
        .map(|chunk| {
            chunk
                .iter()
                .take(ROWS_PER_TABLE)
                .map(|row| row.split('\t').next().unwrap())
                .collect()
        })
        .collect();

    assert_eq!(tables.len(), 3, "Warm-up plus two samples");
    for table in tables {
        assert_eq!(table, expected);
    }
}

//! End-to-end tests of the harness through its public API.

use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

use mc_copy_harness::domain::{plain_map_cases, sync_map_cases};
use mc_copy_harness::{
    catalog, BenchmarkCase, BenchmarkRunner, Destination, HarnessApi, Monitor, PlainMap,
    SourceMapping, SyncMap, TimedCopy,
};
use rand::Rng;

fn expected_pairs(size: usize) -> BTreeMap<String, String> {
    (0..size).map(|i| (i.to_string(), i.to_string())).collect()
}

fn capture(runner: &impl HarnessApi) -> String {
    let mut out = Vec::new();
    runner.run_all(&mut out).expect("table should print");
    String::from_utf8(out).expect("table is UTF-8")
}

#[test]
fn test_every_case_copies_exactly_the_source() {
    let registry = catalog().unwrap();

    for size in [0usize, 1, 3, 100, 1_000] {
        let source = SourceMapping::with_size(size);
        let expected = expected_pairs(size);

        for case in registry.iter() {
            assert_eq!(
                case.copy_snapshot(&source),
                expected,
                "{} diverged at size {}",
                case.name(),
                size
            );
        }
    }
}

#[test]
fn test_empty_source_runs_every_case() {
    let runner = BenchmarkRunner::new(0).unwrap().verify_copies(true);

    for case in runner.cases().iter() {
        let m = runner.run_one(case).unwrap();
        assert!(m.unlocked < Duration::from_secs(1), "{}", m.case_name);
        assert!(m.locked < Duration::from_secs(1), "{}", m.case_name);
    }
}

#[test]
fn test_put_all_plain_map_small_example() {
    let source = SourceMapping::with_size(3);
    let case = plain_map_cases()
        .into_iter()
        .find(|c| c.name() == "putAll→PlainMap")
        .unwrap();

    let target = case.produce(&source);

    let mut expected = PlainMap::new();
    expected.insert("0".into(), "0".into());
    expected.insert("1".into(), "1".into());
    expected.insert("2".into(), "2".into());
    assert_eq!(target, expected);

    let unlocked = case.time_unlocked(&source, true).unwrap();
    let locked = case.time_locked(&source, true).unwrap();
    assert!(unlocked < Duration::from_secs(5));
    assert!(locked < Duration::from_secs(5));
}

#[test]
fn test_two_tables_same_shape_and_order() {
    let runner = BenchmarkRunner::new(100).unwrap();

    let first = capture(&runner);
    let second = capture(&runner);

    for output in [&first, &second] {
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "Name\tUnlocked\tLocked");
        assert_eq!(lines.len(), 12, "One header and 11 data rows");
        assert_eq!(
            lines.iter().filter(|l| **l == "Name\tUnlocked\tLocked").count(),
            1
        );
    }

    let names = |output: &str| -> Vec<String> {
        output
            .lines()
            .skip(1)
            .map(|l| l.split('\t').next().unwrap().to_string())
            .collect()
    };
    assert_eq!(names(&first), names(&second));
}

#[test]
fn test_rows_have_three_grouped_integer_columns() {
    let runner = BenchmarkRunner::new(100).unwrap();
    let output = capture(&runner);

    for line in output.lines().skip(1) {
        let columns: Vec<_> = line.split('\t').collect();
        assert_eq!(columns.len(), 3, "Row {:?} needs three columns", line);
        for number in &columns[1..] {
            assert!(
                number.chars().all(|c| c.is_ascii_digit() || c == ','),
                "{:?} is not a grouped integer",
                number
            );
            assert!(!number.starts_with(','));
        }
    }
}

#[test]
fn test_large_copy_spot_check() {
    let size = 50_000;
    let source = SourceMapping::with_size(size);
    let mut rng = rand::thread_rng();

    for case in sync_map_cases() {
        let target: SyncMap = case.produce(&source);
        assert_eq!(Destination::len(&target), size, "{}", case.name());
        for _ in 0..200 {
            let key = rng.gen_range(0..size).to_string();
            assert_eq!(target.get_property(&key), Some(key.clone()), "{}", case.name());
        }
    }

    for case in plain_map_cases() {
        let target = case.produce(&source);
        assert_eq!(target.len(), size, "{}", case.name());
        for _ in 0..200 {
            let key = rng.gen_range(0..size).to_string();
            assert_eq!(target.get(&key), Some(&key), "{}", case.name());
        }
    }
}

fn failing_copy(source: &SourceMapping, target: &mut PlainMap) {
    for (i, (key, value)) in source.iter().enumerate() {
        if i == 2 {
            panic!("copy failed after two entries");
        }
        target.insert(key.clone(), value.clone());
    }
}

#[test]
fn test_failing_copy_unwinds_out_of_locked_phase() {
    let case = BenchmarkCase::new("failing", PlainMap::new, failing_copy);
    let source = SourceMapping::with_size(10);

    let result = catch_unwind(AssertUnwindSafe(|| case.time_locked(&source, false)));

    assert!(result.is_err(), "A failing copy is fatal, not an Err value");
}

#[test]
fn test_monitor_released_after_failing_copy() {
    let source = SourceMapping::with_size(10);
    let mut monitor = Monitor::new(PlainMap::new());

    let result = catch_unwind(AssertUnwindSafe(|| {
        monitor.with_lock(|target| failing_copy(&source, target))
    }));

    assert!(result.is_err());
    assert!(!monitor.is_locked());
    assert_eq!(monitor.get().len(), 2, "Entries before the failure stay");
}

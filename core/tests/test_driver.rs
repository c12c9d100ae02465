// tests/test_driver.rs
use workout_core::{
    parse_packages, run_packages, sample_packages, InfoMessage, Metrics, OutputFormat, Package,
    RunOptions, WorkoutError,
};

fn run(packages: &[Package], opts: RunOptions) -> (Result<workout_core::RunReport, WorkoutError>, String, Metrics) {
    let metrics = Metrics::new().unwrap();
    let mut out = Vec::new();
    let res = run_packages(packages, &mut out, opts, &metrics);
    (res, String::from_utf8(out).unwrap(), metrics)
}

#[test]
fn sample_run_prints_one_line_per_package_in_order() {
    let (res, out, metrics) = run(&sample_packages(), RunOptions::default());
    let report = res.unwrap();
    assert_eq!(report.emitted, 3);
    assert!(report.is_clean());

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; Avg. speed: 1.000 km/h; Calories burned: 336.000.",
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg. speed: 9.750 km/h; Calories burned: 699.750.",
            "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; Avg. speed: 5.850 km/h; Calories burned: 157.500.",
        ]
    );
    assert!(out.ends_with('\n'));
    assert_eq!(metrics.processed("Running").get(), 1);
    assert_eq!(metrics.processed("Swimming").get(), 1);
}

#[test]
fn first_failure_aborts_remaining_packages() {
    let packages = vec![
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("XYZ", vec![1.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ];
    let (res, out, metrics) = run(&packages, RunOptions::default());
    assert!(matches!(res, Err(WorkoutError::UnknownActivityType(ref c)) if c == "XYZ"));
    assert_eq!(out.lines().count(), 1);
    assert_eq!(metrics.processed("SportsWalking").get(), 0);
    assert_eq!(metrics.rejected("unknown_type").get(), 1);
}

#[test]
fn keep_going_skips_and_reports_failures() {
    let packages = vec![
        Package::new("RUN", vec![1.0, 2.0]),
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("???", vec![]),
    ];
    let opts = RunOptions { keep_going: true, ..Default::default() };
    let (res, out, metrics) = run(&packages, opts);
    let report = res.unwrap();

    assert_eq!(report.emitted, 1);
    assert!(!report.is_clean());
    let failed: Vec<usize> = report.failed.iter().map(|(i, _)| *i).collect();
    assert_eq!(failed, vec![0, 2]);
    assert!(matches!(report.failed[0].1, WorkoutError::ArityMismatch { .. }));
    assert!(out.starts_with("Training type: Swimming;"));
    assert_eq!(metrics.rejected("arity_mismatch").get(), 1);
    assert_eq!(metrics.rejected("unknown_type").get(), 1);
}

#[test]
fn json_format_serializes_info_message() {
    let opts = RunOptions { format: OutputFormat::Json, ..Default::default() };
    let packages = parse_packages(r#"[["RUN", [15000, 1, 75]]]"#).unwrap();
    let (res, out, _) = run(&packages, opts);
    res.unwrap();

    let info: InfoMessage = serde_json::from_str(out.trim_end()).unwrap();
    assert_eq!(info.training_type, "Running");
    assert!((info.calories_kcal - 699.75).abs() < 1e-9);
}

#[test]
fn empty_input_writes_nothing() {
    let (res, out, _) = run(&[], RunOptions::default());
    assert_eq!(res.unwrap().emitted, 0);
    assert!(out.is_empty());
}

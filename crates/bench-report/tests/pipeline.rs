// File: crates/bench-report/tests/pipeline.rs
// Purpose: Whole-run behaviour over a results directory: loading, failures, PNG output.

use std::path::Path;

use bench_report::{build_chart, run, BenchResults, Config, Operation, Record, ReportError};

fn write_inputs(dir: &Path, find: &str, insert: &str, delete: &str) {
    std::fs::write(dir.join("find.csv"), find).expect("write find");
    std::fs::write(dir.join("insert.csv"), insert).expect("write insert");
    std::fs::write(dir.join("delete.csv"), delete).expect("write delete");
}

#[test]
fn writes_plot_next_to_inputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_inputs(
        dir.path(),
        "100,80\n1000,120\n10000,170\n",
        "100,300\n1000,420\n10000,610\n",
        "100,280\n1000,390\n10000,560\n",
    );

    let out = run(&Config::for_results_dir(dir.path())).expect("run");
    assert_eq!(out, dir.path().join("plot.png"));

    let img = image::open(&out).expect("decode plot").to_rgba8();
    assert_eq!((img.width(), img.height()), (1024, 640));
}

#[test]
fn load_maps_each_file_to_its_operation() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_inputs(dir.path(), "10,100\n20,250\n", "10,300\n", "\n");

    let results = BenchResults::load(dir.path()).expect("load");
    assert_eq!(results[Operation::Find].records(), &[Record::new(10, 100), Record::new(20, 250)]);
    assert_eq!(results.get(Operation::Insert).records(), &[Record::new(10, 300)]);
    assert!(results[Operation::Delete].is_empty());
    assert_eq!(results.total_records(), 3);

    let order: Vec<&str> = results.iter().map(|(op, _)| op.label()).collect();
    assert_eq!(order, vec!["find", "insert", "delete"]);
}

#[test]
fn missing_input_aborts_without_image() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("find.csv"), "10,100\n").expect("write find");
    std::fs::write(dir.path().join("delete.csv"), "10,100\n").expect("write delete");

    let err = run(&Config::for_results_dir(dir.path())).unwrap_err();
    match err {
        ReportError::MissingFile { path } => assert_eq!(path, dir.path().join("insert.csv")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!dir.path().join("plot.png").exists());
}

#[test]
fn bad_record_aborts_without_image() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_inputs(dir.path(), "10,100\n", "10,200\n", "10,300\nabc,100\n");

    let err = run(&Config::for_results_dir(dir.path())).unwrap_err();
    match err {
        ReportError::Parse { path, line, .. } => {
            assert_eq!(path, dir.path().join("delete.csv"));
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!dir.path().join("plot.png").exists());
}

#[test]
fn empty_inputs_still_produce_a_chart() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_inputs(dir.path(), "", "", "");

    let config = Config::for_results_dir(dir.path());
    let results = BenchResults::load(dir.path()).expect("load");
    let chart = build_chart(&results, &config);
    assert_eq!(chart.series.len(), 3);
    assert!(chart.series.iter().all(|s| s.is_empty()));
    let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["find", "insert", "delete"]);

    let out = run(&config).expect("run");
    assert!(out.exists());
}

#[test]
fn chart_uses_raw_points_and_labels() {
    let results = BenchResults::new(
        vec![Record::new(20, 250), Record::new(10, 100)].into(),
        vec![Record::new(10, 300)].into(),
        Default::default(),
    );
    let config = Config::default();
    let chart = build_chart(&results, &config);

    assert_eq!(chart.title.as_deref(), Some(config.title.as_str()));
    assert_eq!(chart.x_axis.label, "Element count");
    assert_eq!(chart.y_axis.label, "Time, ns");
    assert!(chart.show_grid && chart.show_legend);
    assert_eq!(chart.series[0].data_xy, vec![(20.0, 250.0), (10.0, 100.0)]);
    // Axes cover every point
    assert!(chart.x_axis.min < 10.0 && chart.x_axis.max > 20.0);
    assert!(chart.y_axis.min < 100.0 && chart.y_axis.max > 300.0);
}

#[test]
fn explicit_output_overwrites_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_inputs(dir.path(), "10,100\n", "10,200\n", "10,300\n");
    let out_path = dir.path().join("charts/out.png");
    std::fs::create_dir_all(out_path.parent().unwrap()).unwrap();
    std::fs::write(&out_path, b"old").unwrap();

    let config = Config {
        output: Some(out_path.clone()),
        theme: "dark".into(),
        width: 400,
        height: 300,
        ..Config::for_results_dir(dir.path())
    };
    let out = run(&config).expect("run");
    assert_eq!(out, out_path);
    let img = image::open(&out).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (400, 300));
}

#[test]
fn repeated_loads_are_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_inputs(dir.path(), "10,100\n\n20,250\n", "10,300\n", "10,280\n");
    let a = BenchResults::load(dir.path()).expect("first");
    let b = BenchResults::load(dir.path()).expect("second");
    assert_eq!(a, b);
}

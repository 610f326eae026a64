//! End-to-end rebase tests against real NetCDF files.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use ncbump_rebase::{RebaseConfig, RebaseError, rebase};
use ncbump_time::FixedClock;
use netcdf::AttributeValue;
use tempfile::tempdir;

fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

/// "Now" used by every test: 2023-05-10T12:00:00Z.
fn clock() -> FixedClock {
    FixedClock(dt(2023, 5, 10, 12, 0, 0))
}

/// Write a fixture whose time axis is `values` under `units`.
fn write_fixture(dir: &Path, name: &str, values: &[f64], units: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = netcdf::create(&path).expect("create fixture");
    file.add_dimension("time", values.len()).expect("add dim");
    let mut var = file
        .add_variable::<f64>("time", &["time"])
        .expect("add time var");
    var.put_values(values, ..).expect("put values");
    var.put_attribute("units", units).expect("put units");
    var.put_attribute("calendar", "gregorian")
        .expect("put calendar");
    path
}

/// Write a fixture with no `time` variable at all.
fn write_timeless_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("timeless.nc");
    let mut file = netcdf::create(&path).expect("create fixture");
    file.add_dimension("x", 3).expect("add dim");
    let mut var = file.add_variable::<f64>("level", &["x"]).expect("add var");
    var.put_values(&[1.0, 2.0, 3.0], ..).expect("put values");
    path
}

fn read_time_values(path: &Path) -> Vec<f64> {
    let file = netcdf::open(path).expect("open");
    file.variable("time")
        .expect("time var")
        .get_values::<f64, _>(..)
        .expect("read values")
}

/// Seconds from the fixture epoch (2021-01-01) to a datetime.
fn secs_from_epoch(t: NaiveDateTime) -> f64 {
    (t - dt(2021, 1, 1, 0, 0, 0)).num_seconds() as f64
}

const HOURLY_UNITS: &str = "seconds since 2021-01-01 00:00:00";

#[test]
fn in_place_rewrite_hourly_series() {
    let dir = tempdir().unwrap();
    // 2021-01-01T00:00 and 01:00, one hour apart.
    let path = write_fixture(dir.path(), "in.nc", &[0.0, 3_600.0], HOURLY_UNITS);

    let config = RebaseConfig::new(&path);
    let outcome = rebase(&config, &clock()).expect("rebase succeeds");

    assert_eq!(outcome.n_samples, 2);
    assert!(!outcome.dry_run);
    assert!(outcome.diff.is_none());

    // New axis starts on the clock's date with the old time-of-day, same
    // spacing, same epoch.
    let values = read_time_values(&path);
    assert_eq!(values[0], secs_from_epoch(dt(2023, 5, 10, 0, 0, 0)));
    assert_eq!(values[1], secs_from_epoch(dt(2023, 5, 10, 1, 0, 0)));

    // Units are untouched.
    let file = netcdf::open(&path).unwrap();
    let units: String = file
        .variable("time")
        .unwrap()
        .attribute_value("units")
        .unwrap()
        .unwrap()
        .try_into()
        .unwrap();
    assert_eq!(units, HOURLY_UNITS);
}

#[test]
fn user_step_overrides_spacing() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "in.nc", &[0.0, 3_600.0], HOURLY_UNITS);

    let config = RebaseConfig::new(&path).with_time_step(7_200);
    rebase(&config, &clock()).expect("rebase succeeds");

    let values = read_time_values(&path);
    assert_eq!(values[0], secs_from_epoch(dt(2023, 5, 10, 0, 0, 0)));
    assert_eq!(values[1], secs_from_epoch(dt(2023, 5, 10, 2, 0, 0)));
}

#[test]
fn explicit_start_anchors_axis() {
    let dir = tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "in.nc",
        &[0.0, 3_600.0, 7_200.0],
        HOURLY_UNITS,
    );

    let config = RebaseConfig::new(&path).with_start_time(dt(2020, 1, 1, 6, 0, 0));
    rebase(&config, &clock()).expect("rebase succeeds");

    let values = read_time_values(&path);
    assert_eq!(values[0], secs_from_epoch(dt(2020, 1, 1, 6, 0, 0)));
    assert_eq!(values[1], secs_from_epoch(dt(2020, 1, 1, 7, 0, 0)));
    assert_eq!(values[2], secs_from_epoch(dt(2020, 1, 1, 8, 0, 0)));
}

#[test]
fn dry_run_reports_without_writing() {
    let dir = tempdir().unwrap();
    let original: Vec<f64> = (0..5).map(|i| i as f64 * 3_600.0).collect();
    let path = write_fixture(dir.path(), "in.nc", &original, HOURLY_UNITS);

    let config = RebaseConfig::new(&path).with_dry_run(true);
    let outcome = rebase(&config, &clock()).expect("dry run succeeds");

    assert!(outcome.dry_run);
    assert_eq!(outcome.n_samples, 5);
    let rows = outcome.diff.expect("dry run carries a diff");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].old, "2021-01-01T00:00:00");
    assert_eq!(rows[0].new, "2023-05-10T00:00:00");

    // Stored values are untouched.
    assert_eq!(read_time_values(&path), original);
}

#[test]
fn output_path_leaves_input_untouched() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path(), "in.nc", &[0.0, 3_600.0], HOURLY_UNITS);
    let output = dir.path().join("out.nc");

    let config = RebaseConfig::new(&input).with_output(&output);
    rebase(&config, &clock()).expect("rebase succeeds");

    assert_eq!(read_time_values(&input), vec![0.0, 3_600.0]);
    let values = read_time_values(&output);
    assert_eq!(values[0], secs_from_epoch(dt(2023, 5, 10, 0, 0, 0)));
    assert_eq!(values[1], secs_from_epoch(dt(2023, 5, 10, 1, 0, 0)));
}

#[test]
fn creation_attrs_default_to_clock_now() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "in.nc", &[0.0, 3_600.0], HOURLY_UNITS);

    let config = RebaseConfig::new(&path);
    rebase(&config, &clock()).expect("rebase succeeds");

    let file = netcdf::open(&path).unwrap();
    let attr = file
        .attribute("creation_date")
        .expect("creation_date present")
        .value()
        .expect("creation_date readable");
    assert_eq!(attr, AttributeValue::Str("2023-05-10T12:00:00Z".to_string()));
}

#[test]
fn explicit_create_time_is_recorded() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "in.nc", &[0.0, 3_600.0], HOURLY_UNITS);

    let config = RebaseConfig::new(&path).with_create_time(dt(2022, 12, 25, 8, 0, 0));
    rebase(&config, &clock()).expect("rebase succeeds");

    let file = netcdf::open(&path).unwrap();
    let attr = file
        .attribute("creation_date")
        .expect("creation_date present")
        .value()
        .expect("creation_date readable");
    assert_eq!(attr, AttributeValue::Str("2022-12-25T08:00:00Z".to_string()));
    let ts = file
        .attribute("creation_timestamp")
        .expect("creation_timestamp present")
        .value()
        .expect("creation_timestamp readable");
    assert_eq!(
        ts,
        AttributeValue::Double(dt(2022, 12, 25, 8, 0, 0).and_utc().timestamp() as f64)
    );
}

#[test]
fn missing_time_variable_is_a_storage_error() {
    let dir = tempdir().unwrap();
    let path = write_timeless_fixture(dir.path());

    let config = RebaseConfig::new(&path);
    let err = rebase(&config, &clock()).unwrap_err();
    assert!(matches!(
        err,
        RebaseError::Io(ncbump_io::IoError::MissingTimeVariable { .. })
    ));
}

#[test]
fn single_sample_without_step_is_a_time_error() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "in.nc", &[0.0], HOURLY_UNITS);

    let config = RebaseConfig::new(&path);
    let err = rebase(&config, &clock()).unwrap_err();
    assert!(matches!(
        err,
        RebaseError::Time(ncbump_time::TimeError::InsufficientData { len: 1 })
    ));
}

#[test]
fn single_sample_with_user_step_succeeds() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "in.nc", &[0.0], HOURLY_UNITS);

    let config = RebaseConfig::new(&path).with_time_step(3_600);
    let outcome = rebase(&config, &clock()).expect("rebase succeeds");

    assert_eq!(outcome.n_samples, 1);
    let values = read_time_values(&path);
    assert_eq!(values[0], secs_from_epoch(dt(2023, 5, 10, 0, 0, 0)));
}

#[test]
fn unsupported_calendar_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("noleap.nc");
    {
        let mut file = netcdf::create(&path).unwrap();
        file.add_dimension("time", 2).unwrap();
        let mut var = file.add_variable::<f64>("time", &["time"]).unwrap();
        var.put_values(&[0.0, 1.0], ..).unwrap();
        var.put_attribute("units", "days since 2000-01-01").unwrap();
        var.put_attribute("calendar", "360_day").unwrap();
    }

    let config = RebaseConfig::new(&path);
    let err = rebase(&config, &clock()).unwrap_err();
    assert!(matches!(
        err,
        RebaseError::Time(ncbump_time::TimeError::UnsupportedCalendar { .. })
    ));
}

#[test]
fn report_diff_on_real_run() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "in.nc", &[0.0, 3_600.0], HOURLY_UNITS);

    let config = RebaseConfig::new(&path).with_report_diff(true);
    let outcome = rebase(&config, &clock()).expect("rebase succeeds");

    assert!(!outcome.dry_run);
    let rows = outcome.diff.expect("diff requested");
    assert_eq!(rows.len(), 2);
    // And the write still happened.
    let values = read_time_values(&path);
    assert_eq!(values[0], secs_from_epoch(dt(2023, 5, 10, 0, 0, 0)));
}

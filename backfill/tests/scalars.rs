//! Behavioural tests for scalar, text, timestamp and duration defaults.

use std::path::PathBuf;
use std::time::Duration;

use backfill::{Fill, Filler, FillerOption, fill_defaults};
use chrono::{DateTime, TimeZone, Utc};
use rstest::rstest;

#[derive(Debug, Default, PartialEq, Fill)]
struct Scalars {
    #[fill(default = "true")]
    enabled: bool,
    #[fill(default = "-12")]
    offset: i32,
    #[fill(default = "65535")]
    port: u16,
    #[fill(default = "0.25")]
    ratio: f64,
    #[fill(default = "service")]
    name: String,
    #[fill(default = "/var/lib/service")]
    data_dir: PathBuf,
    #[fill(default = "payload")]
    banner: Vec<u8>,
    untagged: u64,
}

#[rstest]
fn zero_scalars_take_their_annotations() {
    let mut scalars = Scalars::default();
    fill_defaults(&mut scalars);
    assert_eq!(
        scalars,
        Scalars {
            enabled: true,
            offset: -12,
            port: 65535,
            ratio: 0.25,
            name: "service".to_owned(),
            data_dir: PathBuf::from("/var/lib/service"),
            banner: b"payload".to_vec(),
            untagged: 0,
        }
    );
}

#[rstest]
fn set_scalars_are_never_altered() {
    let mut scalars = Scalars {
        enabled: true,
        offset: 3,
        port: 22,
        ratio: 1.5,
        name: "custom".to_owned(),
        data_dir: PathBuf::from("/srv"),
        banner: b"hi".to_vec(),
        untagged: 9,
    };
    let before = Scalars {
        banner: scalars.banner.clone(),
        name: scalars.name.clone(),
        data_dir: scalars.data_dir.clone(),
        ..scalars
    };
    fill_defaults(&mut scalars);
    assert_eq!(scalars, before);
}

#[derive(Debug, Default, Fill)]
struct Flag {
    #[fill(default = "T")]
    short: bool,
    #[fill(default = "FALSE")]
    negative: bool,
}

#[rstest]
fn boolean_spellings_are_recognised() {
    let mut flag = Flag::default();
    fill_defaults(&mut flag);
    assert!(flag.short);
    assert!(!flag.negative);
}

#[derive(Debug, Default, Fill)]
struct Narrow {
    #[fill(default = "300")]
    byte: u8,
    #[fill(default = "-1")]
    unsigned: u32,
    #[fill(default = "12abc")]
    garbled: i64,
    #[fill(default = "maybe")]
    undecided: bool,
}

#[rstest]
fn unusable_annotations_leave_fields_unset() {
    let mut narrow = Narrow::default();
    fill_defaults(&mut narrow);
    assert_eq!(narrow.byte, 0);
    assert_eq!(narrow.unsigned, 0);
    assert_eq!(narrow.garbled, 0);
    assert!(!narrow.undecided);
}

#[derive(Debug, Default, Fill)]
struct Timing {
    #[fill(default = "1m30s")]
    interval: Duration,
    #[fill(default = "1.5ms")]
    jitter: Duration,
    #[fill(default = "2007-07-07T07:07:07Z")]
    started: DateTime<Utc>,
    #[fill(default = "2010-01-01T00:00:00+01:00")]
    checkpoint: Option<DateTime<Utc>>,
    #[fill(default = "-5s")]
    negative: Duration,
}

#[rstest]
fn durations_and_timestamps_are_parsed() {
    let mut timing = Timing::default();
    fill_defaults(&mut timing);
    assert_eq!(timing.interval, Duration::from_secs(90));
    assert_eq!(timing.jitter, Duration::from_micros(1500));
    assert_eq!(
        timing.started,
        Utc.with_ymd_and_hms(2007, 7, 7, 7, 7, 7).single().unwrap_or_default()
    );
    assert_eq!(
        timing.checkpoint,
        Utc.with_ymd_and_hms(2009, 12, 31, 23, 0, 0).single()
    );
    assert_eq!(timing.negative, Duration::ZERO);
}

#[rstest]
fn existing_timestamps_are_kept() {
    let earlier = Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).single().unwrap_or_default();
    let mut timing = Timing {
        started: earlier,
        ..Timing::default()
    };
    fill_defaults(&mut timing);
    assert_eq!(timing.started, earlier);
}

#[derive(Debug, Default, Fill)]
struct Nanos {
    #[fill(default = "1500")]
    timeout: Duration,
}

#[rstest]
fn durations_fall_back_to_nanoseconds_without_literal_parsing() {
    let filler = Filler::new([FillerOption::StandardHandlers]);
    let mut nanos = Nanos::default();
    filler.fill(&mut nanos);
    assert_eq!(nanos.timeout, Duration::from_nanos(1500));
}

#[rstest]
fn integer_annotations_are_rejected_for_duration_literals() {
    let mut nanos = Nanos::default();
    fill_defaults(&mut nanos);
    assert_eq!(nanos.timeout, Duration::ZERO);
}

#[derive(Debug, Default, Fill)]
struct Wide {
    #[fill(default = "170141183460469231731687303715884105727")]
    big: i128,
    #[fill(default = "340282366920938463463374607431768211455")]
    ubig: u128,
    #[fill(default = "-9223372036854775809")]
    below_i64: i128,
    #[fill(default = "-9223372036854775809")]
    too_small: i64,
}

#[rstest]
fn wide_integers_take_their_full_range() {
    let mut wide = Wide::default();
    fill_defaults(&mut wide);
    assert_eq!(wide.big, i128::MAX);
    assert_eq!(wide.ubig, u128::MAX);
    assert_eq!(wide.below_i64, i128::from(i64::MIN) - 1);
    assert_eq!(wide.too_small, 0);
}

//! Focused unit tests covering sequence CLI configuration, request parsing
//! and output rendering.

use super::helpers::{request_workspace, write_request, write_utf8};
use super::*;
use crate::sequence::{
    DefaultSequencerBuilder, OutputFormat, SequenceArgs, SequenceConfig, SequenceResponse,
    SequencerBuilder, config_from_layers_for_test, load_sequence_request, render_text,
    run_sequence_with,
};
use camino::Utf8PathBuf;
use rstest::rstest;
use tourline_core::test_support::{RejectingSequencer, ReversingSequencer, wuxi_attractions};
use tourline_core::{
    EARTH_RADIUS_KM, Route, RouteSequencer, SequenceError, SequencerConfig, Waypoint,
};

#[rstest]
fn converting_sequence_without_request_errors() {
    let args = SequenceArgs::default();

    let err = SequenceConfig::try_from(args).expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SEQUENCE_REQUEST);
            assert_eq!(env, ENV_SEQUENCE_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn sequence_config_applies_defaults() {
    let args = SequenceArgs {
        request_path: Some("request.json".into()),
        ..SequenceArgs::default()
    };

    let config = SequenceConfig::try_from(args).expect("config should build");
    assert_eq!(config.request_path, Utf8PathBuf::from("request.json"));
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.sequencer, SequencerConfig::default());
}

#[rstest]
#[expect(clippy::float_arithmetic, reason = "test compares floats within a tolerance")]
fn sequence_config_honours_overrides() {
    let args = SequenceArgs {
        request_path: Some("request.json".into()),
        format: Some(OutputFormat::Text),
        earth_radius_km: Some(6378.137),
        allow_out_of_range: Some(true),
    };

    let config = SequenceConfig::try_from(args).expect("config should build");
    assert_eq!(config.format, OutputFormat::Text);
    assert!((config.sequencer.earth_radius_km - 6378.137).abs() < f64::EPSILON);
    assert!(!config.sequencer.enforce_coordinate_ranges);
}

#[rstest]
#[case(0.0)]
#[case(-1.0)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn sequence_config_rejects_unusable_radius(#[case] radius: f64) {
    let args = SequenceArgs {
        request_path: Some("request.json".into()),
        earth_radius_km: Some(radius),
        ..SequenceArgs::default()
    };

    let err = SequenceConfig::try_from(args).expect_err("radius should be rejected");
    assert!(
        matches!(err, CliError::InvalidEarthRadius { .. }),
        "expected InvalidEarthRadius, found {err:?}"
    );
}

#[rstest]
#[expect(clippy::float_arithmetic, reason = "test compares floats within a tolerance")]
fn clap_parses_sequence_flags() {
    let cli = Cli::try_parse_from([
        "tourline",
        "sequence",
        "trip.json",
        "--format",
        "text",
        "--earth-radius-km",
        "6000",
        "--allow-out-of-range",
    ])
    .expect("arguments should parse");
    let Command::Sequence(args) = cli.command;
    assert_eq!(args.request_path, Some(Utf8PathBuf::from("trip.json")));
    assert_eq!(args.format, Some(OutputFormat::Text));
    assert!(
        args.earth_radius_km
            .is_some_and(|radius| (radius - 6000.0).abs() < f64::EPSILON)
    );
    assert_eq!(args.allow_out_of_range, Some(true));
}

#[rstest]
fn validate_sources_reports_missing_request() {
    let (_tmp, request_path) = request_workspace();
    let config = SequenceConfig {
        request_path: request_path.clone(),
        format: OutputFormat::Json,
        sequencer: SequencerConfig::default(),
    };

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_SEQUENCE_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let (_tmp, request_path) = request_workspace();
    std::fs::create_dir(&request_path).expect("request directory");
    let config = SequenceConfig {
        request_path: request_path.clone(),
        format: OutputFormat::Json,
        sequencer: SequencerConfig::default(),
    };

    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_SEQUENCE_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_sequence_request_decodes_json() {
    let (_tmp, request_path) = request_workspace();
    write_utf8(
        &request_path,
        br#"{ "waypoints": [ { "id": "taihu-lake", "lat": 31.23, "lon": 120.27 } ] }"#,
    );

    let request = load_sequence_request(&request_path).expect("request should decode");
    assert_eq!(
        request.waypoints,
        [Waypoint::from_lat_lon("taihu-lake", 31.23, 120.27)]
    );
}

#[rstest]
#[case::invalid_json(b"{ not valid json".as_slice())]
#[case::missing_longitude(br#"{ "waypoints": [ { "id": "a", "lat": 1.0 } ] }"#.as_slice())]
fn load_sequence_request_rejects_malformed_payloads(#[case] payload: &[u8]) {
    let (_tmp, request_path) = request_workspace();
    write_utf8(&request_path, payload);

    let err = load_sequence_request(&request_path).expect_err("payload should be rejected");
    match err {
        CliError::ParseSequenceRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_sequence_request_io_error_returns_open_error() {
    let (_tmp, request_path) = request_workspace();

    let err = load_sequence_request(&request_path).expect_err("missing request should error");
    match err {
        CliError::OpenSequenceRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected OpenSequenceRequest, found {other:?}"),
    }
}

#[rstest]
fn text_rendering_lists_stops_with_leg_distances() {
    let route = Route::new(wuxi_attractions());
    let legs_km = route.legs_km(EARTH_RADIUS_KM);
    let total_distance_km = route.total_distance_km(EARTH_RADIUS_KM);
    let response = SequenceResponse {
        route,
        legs_km,
        total_distance_km,
    };

    assert_eq!(
        render_text(&response),
        "1. taihu-lake\n\
         2. yuantouzhu (+4.4km)\n\
         3. lingshan-buddha (+22km)\n\
         4. wuxi-museum (+56km)\n\
         5. jichang-garden (+4.0km)\n\
         total: 87km\n"
    );
}

#[rstest]
#[expect(clippy::float_arithmetic, reason = "test compares floats within a tolerance")]
fn run_sequence_writes_json_response() {
    let (_tmp, request_path) = request_workspace();
    let mut stops = wuxi_attractions();
    if let Some(tail) = stops.get_mut(1..) {
        tail.reverse();
    }
    write_request(&request_path, stops);

    let args = SequenceArgs {
        request_path: Some(request_path),
        ..SequenceArgs::default()
    };
    let mut buffer = Vec::new();
    run_sequence_with(args, &DefaultSequencerBuilder, &mut buffer).expect("sequence succeeds");

    let stdout = String::from_utf8(buffer).expect("stdout utf-8");
    let response: SequenceResponse = serde_json::from_str(&stdout).expect("JSON response");
    assert_eq!(
        response.route.ids().collect::<Vec<_>>(),
        [
            "taihu-lake",
            "yuantouzhu",
            "lingshan-buddha",
            "wuxi-museum",
            "jichang-garden",
        ]
    );
    assert_eq!(response.legs_km.len(), 4);
    let summed: f64 = response.legs_km.iter().sum();
    assert!((response.total_distance_km - summed).abs() < 1e-9);
}

struct StubBuilder<F>(F);

impl<F> SequencerBuilder for StubBuilder<F>
where
    F: Fn() -> Box<dyn RouteSequencer>,
{
    fn build(&self, _config: &SequenceConfig) -> Box<dyn RouteSequencer> {
        (self.0)()
    }
}

#[rstest]
fn run_sequence_uses_the_built_sequencer() {
    let (_tmp, request_path) = request_workspace();
    write_request(&request_path, wuxi_attractions());

    let args = SequenceArgs {
        request_path: Some(request_path),
        format: Some(OutputFormat::Text),
        ..SequenceArgs::default()
    };
    let builder = StubBuilder(|| Box::new(ReversingSequencer) as Box<dyn RouteSequencer>);
    let mut buffer = Vec::new();
    run_sequence_with(args, &builder, &mut buffer).expect("sequence succeeds");

    let stdout = String::from_utf8(buffer).expect("stdout utf-8");
    assert_eq!(stdout.lines().next(), Some("1. jichang-garden"));
}

#[rstest]
fn run_sequence_wraps_sequencer_failures() {
    let (_tmp, request_path) = request_workspace();
    write_request(&request_path, wuxi_attractions());

    let args = SequenceArgs {
        request_path: Some(request_path.clone()),
        ..SequenceArgs::default()
    };
    let builder = StubBuilder(|| Box::new(RejectingSequencer) as Box<dyn RouteSequencer>);
    let mut buffer = Vec::new();
    let err = run_sequence_with(args, &builder, &mut buffer).expect_err("sequencer rejects");

    match err {
        CliError::Sequence { path, source } => {
            assert_eq!(path, request_path);
            assert_eq!(
                source,
                SequenceError::DuplicateWaypoint {
                    id: "taihu-lake".to_owned()
                }
            );
        }
        other => panic!("expected Sequence, found {other:?}"),
    }
    assert!(buffer.is_empty());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
#[expect(clippy::float_arithmetic, reason = "test compares floats within a tolerance")]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "request_path": "from-file.json",
            "format": "text",
            "earth_radius_km": 6000.0,
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": "from-env.json",
        "allow_out_of_range": true,
    }));
    composer.push_cli(json!({
        "earth_radius_km": 6500.0,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.format, OutputFormat::Text);
    assert!((config.sequencer.earth_radius_km - 6500.0).abs() < f64::EPSILON);
    assert!(!config.sequencer.enforce_coordinate_ranges);
}

//! Sequence command implementation for the Tourline CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tourline_core::{
    NearestNeighbourSequencer, Route, RouteSequencer, SequencerConfig, Waypoint, format_distance,
};
use tourline_fs::open_utf8_file;

use crate::{
    ARG_SEQUENCE_ALLOW_OUT_OF_RANGE, ARG_SEQUENCE_EARTH_RADIUS, ARG_SEQUENCE_FORMAT,
    ARG_SEQUENCE_REQUEST, CliError, ENV_SEQUENCE_REQUEST,
};

/// How the sequenced route is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Pretty-printed JSON response.
    #[default]
    Json,
    /// One numbered line per stop with leg distances.
    Text,
}

/// CLI arguments for the `sequence` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read a JSON request of the form {\"waypoints\": [{\"id\", \"lat\", \
                 \"lon\"}, ...]} and print the stops in nearest-neighbour order, \
                 starting from the first waypoint. Options can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Order waypoints nearest-first"
)]
#[ortho_config(prefix = "TOURLINE")]
pub(crate) struct SequenceArgs {
    /// Path to a JSON file containing the waypoints to order.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Output format.
    #[arg(long = ARG_SEQUENCE_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Sphere radius in kilometres used for haversine distances.
    #[arg(long = ARG_SEQUENCE_EARTH_RADIUS, value_name = "km")]
    #[serde(default)]
    pub(crate) earth_radius_km: Option<f64>,
    /// Accept latitudes and longitudes outside the usual degree ranges.
    #[arg(
        long = ARG_SEQUENCE_ALLOW_OUT_OF_RANGE,
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) allow_out_of_range: Option<bool>,
}

impl SequenceArgs {
    pub(crate) fn into_config(self) -> Result<SequenceConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SequenceConfig::try_from(merged)
    }
}

/// Resolved `sequence` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SequenceConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Output format.
    pub(crate) format: OutputFormat,
    /// Sequencer settings.
    pub(crate) sequencer: SequencerConfig,
}

impl SequenceConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.request_path;
        let field = ARG_SEQUENCE_REQUEST;
        match tourline_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<SequenceArgs> for SequenceConfig {
    type Error = CliError;

    fn try_from(args: SequenceArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SEQUENCE_REQUEST,
            env: ENV_SEQUENCE_REQUEST,
        })?;

        let defaults = SequencerConfig::default();
        let earth_radius_km = args.earth_radius_km.unwrap_or(defaults.earth_radius_km);
        if !earth_radius_km.is_finite() || earth_radius_km <= 0.0 {
            return Err(CliError::InvalidEarthRadius {
                value: earth_radius_km,
            });
        }
        let enforce_coordinate_ranges = !args.allow_out_of_range.unwrap_or(false);

        Ok(Self {
            request_path,
            format: args.format.unwrap_or_default(),
            sequencer: SequencerConfig {
                earth_radius_km,
                enforce_coordinate_ranges,
            },
        })
    }
}

/// JSON payload read from the request file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct SequenceRequest {
    /// Stops to order; the first one is the fixed start.
    pub(crate) waypoints: Vec<Waypoint>,
}

/// JSON payload printed for `--format json`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct SequenceResponse {
    /// Stops in visiting order.
    pub(crate) route: Route,
    /// Length of each hop in kilometres.
    pub(crate) legs_km: Vec<f64>,
    /// Sum of all legs in kilometres.
    pub(crate) total_distance_km: f64,
}

impl SequenceResponse {
    fn from_route(route: Route, radius_km: f64) -> Self {
        let legs_km = route.legs_km(radius_km);
        let total_distance_km = legs_km.iter().sum();
        Self {
            route,
            legs_km,
            total_distance_km,
        }
    }
}

/// Builds a sequencer instance for the current invocation.
pub(super) trait SequencerBuilder {
    fn build(&self, config: &SequenceConfig) -> Box<dyn RouteSequencer>;
}

pub(super) struct DefaultSequencerBuilder;

impl SequencerBuilder for DefaultSequencerBuilder {
    fn build(&self, config: &SequenceConfig) -> Box<dyn RouteSequencer> {
        Box::new(NearestNeighbourSequencer::with_config(
            config.sequencer.clone(),
        ))
    }
}

pub(super) fn run_sequence(args: SequenceArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_sequence_with(args, &DefaultSequencerBuilder, &mut stdout)
}

pub(super) fn run_sequence_with(
    args: SequenceArgs,
    builder: &dyn SequencerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_sequence_config(args)?;
    let response = execute_sequence(&config, builder)?;
    match config.format {
        OutputFormat::Json => write_json_response(writer, &response),
        OutputFormat::Text => write_text_response(writer, &response),
    }
}

fn resolve_sequence_config(args: SequenceArgs) -> Result<SequenceConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_sequence(
    config: &SequenceConfig,
    builder: &dyn SequencerBuilder,
) -> Result<SequenceResponse, CliError> {
    let request = load_sequence_request(&config.request_path)?;
    let sequencer = builder.build(config);
    let route = sequencer
        .sequence(&request.waypoints)
        .map_err(|source| CliError::Sequence {
            path: config.request_path.clone(),
            source,
        })?;
    info!(
        "sequenced {} waypoints from {}",
        route.len(),
        config.request_path
    );
    Ok(SequenceResponse::from_route(
        route,
        config.sequencer.earth_radius_km,
    ))
}

/// Loads a JSON-encoded [`SequenceRequest`] from disk.
pub(super) fn load_sequence_request(path: &Utf8Path) -> Result<SequenceRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenSequenceRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseSequenceRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json_response(
    writer: &mut dyn Write,
    response: &SequenceResponse,
) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerialiseSequenceResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteSequenceOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteSequenceOutput)?;
    Ok(())
}

/// Render the route as numbered lines, e.g. `2. museum (+4.0km)`.
pub(super) fn render_text(response: &SequenceResponse) -> String {
    let mut out = String::new();
    let mut legs = response.legs_km.iter();
    for (number, waypoint) in (1_usize..).zip(response.route.waypoints()) {
        out.push_str(&format!("{number}. {}", waypoint.id));
        if number > 1
            && let Some(leg) = legs.next()
        {
            out.push_str(&format!(" (+{})", format_distance(*leg)));
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "total: {}\n",
        format_distance(response.total_distance_km)
    ));
    out
}

fn write_text_response(
    writer: &mut dyn Write,
    response: &SequenceResponse,
) -> Result<(), CliError> {
    writer
        .write_all(render_text(response).as_bytes())
        .map_err(CliError::WriteSequenceOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SequenceConfig, CliError> {
    let merged = SequenceArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SequenceConfig::try_from(merged)
}

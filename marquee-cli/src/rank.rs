//! Rank command implementation for the Marquee CLI.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use clap::Parser;
use marquee_core::{CategoryFilter, Event, RankingContext, Surface};
use marquee_fs::open_utf8_file;
use marquee_scorer::{rank_events, scorer_for};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::{
    ARG_RANK_AT, ARG_RANK_CATEGORY, ARG_RANK_CITY, ARG_RANK_EVENTS, ARG_RANK_OUTPUT,
    ARG_RANK_SURFACE, CliError, ENV_RANK_EVENTS, ENV_RANK_SURFACE,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a JSON-encoded event list for one of the three UI \
                 surfaces. The viewer context (category filter, city) and \
                 the clock are optional; the clock defaults to now.",
    about = "Rank a JSON event list for one surface"
)]
#[ortho_config(prefix = "MARQUEE")]
pub(crate) struct RankArgs {
    /// Path to a JSON file containing an array of events.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) events_path: Option<Utf8PathBuf>,
    /// Surface to rank for: banner, for-you, or popular.
    #[arg(long = ARG_RANK_SURFACE, value_name = "surface")]
    #[serde(default)]
    pub(crate) surface: Option<String>,
    /// The viewer's selected category filter; "all" means no filter.
    #[arg(long = ARG_RANK_CATEGORY, value_name = "label")]
    #[serde(default)]
    pub(crate) category: Option<String>,
    /// The viewer's detected city.
    #[arg(long = ARG_RANK_CITY, value_name = "name")]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Pin the clock to an RFC 3339 instant for reproducible output.
    #[arg(long = ARG_RANK_AT, value_name = "timestamp")]
    #[serde(default)]
    pub(crate) at: Option<String>,
    /// Write the ranked report here instead of stdout.
    #[arg(long = ARG_RANK_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankArgs {
    fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the JSON events file.
    pub(crate) events_path: Utf8PathBuf,
    /// Surface the list is ranked for.
    pub(crate) surface: Surface,
    /// Viewer context assembled from the filter and city options.
    pub(crate) context: RankingContext,
    /// Pinned clock, or `None` to sample now once per run.
    pub(crate) at: Option<DateTime<Utc>>,
    /// Report destination, or `None` for stdout.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.events_path, ARG_RANK_EVENTS)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match marquee_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let events_path = args.events_path.ok_or(CliError::MissingArgument {
            field: ARG_RANK_EVENTS,
            env: ENV_RANK_EVENTS,
        })?;
        let surface: Surface = args
            .surface
            .ok_or(CliError::MissingArgument {
                field: ARG_RANK_SURFACE,
                env: ENV_RANK_SURFACE,
            })?
            .parse()?;

        let mut context = RankingContext::new();
        if let Some(label) = args.category {
            context = context.with_category_filter(CategoryFilter::from_label(&label));
        }
        if let Some(city) = args.city {
            context = context.with_user_city(city);
        }

        let at = args
            .at
            .map(|raw| {
                DateTime::parse_from_rfc3339(&raw)
                    .map(|instant| instant.with_timezone(&Utc))
                    .map_err(|source| CliError::InvalidTimestamp { raw, source })
            })
            .transpose()?;

        Ok(Self {
            events_path,
            surface,
            context,
            at,
            output: args.output,
        })
    }
}

/// One line of the ranked report.
#[derive(Debug, Serialize)]
pub(crate) struct RankedEntry {
    /// Backend identifier of the event.
    pub(crate) id: u64,
    /// Display name of the event.
    pub(crate) title: String,
    /// Score the event earned for the requested surface.
    pub(crate) score: u64,
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let config = resolve_rank_config(args)?;
    execute_rank(&config, &mut stdout)
}

pub(crate) fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_rank(config: &RankConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let events = load_events(&config.events_path)?;
    let at = config.at.unwrap_or_else(Utc::now);
    let scorer = scorer_for(config.surface);
    let ranked = rank_events(scorer.as_ref(), &events, &config.context, at);
    let report: Vec<RankedEntry> = ranked
        .iter()
        .map(|entry| RankedEntry {
            id: entry.event.id,
            title: entry.event.title.clone(),
            score: entry.score,
        })
        .collect();
    write_report(config, writer, &report)
}

/// Loads a JSON-encoded event list from disk.
pub(crate) fn load_events(path: &Utf8Path) -> Result<Vec<Event>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenEvents {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseEvents {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(
    config: &RankConfig,
    writer: &mut dyn Write,
    report: &[RankedEntry],
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerializeReport)?;
    match &config.output {
        Some(path) => {
            marquee_fs::write_utf8_file(path, &payload).map_err(CliError::WriteReport)
        }
        None => {
            writer
                .write_all(payload.as_bytes())
                .map_err(CliError::WriteReport)?;
            writer.write_all(b"\n").map_err(CliError::WriteReport)
        }
    }
}

/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use super::print_json;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use gc_client::{Activity, DownloadFormat, GarminConnectClient};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

#[derive(Args, Debug)]
pub struct ActivitiesCommand {
  #[command(subcommand)]
  command: ActivitiesSubcommands,
}

#[derive(Subcommand, Debug)]
enum ActivitiesSubcommands {
  /// One page of the most recent activities
  List {
    /// Offset of the first activity
    #[arg(short, long, default_value = "0")]
    start: u32,

    /// Number of activities to return
    #[arg(short, long, default_value = "20")]
    limit: u32,
  },

  /// Every activity between two dates
  Range {
    /// First day (YYYY-MM-DD)
    #[arg(long)]
    from: NaiveDate,

    /// Last day (YYYY-MM-DD)
    #[arg(long)]
    to: NaiveDate,

    /// Activity type key, e.g. running
    #[arg(short = 't', long = "type")]
    activity_type: Option<String>,

    /// Write a CSV summary here instead of JSON to stdout
    #[arg(long)]
    csv: Option<PathBuf>,
  },

  /// Export an activity file
  Download {
    activity_id: u64,

    /// original, tcx, gpx, kml or csv
    #[arg(short, long, default_value = "original")]
    format: DownloadFormat,

    /// Output path (defaults to <id>.<extension>)
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  Splits { activity_id: u64 },
  SplitSummaries { activity_id: u64 },
  Weather { activity_id: u64 },
  HrZones { activity_id: u64 },
  ExerciseSets { activity_id: u64 },

  /// Sampled metrics
  Details {
    activity_id: u64,

    #[arg(long, default_value = "100")]
    max_chart_size: u32,

    #[arg(long)]
    max_polyline_size: Option<u32>,
  },
}

/// Row of the CSV summary written by `activities range --csv`
#[derive(Debug, Serialize)]
struct ActivityRow<'a> {
  activity_id: u64,
  start_time_local: Option<&'a str>,
  activity_type: Option<&'a str>,
  name: Option<&'a str>,
  distance_m: Option<f64>,
  duration_s: Option<f64>,
  calories: Option<f64>,
  average_hr: Option<f64>,
}

impl<'a> From<&'a Activity> for ActivityRow<'a> {
  fn from(activity: &'a Activity) -> Self {
    Self {
      activity_id: activity.activity_id,
      start_time_local: activity.start_time_local.as_deref(),
      activity_type: activity.type_key(),
      name: activity.activity_name.as_deref(),
      distance_m: activity.distance,
      duration_s: activity.duration,
      calories: activity.calories,
      average_hr: activity.average_hr,
    }
  }
}

pub async fn execute(cmd: ActivitiesCommand, client: &GarminConnectClient) -> Result<()> {
  let activities = client.activities();
  match cmd.command {
    ActivitiesSubcommands::List { start, limit } => {
      print_json(&activities.list(start, limit).await.context("Failed to list activities")?)
    }
    ActivitiesSubcommands::Range { from, to, activity_type, csv } => {
      let spinner = ProgressBar::new_spinner();
      spinner.set_style(
        ProgressStyle::default_spinner()
          .template("{spinner:.cyan} {msg} [{elapsed_precise}]")
          .context("Invalid progress template")?,
      );
      spinner.set_message(format!("Fetching activities {} to {}", from, to));
      spinner.enable_steady_tick(Duration::from_millis(120));

      let result = activities.by_date(from, to, activity_type.as_deref()).await;
      spinner.finish_and_clear();
      let found = result.context("Failed to fetch activities")?;
      info!("Found {} activities between {} and {}", found.len(), from, to);

      match csv {
        Some(path) => write_csv(&path, &found),
        None => print_json(&found),
      }
    }
    ActivitiesSubcommands::Download { activity_id, format, output } => {
      let bytes = activities.download(activity_id, format).await.context("Download failed")?;
      let path =
        output.unwrap_or_else(|| PathBuf::from(format!("{}.{}", activity_id, format.extension())));
      std::fs::write(&path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;
      info!("Wrote {} bytes to {}", bytes.len(), path.display());
      Ok(())
    }
    ActivitiesSubcommands::Splits { activity_id } => {
      print_json(&activities.splits(activity_id).await?)
    }
    ActivitiesSubcommands::SplitSummaries { activity_id } => {
      print_json(&activities.split_summaries(activity_id).await?)
    }
    ActivitiesSubcommands::Weather { activity_id } => {
      print_json(&activities.weather(activity_id).await?)
    }
    ActivitiesSubcommands::HrZones { activity_id } => {
      print_json(&activities.hr_time_in_zones(activity_id).await?)
    }
    ActivitiesSubcommands::ExerciseSets { activity_id } => {
      print_json(&activities.exercise_sets(activity_id).await?)
    }
    ActivitiesSubcommands::Details { activity_id, max_chart_size, max_polyline_size } => {
      print_json(&activities.details(activity_id, max_chart_size, max_polyline_size).await?)
    }
  }
}

fn write_csv(path: &Path, activities: &[Activity]) -> Result<()> {
  let mut writer =
    csv::Writer::from_path(path).with_context(|| format!("Failed to create {}", path.display()))?;
  for activity in activities {
    writer.serialize(ActivityRow::from(activity))?;
  }
  writer.flush()?;
  info!("Wrote {} rows to {}", activities.len(), path.display());
  Ok(())
}

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
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use gc_client::GarminConnectClient;

#[derive(Args, Debug)]
pub struct WellnessCommand {
  #[command(subcommand)]
  command: WellnessSubcommands,
}

#[derive(Subcommand, Debug)]
enum WellnessSubcommands {
  /// Daily summary: steps, calories, heart rate, stress
  Summary {
    #[arg(short, long)]
    date: NaiveDate,
  },
  HeartRate {
    #[arg(short, long)]
    date: NaiveDate,
  },
  Sleep {
    #[arg(short, long)]
    date: NaiveDate,
  },
  /// Steps per 15 minute interval
  Steps {
    #[arg(short, long)]
    date: NaiveDate,
  },
  Hydration {
    #[arg(short, long)]
    date: NaiveDate,
  },
  /// Weight and body composition between two dates
  BodyComposition {
    #[arg(long)]
    from: NaiveDate,
    #[arg(long)]
    to: NaiveDate,
  },
}

pub async fn execute(cmd: WellnessCommand, client: &GarminConnectClient) -> Result<()> {
  let wellness = client.wellness();
  match cmd.command {
    WellnessSubcommands::Summary { date } => print_json(&wellness.user_summary(date).await?),
    WellnessSubcommands::HeartRate { date } => print_json(&wellness.heart_rates(date).await?),
    WellnessSubcommands::Sleep { date } => print_json(&wellness.sleep_data(date).await?),
    WellnessSubcommands::Steps { date } => print_json(&wellness.steps_data(date).await?),
    WellnessSubcommands::Hydration { date } => print_json(&wellness.hydration(date).await?),
    WellnessSubcommands::BodyComposition { from, to } => {
      print_json(&wellness.body_composition(from, to).await?)
    }
  }
}

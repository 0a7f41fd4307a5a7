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
use clap::{Args, Subcommand};
use gc_client::GarminConnectClient;

#[derive(Args, Debug)]
pub struct DevicesCommand {
  #[command(subcommand)]
  command: DevicesSubcommands,
}

#[derive(Subcommand, Debug)]
enum DevicesSubcommands {
  /// Devices registered to the account
  List,
  /// Settings stored on one device
  Settings { device_id: u64 },
  /// Device that synced most recently
  LastUsed,
}

pub async fn execute(cmd: DevicesCommand, client: &GarminConnectClient) -> Result<()> {
  let devices = client.devices();
  match cmd.command {
    DevicesSubcommands::List => print_json(&devices.list().await?),
    DevicesSubcommands::Settings { device_id } => print_json(&devices.settings(device_id).await?),
    DevicesSubcommands::LastUsed => print_json(&devices.last_used().await?),
  }
}

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
pub struct ProfileCommand {
  #[command(subcommand)]
  command: ProfileSubcommands,
}

#[derive(Subcommand, Debug)]
enum ProfileSubcommands {
  /// Social profile of the signed-in user
  Show,
  Preferences,
  Settings,
  /// Personal records
  Records {
    /// Display name of another user (defaults to the signed-in user)
    #[arg(long)]
    owner: Option<String>,
  },
}

pub async fn execute(cmd: ProfileCommand, client: &GarminConnectClient) -> Result<()> {
  let user = client.user();
  match cmd.command {
    ProfileSubcommands::Show => print_json(user.social_profile().await?.as_ref()),
    ProfileSubcommands::Preferences => print_json(user.preferences().await?.as_ref()),
    ProfileSubcommands::Settings => print_json(&user.settings().await?),
    ProfileSubcommands::Records { owner } => {
      let records = match owner {
        Some(owner) => user.personal_records(&owner).await?,
        None => user.own_personal_records().await?,
      };
      print_json(&records)
    }
  }
}

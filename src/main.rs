// Copyright 2025 Beez Innovation Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use cloudflared_kube::cli::{CliArgs, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, rendered manifests to stdout
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = CliArgs::parse();

    match args.command {
        Commands::Render(cmd) => cmd.execute(),
        Commands::Describe(cmd) => cmd.execute(),
    }
}

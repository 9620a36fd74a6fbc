// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! Developer automation for the book catalog workspace.
//!
//! - `cargo xtask ci` runs lint, build and the full test suite
//! - `cargo xtask test-crate domain` runs the tests of a single crate
//! - `cargo xtask coverage` writes an lcov report to `target/lcov.info`
//!
//! Everything here shells out to cargo; the catalog crates do not depend on
//! this binary.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err:?}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// The workspace's library crates.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CatalogCrate {
    /// ISBN and currency validators
    Verification,
    /// Book, value types and comparators
    Domain,
    /// Book list service and storage
    Core,
}

impl CatalogCrate {
    const fn package(self) -> &'static str {
        match self {
            Self::Verification => "book-catalog-verification",
            Self::Domain => "book-catalog-domain",
            Self::Core => "book-catalog",
        }
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test)
    CI,

    /// Build the workspace
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Generate an lcov coverage report
    #[command(visible_alias = "cov")]
    Coverage,

    /// Lint clippy, docs and formatting
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Build docs with warnings denied
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Apply formatting
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run all tests
    #[command(visible_alias = "t")]
    Test,

    /// Run the tests of one crate
    #[command(visible_alias = "tc")]
    TestCrate {
        /// The crate to test
        #[arg(value_enum)]
        krate: CatalogCrate,
    },

    /// Run doc tests
    #[command(visible_alias = "td")]
    TestDocs,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => {
                Self::Lint.run()?;
                Self::Build.run()?;
                Self::Test.run()
            }
            Self::Build => cargo(&["build", "--all-targets", "--all-features"]),
            Self::Check => cargo(&["check", "--all-targets", "--all-features"]),
            Self::Coverage => cargo(&[
                "llvm-cov",
                "--workspace",
                "--lcov",
                "--output-path",
                "target/lcov.info",
            ]),
            Self::Lint => {
                Self::LintClippy.run()?;
                Self::LintDocs.run()?;
                Self::LintFormatting.run()
            }
            Self::LintClippy => cargo(&[
                "clippy",
                "--all-targets",
                "--all-features",
                "--",
                "-D",
                "warnings",
            ]),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => cargo_nightly(&["fmt", "--all", "--check"]),
            Self::FixFormatting => cargo_nightly(&["fmt", "--all"]),
            Self::Test => {
                cargo(&["test", "--all-targets", "--all-features"])?;
                Self::TestDocs.run()
            }
            Self::TestCrate { krate } => cargo(&["test", "--package", krate.package()]),
            Self::TestDocs => cargo(&["test", "--doc", "--all-features"]),
        }
    }
}

/// Build rustdoc for every default workspace package with warnings denied.
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to read cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd!("cargo", "doc", "--no-deps", "--package", package.name.as_str())
            .env("RUSTDOCFLAGS", "-D warnings")
            .run_logged()
            .wrap_err_with(|| format!("docs failed for {}", package.name.as_str()))?;
    }
    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args).run_logged()?;
    Ok(())
}

fn cargo_nightly(args: &[&str]) -> Result<()> {
    // CARGO is set when running as a cargo subcommand and would pin the toolchain.
    cmd("cargo", args)
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_logged()?;
    Ok(())
}

/// Logs a `duct::Expression` before running it.
trait RunLogged {
    fn run_logged(&self) -> io::Result<Output>;
}

impl RunLogged for duct::Expression {
    fn run_logged(&self) -> io::Result<Output> {
        tracing::info!("running: {:?}", self);
        self.run()
            .inspect_err(|err| tracing::error!("command failed: {:?}: {err}", self))
    }
}

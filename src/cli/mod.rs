// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap and hands the run to
// Layer 2. This layer only routes and prints; it never
// computes.
//
//   question-chunker --input dump.json [--out ./data] [--chunk 1000]

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::PrepareArgs;

use crate::application::prepare_use_case::PrepareUseCase;

#[derive(Parser, Debug)]
#[command(
    name = "question-chunker",
    version,
    about = "Split a large exam-question JSON dump into static chunk files, a manifest and a facet lookup."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: PrepareArgs,
}

impl Cli {
    /// Run the transform and print the summary lines.
    pub fn run(self) -> Result<()> {
        let use_case = PrepareUseCase::new(self.args.into());
        let report   = use_case.execute()?;

        tracing::info!("Input detected as {}", report.shape);
        tracing::info!(
            "{} records read, {} dropped without an identifier",
            report.loaded,
            report.dropped
        );

        println!(
            "Wrote {} items across {} chunks into {}",
            report.count,
            report.chunks,
            report.out_dir.display()
        );
        println!("Done. Ship the whole output directory alongside the static site.");
        Ok(())
    }
}

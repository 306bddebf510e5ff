use anyhow::Result;
use colored::*;
use edgesift_core::{exec::SystemRunner, pipeline};
use tracing::error;

use crate::commands::RunArgs;
use crate::terminal::{print, spinner};

pub async fn run(args: RunArgs) -> Result<()> {
    let cfg = args.into_config();

    print::header("edge endpoint pipeline");
    spinner::set_stage("Working, external tools may take a while...");

    let outcome = pipeline::run(&cfg, &SystemRunner).await;
    spinner::finish();

    match outcome {
        Ok(summary) => {
            print::fat_separator();
            let ranked: ColoredString =
                format!("{} ranked endpoints", summary.ranked).bold().green();
            print::centerln(&format!(
                "Pipeline complete: {ranked} in {}",
                summary.output.display()
            ));
        }
        // Failure is reported on the console only; the process still
        // exits zero.
        Err(e) => error!("Pipeline aborted: {e:#}"),
    }

    print::end_of_program();
    Ok(())
}

use anyhow::{Context, Result};
use crgms::reduce;

use super::{read_inputs, read_substeps, resolve_outputs, write_outputs, write_substeps};
use crate::cli::TopArgs;
use crate::config::build_rank_config;
use crate::display::{Context as DisplayContext, Progress, print_input_summary, print_ranking};
use crate::util::convert::{direction_display_name, sort_key_display_name};

const TOTAL_STEPS: u8 = 4;

pub fn run_top(args: TopArgs, ctx: DisplayContext) -> Result<()> {
    let rank = build_rank_config(&args.rank, args.n)?;
    // Fail on a contradictory request before touching any input.
    rank.validate().context("Invalid top-N request")?;
    let output_specs = resolve_outputs(&args.io)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading inputs");
    let inputs = read_inputs(&args.io)?;
    progress.complete_step("Reading inputs", &read_substeps(&args.io, &inputs));

    progress.step("Reducing to charge microstates");
    let states = reduce(&inputs.samples, &inputs.conformers)
        .context("Charge microstate reduction failed")?;
    progress.complete_step(
        "Reducing to charge microstates",
        &[format!("{} distinct charge states", states.len())],
    );

    if ctx.interactive {
        print_input_summary(&inputs.conformers, &inputs.samples, &states);
    }

    progress.step("Selecting top charge states");
    let top = rank.select(&states).context("Top-N selection failed")?;
    let label = if rank.descending { "highest" } else { "lowest" };
    progress.complete_step(
        "Selecting top charge states",
        &[
            format!(
                "By {} ({})",
                sort_key_display_name(rank.key),
                direction_display_name(rank.descending)
            ),
            format!("Keep {} of {} ({} first)", top.len(), states.len(), label),
        ],
    );

    if ctx.interactive {
        print_ranking(&format!("Top {} Charge Microstates", top.len()), &top, &states);
    }

    progress.step("Writing report");
    write_outputs(&top, &output_specs)?;
    progress.complete_step("Writing report", &write_substeps(&output_specs));

    progress.finish();

    Ok(())
}

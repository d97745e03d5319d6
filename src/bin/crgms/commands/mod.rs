mod reduce;
mod top;

use reduce::run_reduce;
use top::run_top;

use anyhow::{Context, Result, anyhow, bail};
use crgms::io::{Format, read_conformers, read_microstates, write_report};
use crgms::{ChargeState, ConformerTable, Microstate};

use crate::cli::{Command, IoOptions};
use crate::display::Context as DisplayContext;
use crate::io::{
    OutputSpec, create_output, infer_output_format, open_file, open_input, stdin_is_tty,
};

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Reduce(args) => run_reduce(args, ctx),
        Command::Top(args) => run_top(args, ctx),
    }
}

/// Parsed conformer table and microstate samples.
struct Inputs {
    conformers: ConformerTable,
    samples: Vec<Microstate>,
}

fn read_inputs(io: &IoOptions) -> Result<Inputs> {
    if io.input.is_none() && stdin_is_tty() {
        bail!(
            "No microstate input specified and stdin is a terminal.\n\nUsage: crgms <COMMAND> -c head3.lst -i <MICROSTATES> or pipe data via stdin."
        );
    }

    let conformers = read_conformers(open_file(&io.conformers)?).with_context(|| {
        format!(
            "Failed to read conformer table: {}",
            io.conformers.display()
        )
    })?;

    let samples = read_microstates(open_input(io.input.as_deref())?)
        .context("Failed to read microstate table")?;

    Ok(Inputs {
        conformers,
        samples,
    })
}

fn read_substeps(io: &IoOptions, inputs: &Inputs) -> Vec<String> {
    let source = io
        .input
        .as_ref()
        .map(|p| file_name(p))
        .unwrap_or_else(|| "stdin".to_string());

    vec![
        format!(
            "Parse {} ({} conformers)",
            file_name(&io.conformers),
            inputs.conformers.len()
        ),
        format!("Parse {} ({} microstates)", source, inputs.samples.len()),
    ]
}

fn resolve_outputs(io: &IoOptions) -> Result<Vec<OutputSpec>> {
    if io.output.is_empty() {
        let format = io.output_format.map(Format::from).unwrap_or(Format::Text);
        return Ok(vec![OutputSpec { path: None, format }]);
    }

    let mut specs = Vec::with_capacity(io.output.len());

    let first = &io.output[0];
    let first_format = if let Some(fmt) = io.output_format {
        fmt.into()
    } else if let Some(fmt) = infer_output_format(first) {
        fmt
    } else {
        bail!(
            "Cannot infer format from '{}'. Use --outfmt to specify.",
            first.display()
        );
    };
    specs.push(OutputSpec {
        path: Some(first.clone()),
        format: first_format,
    });

    for path in &io.output[1..] {
        let format = infer_output_format(path).ok_or_else(|| {
            anyhow!(
                "Cannot infer format from '{}'. Use explicit extension.",
                path.display()
            )
        })?;
        specs.push(OutputSpec {
            path: Some(path.clone()),
            format,
        });
    }

    Ok(specs)
}

fn write_outputs(states: &[ChargeState], specs: &[OutputSpec]) -> Result<()> {
    for spec in specs {
        let writer = create_output(spec.path.as_deref())?;
        write_report(writer, states, spec.format).with_context(|| {
            format!(
                "Failed to write {} report to {}",
                spec.format,
                spec.display_path()
            )
        })?;
    }
    Ok(())
}

fn write_substeps(specs: &[OutputSpec]) -> Vec<String> {
    specs
        .iter()
        .map(|spec| {
            let target = spec
                .path
                .as_ref()
                .map(|p| file_name(p))
                .unwrap_or_else(|| "stdout".to_string());
            format!("Write {} report → {}", spec.format, target)
        })
        .collect()
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ReportFormat;
    use std::path::PathBuf;

    fn io_options(output: &[&str], output_format: Option<ReportFormat>) -> IoOptions {
        IoOptions {
            conformers: PathBuf::from("head3.lst"),
            input: None,
            output: output.iter().map(PathBuf::from).collect(),
            output_format,
            quiet: true,
            verbose: false,
        }
    }

    #[test]
    fn no_output_means_text_on_stdout() {
        let specs = resolve_outputs(&io_options(&[], None)).unwrap();
        assert_eq!(specs.len(), 1);
        assert!(specs[0].path.is_none());
        assert_eq!(specs[0].format, Format::Text);
    }

    #[test]
    fn outfmt_applies_to_first_output_only() {
        let specs =
            resolve_outputs(&io_options(&["ranked.out", "ranked.json"], Some(ReportFormat::Tsv)))
                .unwrap();
        assert_eq!(specs[0].format, Format::Tsv);
        assert_eq!(specs[1].format, Format::Json);
    }

    #[test]
    fn uninferable_extension_is_an_error() {
        assert!(resolve_outputs(&io_options(&["ranked.out"], None)).is_err());
        assert!(resolve_outputs(&io_options(&["a.tsv", "b.csv"], None)).is_err());
    }

    #[test]
    fn substeps_name_format_and_target() {
        let specs = vec![OutputSpec {
            path: Some(PathBuf::from("out/top.tsv")),
            format: Format::Tsv,
        }];
        assert_eq!(write_substeps(&specs), vec!["Write TSV report → top.tsv"]);
    }
}

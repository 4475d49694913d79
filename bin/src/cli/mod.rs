
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, builder::PossibleValuesParser};
use is_terminal::IsTerminal;
use simplelog::LevelFilter;
use strum::VariantNames;
use transcript::SortMode;
use transcript::report::ReportTheme;

use crate::app::{Options, Report};
use crate::extraction::{PdfiumTextSource, TextSource, text_lines};
use crate::output;

/// Calculate your grade average from a Ladok transcript.
#[derive(Debug, Parser)]
#[command(name = "ladok-average")]
struct Args {
    /// Path to the transcript PDF.
    #[arg(default_value = "Intyg.pdf")]
    input: PathBuf,

    /// Also write the personal info, courses and statistics as JSON to this path.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the personal info and courses tables, and more statistics.
    #[arg(short, long)]
    verbose: bool,

    /// Order of the courses table.
    #[arg(
        long,
        default_value = "date",
        value_parser = PossibleValuesParser::new(SortMode::VARIANTS.iter().copied()),
    )]
    sortby: String,

    /// Include courses graded pass-only ("G") in the courses and statistics.
    #[arg(long)]
    includeug: bool,

    /// Leave out the average grade.
    #[arg(long)]
    ignoreaverage: bool,

    /// Directory containing the Pdfium shared library. Defaults to the system library path.
    #[arg(long)]
    pdfium_library: Option<PathBuf>,

    /// Print tables without colors. Also the default when output is not a terminal.
    #[arg(long)]
    no_color: bool,

    /// Logging level.
    #[arg(long, default_value = "Warn")]
    log_level: LevelFilter,
}

impl Args {
    fn options(&self) -> Result<Options> {
        Ok(Options {
            verbose: self.verbose,
            sort_mode: SortMode::from_name(&self.sortby)?,
            include_pass_only: self.includeug,
            ignore_average: self.ignoreaverage,
        })
    }

    fn theme(&self) -> ReportTheme {
        if self.no_color || !std::io::stdout().is_terminal() {
            ReportTheme::plain()
        } else {
            ReportTheme::default()
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    simplelog::SimpleLogger::init(args.log_level, simplelog::Config::default())
        .with_context(|| "configuring logging")?;

    check_input(&args.input)?;
    let options = args.options()?;

    let source = PdfiumTextSource::bind(args.pdfium_library.as_deref())?;
    let report = read_report(&source, &args.input, &options)?;

    if let Some(output) = &args.output {
        output::write_json(output, &report.dump())?;
    }

    for table in report.render(&options, &args.theme())? {
        println!("{table}");
    }
    Ok(())
}

fn check_input(path: &Path) -> Result<()> {
    match path.extension() {
        Some(extension) if extension == "pdf" => Ok(()),
        _ => bail!("input {path:?} is not a .pdf file"),
    }
}

fn read_report<T>(source: &T, path: &Path, options: &Options) -> Result<Report>
where
    T: TextSource + ?Sized,
{
    let text = source.first_page_text(path)?;
    let lines = text_lines(&text);
    log::debug!("Read {} lines from {path:?}.", lines.len());
    Report::from_lines(&lines, options).with_context(|| format!("reading report from {path:?}"))
}

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use wmbatch::{App, BatchJob, FileFilter, NoticeKind, Placement, RunState, Shell};

#[derive(Parser, Debug)]
#[command(name = "wmbatch", version)]
struct Cli {
    /// Log decoder attempts and per-pair diagnostics.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Watermark every background with every watermark.
    Run(RunArgs),
    /// Run a JSON job file.
    Job(JobArgs),
    /// Print image dimensions.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Background image (repeatable).
    #[arg(long = "background", short = 'b', required = true)]
    backgrounds: Vec<PathBuf>,

    /// Watermark image (repeatable).
    #[arg(long = "watermark", short = 'w', required = true)]
    watermarks: Vec<PathBuf>,

    /// Output directory (created if missing).
    #[arg(long)]
    out: PathBuf,

    /// Watermark top offset in display pixels.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    top: i32,

    /// Watermark left offset in display pixels.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    left: i32,

    /// Watermark width in display pixels.
    #[arg(long)]
    width: i32,

    /// Watermark height in display pixels.
    #[arg(long)]
    height: i32,

    /// Display-to-actual scale factor.
    #[arg(long, default_value_t = 1.0)]
    rate: f64,
}

#[derive(Parser, Debug)]
struct JobArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Images to inspect.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Also print the file contents as base64.
    #[arg(long)]
    base64: bool,
}

/// Terminal stand-in for the picker dialogs: answers each request from the command line.
struct CliShell {
    picks: VecDeque<Vec<PathBuf>>,
    out_dir: Option<PathBuf>,
    last_percent: Option<u32>,
}

impl CliShell {
    fn new(backgrounds: Vec<PathBuf>, watermarks: Vec<PathBuf>, out_dir: PathBuf) -> Self {
        Self {
            picks: VecDeque::from([backgrounds, watermarks]),
            out_dir: Some(out_dir),
            last_percent: None,
        }
    }
}

impl Shell for CliShell {
    fn pick_files(&mut self, filter: &FileFilter) -> Vec<PathBuf> {
        let files = self.picks.pop_front().unwrap_or_default();
        for f in files.iter().filter(|f| !filter.matches(f)) {
            tracing::warn!(
                file = %f.display(),
                filter = filter.display_name,
                "file does not match the picker filter"
            );
        }
        files
    }

    fn pick_directory(&mut self) -> Option<PathBuf> {
        self.out_dir.take()
    }

    fn emit_progress(&mut self, percent: u32) {
        self.last_percent = Some(percent);
        eprintln!("progress: {percent}%");
    }

    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str) {
        let tag = match kind {
            NoticeKind::Info => "info",
            NoticeKind::Error => "error",
        };
        eprintln!("[{tag}] {title}: {message}");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Job(args) => cmd_job(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let placement = Placement::new(args.top, args.left, args.width, args.height)
        .with_resize_rate(args.rate);
    run_batch(args.backgrounds, args.watermarks, args.out, placement)
}

fn cmd_job(args: JobArgs) -> anyhow::Result<()> {
    let job = BatchJob::from_path(&args.in_path)
        .with_context(|| format!("load job '{}'", args.in_path.display()))?;
    run_batch(job.backgrounds, job.watermarks, job.out_dir, job.placement)
}

fn run_batch(
    backgrounds: Vec<PathBuf>,
    watermarks: Vec<PathBuf>,
    out: PathBuf,
    placement: Placement,
) -> anyhow::Result<()> {
    let mut app = App::new(CliShell::new(backgrounds, watermarks, out));
    app.select_backgrounds();
    app.select_watermarks();
    let out_dir = app
        .choose_output_dir()
        .context("no output directory selected")?;

    match app.start(&out_dir, placement) {
        RunState::Completed => {
            eprintln!("wrote {}", out_dir.display());
            Ok(())
        }
        state => {
            let last = app.shell().last_percent.unwrap_or(0);
            anyhow::bail!("batch did not complete (state {state:?}, progress {last}%)")
        }
    }
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    for file in &args.files {
        inspect_one(file, args.base64)?;
    }
    Ok(())
}

fn inspect_one(file: &Path, with_base64: bool) -> anyhow::Result<()> {
    if with_base64 {
        let img = wmbatch::preview::preview_image(file)
            .with_context(|| format!("inspect '{}'", file.display()))?;
        println!("{}\t{}x{}\t{}", file.display(), img.width, img.height, img.data_base64);
    } else {
        let (w, h) = wmbatch::codec::decode_dimensions(file)
            .with_context(|| format!("inspect '{}'", file.display()))?;
        println!("{}\t{w}x{h}", file.display());
    }
    Ok(())
}

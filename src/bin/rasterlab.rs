use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rasterlab::{Engine, EngineOpts, Histogram, Outcome, Session};

#[derive(Parser, Debug)]
#[command(name = "rasterlab", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a script of load/save/transform statements.
    Run(RunArgs),
    /// Read statements from stdin until `quit` or end of input.
    Shell(ShellArgs),
    /// Load one image, apply a single operation and save the result.
    Apply(ApplyArgs),
    /// Print the histogram of an image as JSON.
    Histogram(HistogramArgs),
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// Engine options JSON (`parallel`, `threads`, `mosaic_seed`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Split output rows across a rayon thread pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Default random seed for mosaic.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Script file.
    script: PathBuf,

    /// Directory relative paths resolve against. Defaults to the script's directory.
    #[arg(long)]
    root: Option<PathBuf>,

    #[command(flatten)]
    engine: EngineArgs,
}

#[derive(Parser, Debug)]
struct ShellArgs {
    /// Directory relative paths resolve against.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[command(flatten)]
    engine: EngineArgs,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Mask image; the operation applies where it is black.
    #[arg(long)]
    mask: Option<PathBuf>,

    /// Output image. The format follows the extension.
    #[arg(long)]
    out: PathBuf,

    /// Operation and its parameters, e.g. "brighten 20" or "downscale 50 50".
    #[arg(long)]
    op: String,

    #[command(flatten)]
    engine: EngineArgs,
}

#[derive(Parser, Debug)]
struct HistogramArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Shell(args) => cmd_shell(args),
        Command::Apply(args) => cmd_apply(args),
        Command::Histogram(args) => cmd_histogram(args),
    }
}

fn build_engine(args: &EngineArgs) -> anyhow::Result<Engine> {
    let mut opts = match &args.config {
        Some(path) => EngineOpts::from_path(path)?,
        None => EngineOpts::default(),
    };
    opts.parallel |= args.parallel;
    if args.threads.is_some() {
        opts.threads = args.threads;
    }
    if args.seed.is_some() {
        opts.mosaic_seed = args.seed;
    }
    Ok(Engine::new(opts)?)
}

fn print_histogram(h: &Histogram) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, h).context("write histogram json")?;
    writeln!(out).context("write histogram json")?;
    Ok(())
}

fn report(outcome: &Outcome) -> anyhow::Result<()> {
    match outcome {
        Outcome::Saved { path } => eprintln!("wrote {}", path.display()),
        Outcome::Histogram(h) => print_histogram(h)?,
        Outcome::Loaded { .. } | Outcome::Applied { .. } | Outcome::Quit => {}
    }
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let engine = build_engine(&args.engine)?;
    let root = args.root.clone().unwrap_or_else(|| {
        args.script
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf()
    });

    let f = std::fs::File::open(&args.script)
        .with_context(|| format!("open script '{}'", args.script.display()))?;
    let mut sess = Session::new(engine, root);
    let outcomes = sess
        .run_script(BufReader::new(f))
        .with_context(|| format!("run script '{}'", args.script.display()))?;
    for outcome in &outcomes {
        report(outcome)?;
    }
    Ok(())
}

fn cmd_shell(args: ShellArgs) -> anyhow::Result<()> {
    let engine = build_engine(&args.engine)?;
    let mut sess = Session::new(engine, args.root);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("read stdin")?;
        match sess.run_line(&line) {
            Ok(Some(Outcome::Quit)) => break,
            Ok(Some(outcome)) => report(&outcome)?,
            Ok(None) => {}
            // the shell keeps going; the failed statement changed nothing
            Err(e) => eprintln!("error: {e}"),
        }
    }
    Ok(())
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let engine = build_engine(&args.engine)?;

    let tokens: Vec<&str> = args.op.split_whitespace().collect();
    let (name, params) = tokens
        .split_first()
        .context("--op must name an operation")?;
    let op = rasterlab::parse_operation(name, params)?;

    let src = rasterlab::load_image(&args.in_path)?;
    let mask = args
        .mask
        .as_deref()
        .map(rasterlab::load_image)
        .transpose()?;
    let out = engine.apply(&op, &src, mask.as_ref())?;
    rasterlab::save_image(&args.out, &out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_histogram(args: HistogramArgs) -> anyhow::Result<()> {
    let img = rasterlab::load_image(&args.in_path)?;
    print_histogram(&rasterlab::histogram(&img))
}

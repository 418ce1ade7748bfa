use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use cloudinary::{
    ApiResult, Configuration, ExplicitParams, ExplicitResult, Params, UpdateTransformParams,
};

#[derive(Parser, Debug)]
#[command(name = "cldparams", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render request parameters from a JSON description.
    Params(ParamsArgs),
    /// Decode an explicit response document and print a summary.
    Explicit(ExplicitArgs),
    /// Show the configuration read from `CLOUDINARY_URL` (secrets redacted).
    Config,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RequestKind {
    UpdateTransform,
    Explicit,
}

#[derive(Parser, Debug)]
struct ParamsArgs {
    /// Request type described by the input.
    #[arg(long, value_enum)]
    kind: RequestKind,

    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print the canonical signing string instead of the JSON map.
    #[arg(long, default_value_t = false)]
    signing_string: bool,
}

#[derive(Parser, Debug)]
struct ExplicitArgs {
    /// Input response JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Params(args) => cmd_params(args),
        Command::Explicit(args) => cmd_explicit(args),
        Command::Config => cmd_config(),
    }
}

fn open_json(path: &Path) -> anyhow::Result<BufReader<File>> {
    let f = File::open(path).with_context(|| format!("open '{}'", path.display()))?;
    Ok(BufReader::new(f))
}

fn cmd_params(args: ParamsArgs) -> anyhow::Result<()> {
    let r = open_json(&args.in_path)?;
    let map = match args.kind {
        RequestKind::UpdateTransform => {
            let params: UpdateTransformParams = serde_json::from_reader(r)
                .with_context(|| format!("parse '{}'", args.in_path.display()))?;
            params.to_param_map()?
        }
        RequestKind::Explicit => {
            let params: ExplicitParams = serde_json::from_reader(r)
                .with_context(|| format!("parse '{}'", args.in_path.display()))?;
            params.to_param_map()?
        }
    };

    if args.signing_string {
        println!("{}", map.to_signing_string());
    } else {
        println!("{}", serde_json::to_string_pretty(&map)?);
    }
    Ok(())
}

fn cmd_explicit(args: ExplicitArgs) -> anyhow::Result<()> {
    let result = ExplicitResult::from_reader(open_json(&args.in_path)?)
        .with_context(|| format!("decode '{}'", args.in_path.display()))?;

    println!("public_id: {}", result.upload.public_id);
    println!("status: {}", result.status);
    println!("size: {}x{}", result.width, result.height);
    println!("eager: {}", result.eager.len());
    for list in &result.responsive_breakpoints {
        let widths: Vec<String> = list.breakpoints.iter().map(|b| b.width.to_string()).collect();
        println!("breakpoints [{}]: {}", list.transformation, widths.join(","));
    }
    Ok(())
}

fn cmd_config() -> anyhow::Result<()> {
    let cfg = Configuration::from_env()?;
    println!("{cfg:#?}");
    Ok(())
}

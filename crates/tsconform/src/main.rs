use anyhow::{Context, bail};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::filter::EnvFilter;

use tsconform::{Checker, RejectionPolicy, Verdict};

#[derive(Parser, Debug)]
#[command(name = "tsconform")]
#[command(about = "Type-check a snippet or project and report accept/reject")]
struct Args {
    /// Snippet file to check ("-" for stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Inline source to check instead of a file
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Check a project config (tsconfig.json) instead of a snippet
    #[arg(short, long, conflicts_with_all = ["file", "eval"])]
    project: Option<PathBuf>,

    /// Reject on any error-stream output even when the exit code is 0
    /// (always on in project mode)
    #[arg(long)]
    strict_stderr: bool,

    /// Checker executable to use instead of discovering ts-node/tsc
    #[arg(long)]
    binary: Option<PathBuf>,

    /// Kill the checker after this many seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Output the verdict as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut checker = Checker::new();
    if args.strict_stderr || args.project.is_some() {
        checker = checker.with_policy(RejectionPolicy::ExitStatusOrErrorOutput);
    }
    if let Some(binary) = &args.binary {
        checker = checker.with_binary(binary);
    }
    if let Some(secs) = args.timeout {
        checker = checker.with_timeout(Duration::from_secs(secs));
    }

    let verdict = if let Some(tsconfig) = &args.project {
        checker.check_project(tsconfig).await
    } else {
        let source = read_source(&args)?;
        checker.check_source(&source).await
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    }

    match verdict {
        Verdict::Accepted => {
            if !args.json {
                println!("accepted");
            }
            Ok(())
        }
        Verdict::Rejected(rejection) => {
            if !args.json {
                eprintln!("{rejection}");
            }
            std::process::exit(1);
        }
    }
}

fn read_source(args: &Args) -> anyhow::Result<String> {
    if let Some(source) = &args.eval {
        return Ok(source.clone());
    }

    match &args.file {
        Some(path) if path.as_os_str() == "-" => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read snippet from stdin")?;
            Ok(source)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snippet from {}", path.display())),
        None => bail!("nothing to check: pass a FILE, --eval, or --project"),
    }
}

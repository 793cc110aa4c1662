use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use tracing::debug;

use hashchain_crypto::{verify, HashAlgorithm, HashChain};
use hashchain_types::encoding;

use crate::cli::*;

// Exit codes: 0 success / verified, 1 verification mismatch, 2 malformed
// input (unknown algorithm, bad length, bad base64). clap's own usage
// errors also exit with 2.
const EXIT_MISMATCH: u8 = 1;
const EXIT_BAD_INPUT: u8 = 2;

pub fn run_command(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Create(args) => cmd_create(args, cli.format),
        Command::Verify(args) => cmd_verify(args, cli.format),
        Command::Algorithms => cmd_algorithms(cli.format),
    };
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(EXIT_BAD_INPUT)
        }
    }
}

fn cmd_create(args: CreateArgs, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let algorithm: HashAlgorithm = args.algorithm.parse()?;
    debug!(%algorithm, length = args.length, tip_only = args.tip_only, "building chain");

    if args.tip_only {
        let tip = HashChain::tip_of(args.seed.as_bytes(), algorithm, args.length)?;
        match format {
            OutputFormat::Text => println!("{}", encoding::encode(&tip)),
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({
                    "algorithm": algorithm.name(),
                    "length": args.length,
                    "tip": encoding::encode(&tip),
                })
            ),
        }
        return Ok(ExitCode::SUCCESS);
    }

    let chain = HashChain::build(args.seed.as_bytes(), algorithm, args.length)?;
    match format {
        OutputFormat::Text => {
            for link in chain.iter() {
                println!("{}", encoding::encode(link));
            }
        }
        OutputFormat::Json => {
            let links: Vec<String> = chain.iter().map(encoding::encode).collect();
            println!(
                "{}",
                serde_json::json!({
                    "algorithm": algorithm.name(),
                    "length": chain.len(),
                    "links": links,
                })
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_verify(args: VerifyArgs, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let algorithm: HashAlgorithm = args.algorithm.parse()?;
    let expected = algorithm.output_len();
    let candidate = encoding::decode(&args.candidate, expected)
        .with_context(|| format!("candidate digest {:?}", args.candidate))?;
    let tip = encoding::decode(&args.tip, expected)
        .with_context(|| format!("tip digest {:?}", args.tip))?;

    let verified = verify(&candidate, &tip, algorithm)?;
    debug!(%algorithm, verified, "one-step preimage check");

    match format {
        OutputFormat::Text => {
            if verified {
                println!("{}", "success".green());
            } else {
                println!("{}", "failure".red());
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "algorithm": algorithm.name(),
                "verified": verified,
            })
        ),
    }

    Ok(if verified {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_MISMATCH)
    })
}

fn cmd_algorithms(format: OutputFormat) -> anyhow::Result<ExitCode> {
    match format {
        OutputFormat::Text => {
            for algo in HashAlgorithm::ALL {
                println!("{:<8} {:>2} bytes", algo.name().bold(), algo.output_len());
            }
        }
        OutputFormat::Json => {
            let list: Vec<_> = HashAlgorithm::ALL
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "name": a.name(),
                        "digest_size": a.output_len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}

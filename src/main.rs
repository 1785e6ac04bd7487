use anyhow::Result;
use clap::{Arg, Command};

use pcdx::commands;

fn build_cli() -> Command {
    Command::new("pcdx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Hardware telemetry and diagnostics for the local machine")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("info")
                .about("Show a hardware and OS inventory")
                .arg(
                    Arg::new("cpu")
                        .long("cpu")
                        .help("Show only the CPU section")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("gpu")
                        .long("gpu")
                        .help("Show only the GPU section")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("memory")
                        .long("memory")
                        .alias("ram")
                        .help("Show only the memory section")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("board")
                        .long("board")
                        .help("Show only the motherboard section")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("network")
                        .long("network")
                        .help("Show only the network section")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("storage")
                        .long("storage")
                        .help("Show only the storage section")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("os")
                        .long("os")
                        .help("Show only the operating system section")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the full report as JSON")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("diagnose")
                .about("Run a one-shot diagnostic with alerts and recommendations")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the diagnostic report as JSON")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("export")
                        .long("export")
                        .value_name("FORMAT")
                        .help("Export the report (txt, html, or all)")
                        .value_parser(["txt", "html", "all"]),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("DIR")
                        .help("Directory for logs and exported reports")
                        .default_value("."),
                ),
        )
        .subcommand(
            Command::new("monitor")
                .about("Run a live monitoring session")
                .arg(
                    Arg::new("interval")
                        .short('i')
                        .long("interval")
                        .value_name("SECONDS")
                        .help("Seconds between samples")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("2"),
                )
                .arg(
                    Arg::new("duration")
                        .short('d')
                        .long("duration")
                        .value_name("MINUTES")
                        .help("Session length in minutes (0 = run until stopped)")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("5"),
                )
                .arg(
                    Arg::new("plain")
                        .long("plain")
                        .help("Print samples as console lines instead of the dashboard")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("csv")
                        .long("csv")
                        .value_name("FILE")
                        .help("Export the recorded series as CSV when the session ends"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("DIR")
                        .help("Directory for the session log")
                        .default_value("."),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .index(1),
                ),
        )
}

fn main() -> Result<()> {
    pcdx::init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        println!("pcdx version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match matches.subcommand() {
        Some(("info", sub_matches)) => commands::info(sub_matches)?,
        Some(("diagnose", sub_matches)) => commands::diagnose(sub_matches)?,
        Some(("monitor", sub_matches)) => commands::monitor(sub_matches)?,
        Some(("completions", sub_matches)) => {
            let mut cli = build_cli();
            commands::completions::execute(sub_matches, &mut cli)?;
        }
        _ => {
            println!("Welcome to pcdx!");
            println!("Use 'pcdx --help' for more information.");
        }
    }

    Ok(())
}

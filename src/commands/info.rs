use anyhow::Result;
use clap::ArgMatches;

use crate::core::probe;
use crate::ui::system_formatters::{self, DisplayFilter};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let json_output = matches.get_flag("json");

    if !json_output {
        println!("Collecting system information...");
    }

    let report = probe::collect_system_report();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Parse filter flags
    let show_cpu = matches.get_flag("cpu");
    let show_gpu = matches.get_flag("gpu");
    let show_memory = matches.get_flag("memory");
    let show_board = matches.get_flag("board");
    let show_network = matches.get_flag("network");
    let show_storage = matches.get_flag("storage");
    let show_os = matches.get_flag("os");

    // If no flags are set, show everything
    let filter = if !show_cpu
        && !show_gpu
        && !show_memory
        && !show_board
        && !show_network
        && !show_storage
        && !show_os
    {
        DisplayFilter::all()
    } else {
        DisplayFilter {
            cpu: show_cpu,
            gpu: show_gpu,
            memory: show_memory,
            board: show_board,
            network: show_network,
            storage: show_storage,
            os: show_os,
        }
    };

    system_formatters::print_system_report(&report, &filter);

    Ok(())
}

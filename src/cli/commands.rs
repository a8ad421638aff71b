use std::fs;
use std::io;
use std::path::Path;

use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::ScanConfig;
use crate::domain::builder::scan_topics;
use crate::generate_index;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Generate { root }) => _generate(root),
        Some(Commands::Print { root }) => _print(root),
        Some(Commands::Tree { root }) => _tree(root),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell, &mut Cli::command());
            Ok(())
        }
        // Bare invocation regenerates the index in the current directory
        None => _generate(Path::new(".")),
    }
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

#[instrument]
fn _generate(root: &Path) -> CliResult<()> {
    debug!("root: {:?}", root);
    let config = ScanConfig::default();

    // Assemble fully in memory first; the index file is only touched
    // once the whole scan has succeeded.
    let index = generate_index(root, &config)?;

    let output_path = root.join(&config.output_name);
    fs::write(&output_path, &index).map_err(|source| CliError::WriteIndex {
        path: output_path.clone(),
        source,
    })?;

    output::success(&format!("{} updated", config.output_name));
    Ok(())
}

#[instrument]
fn _print(root: &Path) -> CliResult<()> {
    debug!("root: {:?}", root);
    let config = ScanConfig::default();
    let index = generate_index(root, &config)?;
    print!("{}", index);
    Ok(())
}

#[instrument]
fn _tree(root: &Path) -> CliResult<()> {
    debug!("root: {:?}", root);
    let config = ScanConfig::default();
    let topics = scan_topics(root, &config)?;

    debug!("found {} topics", topics.len());
    for (name, node) in &topics {
        output::info(&node.to_display_tree(name));
        output::info(&format!("{} documents\n", node.document_count()));
    }
    Ok(())
}

//! The configure flow: read the annotated template, collect answers,
//! write the rendered .env document.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::process;

use envsetup_core::declarations;
use envsetup_core::questions::build_questions;
use envsetup_core::render::render;
use tracing::debug;

use crate::Cli;
use crate::prompt::{self, PromptOptions, parse_var_args};

pub fn run(cli: &Cli) {
    let content = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", cli.input.display());
            process::exit(1);
        }
    };

    let parsed = match declarations::parse(&content) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    debug!(variables = parsed.variables.len(), input = %cli.input.display(), "parsed template");

    let questions = build_questions(&parsed.variables);
    let provided = parse_var_args(&cli.vars);
    let options = PromptOptions { batch_mode: cli.batch };

    if !cli.batch && io::stdin().is_terminal() && !questions.is_empty() {
        eprintln!("Configuring your environment. Please fill out the following info");
        eprintln!("To skip any field press Ctrl+C");
    }

    let answers = match prompt::collect_answers(&questions, &provided, &options) {
        Ok(answers) => answers,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let output = render(&parsed, &answers);

    if cli.output.as_os_str() == "-" {
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout.write_all(output.as_bytes()) {
            eprintln!("Failed to write to stdout: {e}");
            process::exit(1);
        }
    } else {
        if let Err(e) = fs::write(&cli.output, &output) {
            eprintln!("Failed to write {}: {e}", cli.output.display());
            process::exit(1);
        }
        eprintln!("Environment has been configured in {}", cli.output.display());
    }
}

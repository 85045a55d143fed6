use anyhow::Result;
use clap::Parser;
use std::env;
use std::process::ExitCode;

mod answers;
mod cli;
mod generate;
mod install;
mod manifest;
mod pm;
mod prompt;
mod ui;
mod util;

use cli::{Cli, GLOSSARY_TEXT, USAGE_TEXT};

const PACKAGE: &str = "auth-em-form";

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("[authform] ERROR: {e}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<i32> {
    let log = ui::Logger;
    let cli = Cli::parse();

    if cli.help {
        print!("{USAGE_TEXT}");
        println!();
        print!("{GLOSSARY_TEXT}");
        return Ok(0);
    }

    let mut prompter = prompt::Prompter::stdin();

    let (manager, workspace) = answers::collect_package_manager(&mut prompter)?;

    let cwd = env::current_dir()?;
    let code = install::install_package(&log, &cwd, PACKAGE, manager, workspace)?;
    if code != 0 {
        return Ok(code);
    }

    let answers = answers::collect(&mut prompter)?;
    generate::generate(&log, &answers)?;

    Ok(0)
}

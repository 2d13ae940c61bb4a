use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use design_folder::check_design_folder;
use generate_prompts::{
    generate_prompts, render_summary, GeneratorConfig, PromptParameters, PARAMETERS_HELP,
};

fn cli() -> Command {
    Command::new("generate_prompts")
        .version("0.1.0")
        .about("Generates code-completion prompts from an annotated HDL design folder")
        .arg(
            Arg::new("metadata")
                .value_name("SRC_YAML")
                .help("Path to the design folder's src.yaml")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .help("Directory receiving the prompts and per-unit folders")
                .required(true),
        )
        .arg(
            Arg::new("parameters")
                .value_name("KEY=VALUE")
                .help("Extra parameters, see below")
                .num_args(0..),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail when a unit's markers are missing instead of warning")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .after_help(PARAMETERS_HELP)
}

fn main() -> Result<()> {
    let matches = match cli().try_get_matches() {
        Ok(m) => m,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                // Usage errors share the exit code of every other failure.
                let _ = err.print();
                eprintln!("{}", PARAMETERS_HELP);
                std::process::exit(1);
            }
        },
    };

    let verbose = matches.get_flag("verbose");
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" }),
    )
    .init();

    let parameters = PromptParameters::parse(
        matches
            .get_many::<String>("parameters")
            .unwrap_or_default(),
    )?;

    let config = GeneratorConfig {
        metadata_path: PathBuf::from(
            matches
                .get_one::<String>("metadata")
                .expect("required by clap"),
        ),
        output_root: PathBuf::from(
            matches
                .get_one::<String>("output")
                .expect("required by clap"),
        ),
        parameters,
        strict: matches.get_flag("strict"),
    };
    log::debug!("{:?}", config);

    if let Err(err) = check_design_folder(config.design_dir()) {
        for line in err.report_lines() {
            println!("{}", line);
        }
        println!("Terminating due to an error. For more information, refer to the documentation in the GitHub repo. ");
        std::process::exit(1);
    }
    println!("Found all required files, proceeding...");

    let prompts = generate_prompts(&config)?;
    print!("{}", render_summary(&config.output_root, &prompts));
    Ok(())
}

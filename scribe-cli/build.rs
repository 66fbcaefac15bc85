use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats registered by FormatRegistry::with_defaults.
// We need to duplicate this here since build scripts can't access the library.
const AVAILABLE_FORMATS: &[&str] = &["html", "bbcode"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let convert = Command::new("convert")
        .about("Render a document tree into an output format")
        .arg(
            Arg::new("input")
                .help("Input document tree (JSON)")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Target format")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file or directory")
                .value_hint(ValueHint::AnyPath),
        );

    let mut cmd = Command::new("scribe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export structured document trees to HTML and BBcode")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a scribe.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(convert);

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "scribe", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "scribe", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "scribe", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}

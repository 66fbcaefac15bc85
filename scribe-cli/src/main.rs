// Command-line interface for scribe
//
// This binary exports parsed document trees (JSON, as produced by the document parser) to a
// target markup dialect. The rendering itself lives in the scribe-babel crate; this binary only
// reads files, layers configuration and writes the result.
//
// Usage:
//  scribe <tree.json> [--to <format>] [-o <path>]          - Convert (default command)
//  scribe convert <tree.json> [--to <format>] [-o <path>]  - Same as above (explicit)
//  scribe --list-formats                                   - List available formats
//
// Without --to, the format is detected from the -o file extension, falling back to
// `convert.default_format` in the configuration.
// If -o names an existing directory, the output is written there as <input-stem>.<extension>.
//
// Extra Parameters:
//
// Export options can be overridden using --extra-<parameter-name> [value].
// The CLI layer strips the "extra-" prefix and applies the value over the loaded configuration.
// Example:
//  scribe notes.json --to bbcode --extra-visible-only --extra-extension txt -o out/

use clap::{Arg, ArgAction, Command, ValueHint};
use scribe_babel::{output_extension, read_tree, ExportOptions, FormatRegistry};
use scribe_config::{Loader, ScribeConfig};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            // A following argument is the value unless it is another flag
            match args.get(i + 1) {
                Some(next) if !next.starts_with('-') => {
                    extra_params.insert(key.to_string(), next.clone());
                    i += 2;
                }
                _ => {
                    extra_params.insert(key.to_string(), "true".to_string());
                    i += 1;
                }
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("scribe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export structured document trees to HTML and BBcode")
        .long_about(
            "scribe renders parsed document trees into a target markup dialect.\n\n\
            Commands:\n  \
            - convert: Render a tree (JSON) into a format (default command)\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override export options:\n  \
            body-only, visible-only, extension.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            scribe post.json                          # Default format (html) to stdout\n  \
            scribe post.json --to bbcode              # BBcode to stdout\n  \
            scribe post.json --to html -o post.html   # Write to a file\n  \
            scribe post.json --to bbcode -o out/      # Write out/post.bbcode"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a scribe.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a document tree into an output format (default command)")
                .long_about(
                    "Render a parsed document tree into an output format.\n\n\
                    Supported formats:\n  \
                    - html:   HTML fragment for blog engines (.html)\n  \
                    - bbcode: Forum BBcode (.bbcode)\n\n\
                    Output goes to stdout by default, or use -o to specify a file or directory.\n\n\
                    Examples:\n  \
                    scribe convert post.json --to bbcode          # BBcode to stdout\n  \
                    scribe convert post.json -o post.bb           # BBcode, from the extension\n  \
                    scribe post.json --to bbcode                  # 'convert' is optional"
                )
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
                        .help("Target format (detected from -o, else convert.default_format)")
                        .long_help(
                            "Target format to render.\n\n\
                            Available formats: html, bbcode\n\
                            Use the format name, not the file extension."
                        )
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file or directory (defaults to stdout)")
                        .long_help(
                            "Path to write the rendered output.\n\n\
                            If not specified, output is written to stdout.\n\
                            If the path is an existing directory, the file is named after\n\
                            the input with the format's extension."
                        )
                        .value_hint(ValueHint::AnyPath),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that is neither a flag nor a subcommand is the input file
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "help"
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    if let Some(key) = extra_params.keys().min() {
        eprintln!("Unknown extra parameter '--extra-{key}'");
        std::process::exit(1);
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                eprintln!("Error: an input file is required");
                std::process::exit(1);
            };
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let to = match sub_matches.get_one::<String>("to") {
                Some(to) => to.clone(),
                None => infer_target_format(output, &config),
            };
            handle_convert_command(input, &to, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so they never mix with converted output on stdout.
/// --verbose enables INFO (DEBUG for the engine), otherwise RUST_LOG applies.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info,scribe_babel=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Without --to, a file named by -o picks the format from its extension;
/// otherwise `convert.default_format` applies.
fn infer_target_format(output: Option<&str>, config: &ScribeConfig) -> String {
    let detected = output
        .filter(|path| !Path::new(path).is_dir())
        .and_then(|path| FormatRegistry::default().detect_format_from_filename(path));
    match detected {
        Some(format) => {
            debug!(format, "format detected from output filename");
            format
        }
        None => config.convert.default_format.clone(),
    }
}

/// Handle the convert command
fn handle_convert_command(input: &str, to: &str, output: Option<&str>, config: &ScribeConfig) {
    let registry = FormatRegistry::default();

    let format = registry.get(to).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let tree = read_tree(&source).unwrap_or_else(|e| {
        eprintln!("Error reading document tree '{input}': {e}");
        std::process::exit(1);
    });

    let options = ExportOptions::from(&config.export);
    info!(input, format = to, "converting");
    debug!(?options, "export options");

    let text = format.serialize(&tree, &options).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            let extension = output_extension(&options, format);
            let target = resolve_output_path(Path::new(path), Path::new(input), &extension);
            fs::write(&target, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{}': {e}", target.display());
                std::process::exit(1);
            });
            info!(path = %target.display(), "wrote output");
        }
        None => {
            print!("{text}");
        }
    }
}

/// An existing directory receives `<input-stem>.<extension>`; any other path is used as is.
fn resolve_output_path(output: &Path, input: &Path, extension: &str) -> PathBuf {
    if !output.is_dir() {
        return output.to_path_buf();
    }
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output.join(format!("{stem}.{extension}"))
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let extensions = format.file_extensions().join(", ");
            println!("  {name:<8} {} ({extensions})", format.description());
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> ScribeConfig {
    let loader = Loader::new().with_optional_file("scribe.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut ScribeConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["body-only", "body_only"]) {
        config.export.body_only = parse_bool_arg("body-only", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["visible-only", "visible_only"]) {
        config.export.visible_only = parse_bool_arg("visible-only", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["async", "asynchronous"]) {
        config.export.asynchronous = parse_bool_arg("async", &raw);
    }
    if let Some(extension) = take_override(extra_params, &["extension", "ext"]) {
        config.export.extension = Some(extension);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

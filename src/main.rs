//! Form Canvas CLI
//!
//! Usage:
//!   form-canvas [OPTIONS] [SESSION]
//!
//! Options:
//!   -c, --config <FILE>      Builder defaults (TOML format)
//!   -f, --format <FORMAT>    Output format: outline (default) or toml
//!   -d, --debug              Log every applied event to stderr
//!   -p, --palette            List the palette templates
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

use form_canvas::{render_outline, replay_with_config, BuilderConfig, Editor};

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Indented outline of sections, rows and fields
    Outline,
    /// The form tree serialized as TOML
    Toml,
}

#[derive(Parser)]
#[command(name = "form-canvas")]
#[command(about = "Replay form-builder sessions and print the resulting form")]
struct Cli {
    /// Session file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Builder defaults file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "outline")]
    format: Format,

    /// Debug mode: log every applied event
    #[arg(short, long)]
    debug: bool,

    /// List the palette templates
    #[arg(short, long)]
    palette: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .init();

    let config = match &cli.config {
        Some(path) => match BuilderConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => BuilderConfig::default(),
    };

    if cli.palette {
        print_palette(&config);
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut editor = match replay_with_config(&source, &config) {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };

    for notice in editor.take_notices() {
        eprintln!("notice: {}", notice);
    }

    match cli.format {
        Format::Outline => print!("{}", render_outline(&editor)),
        Format::Toml => match toml::to_string(editor.form()) {
            Ok(text) => print!("{}", text),
            Err(e) => {
                eprintln!("Error serializing form: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn print_palette(config: &BuilderConfig) {
    let editor = Editor::with_config(config);
    for (index, template) in editor.store().palette().templates().iter().enumerate() {
        println!("{:>2}  {:<9} {}", index, template.field_type(), template.label);
    }
}

fn print_intro() {
    println!(
        r#"Form Canvas - replay form-builder sessions

USAGE:
    form-canvas [OPTIONS] [SESSION]
    cat session.toml | form-canvas

OPTIONS:
    -c, --config     Builder defaults (TOML file)
    -f, --format     outline (default) or toml
    -d, --debug      Log every applied event
    -p, --palette    List the palette templates
    -h, --help       Print help

SESSION FORMAT:
    [[event]]
    type = "drop"
    from = "availableFields"
    to = "row-0-0"
    from_index = 1
    to_index = 0

    [[event]]
    type = "click"
    target = "field-0-0-0"

    [[event]]
    type = "set_label"
    label = "Full name"

EVENTS:
    drop                  from/to: availableFields, formBuilder, row-S-R
    click                 target: section-S, field-S-R-F, inspector, outside
    set_title             title of the active section
    set_label, set_placeholder, set_font_size, set_appearance
    set_option, add_option, remove_option, set_col_span
    set_global_font_size, delete_field, delete_section"#
    );
}

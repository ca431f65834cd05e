use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use reswrap_cli::{
    BuildOptions, GenerateOptions, PropertyOverrides, logging::init_logging, run_build_command,
    run_generate_command, tree_json,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log output (-v info, -vv debug). RUST_LOG overrides it.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate wrappers for every default-language .resw file in a project.
    Build {
        /// Project root to scan
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// Directory the generated .g.cs files are written to
        #[arg(short, long)]
        out_dir: PathBuf,

        /// Glob selecting resource files, relative to the project root (repeatable)
        #[arg(long = "include")]
        includes: Vec<String>,

        /// Build property file (defaults to reswrap.toml in the project root)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Namespace of the generated classes
        #[arg(long)]
        namespace: Option<String>,

        /// Default language whose documents are wrapped
        #[arg(long)]
        language: Option<String>,

        /// Nullable setting of the consuming project (enable, disable, ...)
        #[arg(long)]
        nullable: Option<String>,
    },

    /// Generate the wrapper for a single .resw file.
    Generate {
        /// The .resw file to process
        #[arg(short, long)]
        input: PathBuf,

        /// Resource map and root class name (defaults to the file's logical name)
        #[arg(long)]
        name: Option<String>,

        /// Namespace of the generated classes
        #[arg(long)]
        namespace: Option<String>,

        /// Nullable setting of the consuming project (enable, disable, ...)
        #[arg(long)]
        nullable: Option<String>,

        /// Language qualifier stripped when deriving the name
        #[arg(long)]
        language: Option<String>,

        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the resource tree of a .resw file as JSON.
    Tree {
        /// The .resw file to inspect
        #[arg(short, long)]
        input: PathBuf,

        /// Resource map name (defaults to the file's logical name)
        #[arg(long)]
        name: Option<String>,

        /// Language qualifier stripped when deriving the name
        #[arg(long)]
        language: Option<String>,
    },
}

fn run(commands: Commands) -> Result<(), String> {
    match commands {
        Commands::Build {
            project,
            out_dir,
            includes,
            config,
            namespace,
            language,
            nullable,
        } => {
            let options = BuildOptions {
                project,
                out_dir,
                includes,
                config,
                overrides: PropertyOverrides {
                    namespace,
                    language,
                    project_dir: None,
                    nullable,
                },
            };
            let summary = run_build_command(&options)?;
            println!(
                "Generated {} file(s), {} empty, {} failed",
                summary.written(),
                summary.empty(),
                summary.failed()
            );
            if summary.failed() > 0 {
                return Err(format!(
                    "{} of {} document(s) failed",
                    summary.failed(),
                    summary.reports.len()
                ));
            }
            Ok(())
        }
        Commands::Generate {
            input,
            name,
            namespace,
            nullable,
            language,
            output,
        } => run_generate_command(&GenerateOptions {
            input,
            name,
            output,
            overrides: PropertyOverrides {
                namespace,
                language,
                project_dir: None,
                nullable,
            },
        }),
        Commands::Tree {
            input,
            name,
            language,
        } => {
            let json = tree_json(&input, name.as_deref(), language.as_deref())?;
            println!("{}", json);
            Ok(())
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args.commands) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

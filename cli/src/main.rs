//! reportkit CLI - themed overview document generator

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use reportkit::{
    flow, render, DocumentStats, JsonFormat, RenderOptions, Theme, DEFAULT_DOCUMENT_PATH,
};

#[derive(Parser)]
#[command(name = "reportkit")]
#[command(version)]
#[command(about = "Build the ChatNIL platform overview and export it to DOCX, Markdown, text and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full overview (cover, contents, sections 1-7)
    Build {
        /// Document container to write
        #[arg(short, long, value_name = "FILE", env = "REPORTKIT_DOCUMENT", default_value = DEFAULT_DOCUMENT_PATH)]
        output: PathBuf,

        /// DOCX export path (defaults to the container path with .docx)
        #[arg(long, value_name = "FILE")]
        docx: Option<PathBuf>,

        /// Skip the DOCX export
        #[arg(long, conflicts_with = "docx")]
        no_docx: bool,
    },

    /// Append the customer stories section to an existing overview
    Append {
        /// Document container to extend in place
        #[arg(value_name = "FILE", env = "REPORTKIT_DOCUMENT", default_value = DEFAULT_DOCUMENT_PATH)]
        input: PathBuf,

        /// DOCX export path (defaults to the container path with .docx)
        #[arg(long, value_name = "FILE")]
        docx: Option<PathBuf>,

        /// Skip the DOCX export
        #[arg(long, conflicts_with = "docx")]
        no_docx: bool,
    },

    /// Convert a document to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input document container
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(short, long)]
        frontmatter: bool,

        /// Table rendering mode
        #[arg(long, value_enum, default_value = "markdown")]
        table_mode: TableMode,

        /// Maximum heading level (1-6)
        #[arg(long, default_value = "6")]
        max_heading: u8,

        /// Render page breaks as horizontal rules
        #[arg(long)]
        page_rules: bool,
    },

    /// Convert a document to plain text
    Text {
        /// Input document container
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert a document to JSON
    Json {
        /// Input document container
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Export a document to DOCX
    Docx {
        /// Input document container
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to the input path with .docx)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show document information
    Info {
        /// Input document container
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TableMode {
    /// Standard Markdown tables
    Markdown,
    /// HTML tables with cell shading
    Html,
}

impl From<TableMode> for reportkit::TableFallback {
    fn from(mode: TableMode) -> Self {
        match mode {
            TableMode::Markdown => reportkit::TableFallback::Markdown,
            TableMode::Html => reportkit::TableFallback::Html,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build {
            output,
            docx,
            no_docx,
        }) => cmd_build(&output, docx_target(&output, docx, no_docx).as_deref()),
        Some(Commands::Append {
            input,
            docx,
            no_docx,
        }) => cmd_append(&input, docx_target(&input, docx, no_docx).as_deref()),
        Some(Commands::Markdown {
            input,
            output,
            frontmatter,
            table_mode,
            max_heading,
            page_rules,
        }) => cmd_markdown(
            &input,
            output.as_deref(),
            frontmatter,
            table_mode,
            max_heading,
            page_rules,
        ),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Docx { input, output }) => cmd_docx(&input, output.as_deref()),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: reportkit <COMMAND>".yellow());
            println!("       reportkit --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Resolve where the DOCX export goes, if anywhere.
fn docx_target(container: &Path, docx: Option<PathBuf>, no_docx: bool) -> Option<PathBuf> {
    if no_docx {
        None
    } else {
        Some(docx.unwrap_or_else(|| default_docx_path(container)))
    }
}

/// DOCX path next to `container`, never the container itself.
fn default_docx_path(container: &Path) -> PathBuf {
    let is_docx = container
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"));
    if !is_docx {
        return container.with_extension("docx");
    }
    let stem = container
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    container.with_file_name(format!("{stem}.export.docx"))
}

fn progress(steps: u64) -> Result<ProgressBar, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(steps);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

fn cmd_build(output: &Path, docx: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("build: container {}, docx {:?}", output.display(), docx);
    let theme = Theme::default();
    let pb = progress(if docx.is_some() { 2 } else { 1 })?;

    pb.set_message("Composing overview...");
    let report = flow::build_overview(output, &theme)?;
    pb.inc(1);

    if let Some(docx) = docx {
        pb.set_message("Exporting DOCX...");
        reportkit::export_docx(output, docx)?;
        pb.inc(1);
    }

    pb.finish_with_message("Done!");
    print_outputs(&report, docx);
    Ok(())
}

fn cmd_append(input: &Path, docx: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("append: container {}, docx {:?}", input.display(), docx);
    let theme = Theme::default();
    let pb = progress(if docx.is_some() { 2 } else { 1 })?;

    pb.set_message("Adding customer stories...");
    let report = flow::append_customer_stories(input, &theme)?;
    pb.inc(1);

    if let Some(docx) = docx {
        pb.set_message("Exporting DOCX...");
        reportkit::export_docx(input, docx)?;
        pb.inc(1);
    }

    pb.finish_with_message("Done!");
    print_outputs(&report, docx);
    Ok(())
}

fn print_outputs(report: &reportkit::FlowReport, docx: Option<&Path>) {
    println!(
        "\n{} {} sections, {} blocks",
        "Saved".green().bold(),
        report.sections,
        report.blocks
    );
    let last = if docx.is_some() { "├─" } else { "└─" };
    println!("  {} {}", last.dimmed(), report.path.display());
    if let Some(docx) = docx {
        println!("  {} {}", "└─".dimmed(), docx.display());
    }
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    frontmatter: bool,
    table_mode: TableMode,
    max_heading: u8,
    page_rules: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = reportkit::load(input)?;

    let render_options = RenderOptions::new()
        .with_frontmatter(frontmatter)
        .with_table_fallback(table_mode.into())
        .with_max_heading(max_heading)
        .with_page_break_rules(page_rules);

    let markdown = render::to_markdown(&doc, &render_options)?;
    write_or_print(output, &markdown)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = reportkit::load(input)?;
    let text = render::to_text(&doc)?;
    write_or_print(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = reportkit::load(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&doc, format)?;
    write_or_print(output, &json)
}

fn cmd_docx(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_docx_path(input));
    reportkit::export_docx(input, &output)?;
    println!("{} {}", "Saved to".green(), output.display());
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = reportkit::detect_format_from_path(input)?;
    let doc = reportkit::load(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);

    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref subject) = doc.metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref created) = doc.metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = doc.metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for span in doc.sections() {
        println!("{:>3}  {} {}", span.number, span.title, format!("({} blocks)", span.len()).dimmed());
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let stats = DocumentStats::from_document(&doc);
    println!("{}: {}", "Blocks".bold(), doc.block_count());
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Callouts".bold(), stats.callout_count);
    println!("{}: {}", "Page breaks".bold(), stats.page_break_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "reportkit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Themed overview document generator");
    println!();
    println!("License: MIT");
}

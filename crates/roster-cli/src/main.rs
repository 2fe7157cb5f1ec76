mod logger;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use logger::AppLogger;
use roster_layout::{Document, LayoutOptions, Page, PrintPlan, Section};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "roster", about = "Staff roster pagination CLI", version)]
struct Cli {
    /// Log page transitions and cache activity
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the staff photos found in a directory
    Scan {
        /// Directory of jpg/jpeg/png photos named "Name - Job title"
        directory: PathBuf,

        /// Print members as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a roster file by scanning one directory per section
    Init {
        /// Output roster JSON file
        #[arg(short, long)]
        output: PathBuf,

        /// Document title
        #[arg(long, default_value = "Vores Team")]
        title: String,

        /// Section as TITLE=DIRECTORY (repeatable, in print order)
        #[arg(long = "section", value_parser = parse_section_arg)]
        sections: Vec<(String, PathBuf)>,
    },

    /// Print the page plan for a roster
    Paginate {
        /// Roster JSON file
        #[arg(short, long)]
        roster: PathBuf,

        /// Layout options JSON file
        #[arg(long)]
        options: Option<PathBuf>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show pagination statistics only
    Stats {
        /// Roster JSON file
        #[arg(short, long)]
        roster: PathBuf,

        /// Layout options JSON file
        #[arg(long)]
        options: Option<PathBuf>,
    },

    /// Encode a photo thumbnail as a data URL
    Thumbnail {
        /// Image file
        image: PathBuf,
    },
}

fn parse_section_arg(arg: &str) -> std::result::Result<(String, PathBuf), String> {
    match arg.split_once('=') {
        Some((title, dir)) if !title.is_empty() && !dir.is_empty() => {
            Ok((title.to_string(), PathBuf::from(dir)))
        }
        _ => Err(format!("expected TITLE=DIRECTORY, got '{}'", arg)),
    }
}

async fn load_options(path: Option<&Path>) -> Result<LayoutOptions> {
    let options = match path {
        Some(path) => LayoutOptions::load(path)
            .await
            .with_context(|| format!("loading layout options from {}", path.display()))?,
        None => LayoutOptions::default(),
    };
    options.validate()?;
    Ok(options)
}

fn print_plan(plan: &PrintPlan) {
    println!(
        "Tier: {} ({} columns, card {:.1} x {:.1} mm)",
        plan.tier, plan.geometry.columns, plan.geometry.card_width_mm, plan.geometry.card_height_mm
    );
    for (index, page) in plan.pages.iter().enumerate() {
        print_page(index, page);
    }
}

fn print_page(index: usize, page: &Page) {
    println!();
    if index == 0 {
        println!("Page {}: {}", index + 1, page.title);
    } else {
        println!("Page {}", index + 1);
    }
    if page.sections.is_empty() {
        println!("  (no members)");
    }
    for group in &page.sections {
        println!("  == {} ({}) ==", group.title, group.members.len());
        for member in &group.members {
            let marker = if member.is_intern { " [intern]" } else { "" };
            match &member.job_title {
                Some(job) => println!("    {} - {}{}", member.name, job, marker),
                None => println!("    {}{}", member.name, marker),
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let logger = AppLogger::new(200, level);
    logger.clone().init()?;

    match cli.command {
        Commands::Scan { directory, json } => {
            let members = roster_media::read_staff_images(&directory).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&members)?);
            } else {
                for member in &members {
                    match &member.job_title {
                        Some(job) => println!("{} - {}", member.name, job),
                        None => println!("{}", member.name),
                    }
                }
            }
        }

        Commands::Init {
            output,
            title,
            sections,
        } => {
            let mut document = Document::new(title);
            for (section_title, directory) in sections {
                let members = roster_media::read_staff_images(&directory)
                    .await
                    .with_context(|| format!("scanning {}", directory.display()))?;
                document
                    .sections
                    .push(Section::with_members(section_title, members));
            }
            roster_layout::save_roster(&document, &output).await?;
            println!(
                "Saved {} member(s) in {} section(s) → {}",
                document.total_members(),
                document.sections.len(),
                output.display()
            );
        }

        Commands::Paginate {
            roster,
            options,
            json,
        } => {
            let document = roster_layout::load_roster(&roster).await?;
            let options = load_options(options.as_deref()).await?;
            let plan = roster_layout::plan(&document, &options);

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&plan);
            }

            if plan.forced_placements > 0 {
                eprintln!(
                    "{} row(s) did not fit on a page and will overflow ({} warning(s) logged)",
                    plan.forced_placements,
                    logger.warning_count()
                );
            }
        }

        Commands::Stats { roster, options } => {
            let document = roster_layout::load_roster(&roster).await?;
            let options = load_options(options.as_deref()).await?;
            let stats = roster_layout::calculate_statistics(&document, &options)?;

            println!("Pagination Statistics:");
            println!("  Members: {}", stats.total_members);
            println!("  Interns: {}", stats.intern_count);
            println!(
                "  Sections: {} ({} non-empty)",
                stats.sections, stats.non_empty_sections
            );
            println!("  Card size: {} ({} columns)", stats.tier, stats.columns);
            println!("  Pages: {}", stats.pages);
            println!("  Section headers: {}", stats.headers);
            if stats.forced_placements > 0 {
                println!("  Overflowing rows: {}", stats.forced_placements);
            }
        }

        Commands::Thumbnail { image } => {
            let data_url = roster_media::get_image_data(&image).await?;
            let preview: String = data_url.chars().take(64).collect();
            println!("{} bytes: {}...", data_url.len(), preview);
        }
    }

    Ok(())
}

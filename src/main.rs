use chrono::{Local, NaiveDate};
use clap::Parser;
use lifereview::application::{
    init::init, ConfigService, DashboardService, LifeMapService, OpenReviewService, ReviewService,
};
use lifereview::cli::{output, Cli, Commands, LifemapAction};
use lifereview::domain::{parse_review_date, ReviewKind};
use lifereview::error::{ReviewError, Result};
use lifereview::infrastructure::FileSystemRepository;
use serde::Serialize;
use std::str::FromStr;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Diagnostics go to stderr, filtered by LIFEREVIEW_LOG (default: warn)
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("LIFEREVIEW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn parse_kind(value: &str) -> Result<ReviewKind> {
    ReviewKind::from_str(value).map_err(ReviewError::Config)
}

fn parse_date_arg(value: Option<&str>) -> Result<Option<NaiveDate>> {
    value.map(parse_review_date).transpose()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized lifereview journal at {}", path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("window_days = {}", config.window_days);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: lifereview config [--list | <key> [<value>]]");
                println!("Valid keys: editor, window_days, created");
            }
            Ok(())
        }
        Commands::Open {
            kind,
            date,
            no_edit,
        } => {
            let kind = parse_kind(&kind)?;
            let date = parse_date_arg(date.as_deref())?.unwrap_or_else(today);

            let repo = FileSystemRepository::discover()?;
            let filename = OpenReviewService::new(repo).execute(kind, date, !no_edit)?;
            if no_edit {
                println!("{}", filename);
            }
            Ok(())
        }
        Commands::Show { kind, date, json } => {
            let kind = parse_kind(&kind)?;
            let date = parse_review_date(&date)?;

            let repo = FileSystemRepository::discover()?;
            let service = ReviewService::new(repo);
            match kind {
                ReviewKind::Daily => {
                    let review = service.show_daily(date)?;
                    if json {
                        print_json(&review)?;
                    } else {
                        print!("{}", output::format_daily_review(&review));
                    }
                }
                ReviewKind::Weekly => {
                    let review = service.show_weekly(date)?;
                    if json {
                        print_json(&review)?;
                    } else {
                        print!("{}", output::format_weekly_review(&review));
                    }
                }
            }
            Ok(())
        }
        Commands::List {
            weekly,
            from,
            to,
            limit,
        } => {
            let kind = if weekly {
                ReviewKind::Weekly
            } else {
                ReviewKind::Daily
            };
            let from = parse_date_arg(from.as_deref())?;
            let to = parse_date_arg(to.as_deref())?;

            let repo = FileSystemRepository::discover()?;
            let entries = ReviewService::new(repo).list(kind, from, to, limit)?;
            println!("{}", output::format_review_list(&entries).trim_end());
            Ok(())
        }
        Commands::Scores { from, to, json } => {
            let from = parse_date_arg(from.as_deref())?;
            let to = parse_date_arg(to.as_deref())?;

            let repo = FileSystemRepository::discover()?;
            let service = DashboardService::new(repo);
            let report = service.scores(service.window(from, to, today())?)?;
            if json {
                print_json(&report)
            } else {
                print!("{}", output::format_score_report(&report));
                Ok(())
            }
        }
        Commands::Energy { from, to, json } => {
            let from = parse_date_arg(from.as_deref())?;
            let to = parse_date_arg(to.as_deref())?;

            let repo = FileSystemRepository::discover()?;
            let service = DashboardService::new(repo);
            let trend = service.energy(service.window(from, to, today())?)?;
            if json {
                print_json(&trend)
            } else {
                println!("{}", output::format_energy_trend(&trend).trim_end());
                Ok(())
            }
        }
        Commands::Lifemap { action } => {
            let repo = FileSystemRepository::discover()?;
            let service = LifeMapService::new(repo);

            match action {
                LifemapAction::Show { json } => {
                    let map = service.show()?;
                    if json {
                        print_json(&map)
                    } else {
                        print!("{}", output::format_life_map(&map));
                        Ok(())
                    }
                }
                LifemapAction::Set {
                    domain,
                    score,
                    assessment,
                } => {
                    let entry = service.set(&domain, &score, assessment.as_deref())?;
                    if entry.assessment.is_empty() {
                        println!("Set {} = {}", domain.to_lowercase(), entry.score);
                    } else {
                        println!(
                            "Set {} = {} ({})",
                            domain.to_lowercase(),
                            entry.score,
                            entry.assessment
                        );
                    }
                    Ok(())
                }
            }
        }
    }
}

//! Reconstruct a timetable from an OCR response and export it as iCalendar
//!
//! Usage:
//!   calendify --ocr response.json --start 2025-09-03 --end 2025-12-10 --tz America/Chicago
//!   calendify --ocr response.json --start 2025-09-03 --end 2025-12-10 --tz America/Chicago \
//!       --output fall.ics --config engine.json --verbose

use calendify::config::EngineConfig;
use calendify::export::calendar_writer;
use calendify::grouping::ScheduleState;
use calendify::model::format_day_list;
use calendify::ocr::read_response;
use calendify::pipeline::reconstruct;
use calendify::render::{event_box, palette_color, week_layout};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::process;

struct CliArgs {
    ocr_path: PathBuf,
    start: NaiveDate,
    end: NaiveDate,
    time_zone: String,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    verbose: bool,
}

impl CliArgs {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut ocr_path = None;
        let mut start = None;
        let mut end = None;
        let mut time_zone = None;
        let mut output = None;
        let mut config_path = None;
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--ocr" | "--start" | "--end" | "--tz" | "--output" | "-o" | "--config" => {
                    i += 1;
                    let value = args
                        .get(i)
                        .cloned()
                        .ok_or_else(|| format!("Missing value for {}", flag))?;
                    match flag {
                        "--ocr" => ocr_path = Some(PathBuf::from(value)),
                        "--start" => start = Some(parse_date(&value)?),
                        "--end" => end = Some(parse_date(&value)?),
                        "--tz" => time_zone = Some(value),
                        "--output" | "-o" => output = Some(PathBuf::from(value)),
                        _ => config_path = Some(PathBuf::from(value)),
                    }
                },
                "--verbose" | "-v" => {
                    verbose = true;
                },
                other => return Err(format!("Unknown argument: {}", other)),
            }
            i += 1;
        }

        Ok(Self {
            ocr_path: ocr_path.ok_or("--ocr is required")?,
            start: start.ok_or("--start is required")?,
            end: end.ok_or("--end is required")?,
            time_zone: time_zone.ok_or("--tz is required")?,
            output,
            config_path,
            verbose,
        })
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date {:?} (expected YYYY-MM-DD): {}", value, e))
}

fn usage() -> &'static str {
    "Usage: calendify --ocr <response.json> --start YYYY-MM-DD --end YYYY-MM-DD --tz <IANA zone> \
     [--output <file.ics>] [--config <engine.json>] [--verbose]"
}

fn main() {
    let args = match CliArgs::from_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("{}", usage());
            process::exit(2);
        },
    };

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> calendify::Result<()> {
    let config = match args.config_path {
        Some(ref path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    let response = read_response(&args.ocr_path)?;
    if let Some(ref warning) = response.warning {
        println!("OCR warning: {}", warning);
    }

    let result = reconstruct(&response.schedule);
    println!(
        "Reconstructed {} entries from {} blocks ({} skipped, {} without a day)",
        result.entries.len(),
        response.schedule.len(),
        result.skipped_blocks,
        result.unassigned_entries
    );

    let state = ScheduleState::from_entries(result.entries);

    println!();
    println!("{:<32} {:<14} {:<13} {}", "Course", "Days", "Time", "Location");
    println!("{}", "-".repeat(72));
    for entry in state.grouped() {
        println!(
            "{:<32} {:<14} {:<13} {}",
            entry.course,
            format_day_list(&entry.days),
            format!("{}-{}", entry.start_time, entry.end_time),
            entry.location
        );
    }

    println!();
    for (day, records) in week_layout(state.flat(), &config.grid) {
        if records.is_empty() {
            continue;
        }
        println!("{}:", day);
        for record in &records {
            let placement = event_box(record, &config.grid);
            println!(
                "  {:<32} {}-{} col {}/{} top {:.0}px height {:.0}px [{}]",
                record.entry.course,
                record.entry.start_time,
                record.entry.end_time,
                record.column + 1,
                record.total_columns,
                placement.top,
                placement.height,
                palette_color(&record.entry.course, &record.entry.section)
            );
        }
    }

    let writer = calendar_writer(state.grouped(), args.start, args.end, &args.time_zone, &config.export)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.export.filename));
    writer.write_to_file(&output)?;

    println!();
    println!("Wrote {} events to {}", writer.event_count(), output.display());
    Ok(())
}

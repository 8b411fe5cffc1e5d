use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use tabled::settings::Style;

use crate::catalog::Catalog;
use crate::mission::{MissionRequest, Preference, ShortlistRequest};
use crate::recommend::{AircraftScore, Recommender};
use crate::wind::Wind;

mod aircraft;
mod airport;
mod catalog;
mod economics;
mod emissions;
mod error;
mod geo;
mod mission;
mod recommend;
mod wind;

#[derive(Parser)]
struct Args {
    /// Path to the JSON catalog file (fleet + airports)
    #[arg(short, long, value_name = "FILE", default_value = "data/default.json")]
    catalog: PathBuf,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

fn paginate(content: String) {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())
        .expect("Failed to spawn pager");

    let mut stdin = pager.stdin.take().expect("Failed to open stdin for pager");

    if let Err(e) = stdin.write_all(content.as_bytes()) {
        // Broken pipe is common if the user quits the pager early
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            eprintln!("Error writing to pager: {}", e);
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn print_table<T: tabled::Tabled>(rows: &[T]) {
    let mut table = tabled::Table::new(rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if rows.len() > 20 {
        paginate(table.to_string());
    } else {
        println!("{}", table);
    }
}

/// Natural-language gap between the top two picks, in profit and burn terms.
fn compare_top_two(scores: &[AircraftScore]) -> Option<String> {
    if scores.len() < 2 {
        return None;
    }
    let (first, second) = (&scores[0], &scores[1]);

    let profit_gap = first.profit_usd - second.profit_usd;
    let profit_part = if profit_gap >= 0.0 {
        format!("${profit_gap:.0} more profit per leg")
    } else {
        format!("${:.0} less profit per leg", -profit_gap)
    };

    let burn_gap = second.fuel_efficiency_l_km - first.fuel_efficiency_l_km;
    let burn_part = if burn_gap >= 0.0 {
        format!("burns {burn_gap:.2} L/km less")
    } else {
        format!("burns {:.2} L/km more", -burn_gap)
    };

    Some(format!(
        "{} over {}: {}, {}.",
        first.aircraft, second.aircraft, profit_part, burn_part
    ))
}

fn print_recommendation(scores: &[AircraftScore]) {
    let top: Vec<&AircraftScore> = scores.iter().take(5).collect();
    print_table(&top);

    for (rank, score) in top.iter().enumerate() {
        if score.reasons.is_empty() {
            continue;
        }
        let notes = score
            .reasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>()
            .join("; ");
        println!("  {}. {} - {}", rank + 1, score.aircraft, notes);
    }

    if let Some(comparison) = compare_top_two(scores) {
        println!("{}", comparison.green());
    }
}

fn parse_mission(parts: &[&str]) -> Option<MissionRequest> {
    let (origin, destination, pax) = (parts.first()?, parts.get(1)?, parts.get(2)?);
    let mut request = MissionRequest::new(origin, destination, pax.parse().unwrap_or(0));

    let mut rest = parts.get(3..).unwrap_or(&[]);
    if let Some(cargo) = rest.first().and_then(|s| s.parse::<f64>().ok()) {
        request.cargo_kg = cargo;
        rest = rest.get(1..).unwrap_or(&[]);
    }
    if let Some(preference) = rest.first().and_then(|s| Preference::parse(s)) {
        request.preference = preference;
        rest = rest.get(1..).unwrap_or(&[]);
    }
    if let (Some(speed), Some(direction)) = (rest.first(), rest.get(1)) {
        request.wind = Some(Wind {
            speed_kts: speed.parse().unwrap_or(0.0),
            direction_deg: direction.parse().unwrap_or(0.0),
        });
    }
    Some(request)
}

fn parse_shortlist(parts: &[&str]) -> Option<ShortlistRequest> {
    Some(ShortlistRequest {
        passengers: parts.first()?.parse().unwrap_or(0),
        cargo_kg: parts.get(1)?.parse().unwrap_or(0.0),
        range_km: parts.get(2)?.parse().unwrap_or(0.0),
        alternate_range_km: parts.get(3)?.parse().unwrap_or(0.0),
        wind: Wind {
            speed_kts: parts.get(4)?.parse().unwrap_or(0.0),
            direction_deg: parts.get(5)?.parse().unwrap_or(0.0),
        },
        runway_available_m: parts.get(6).and_then(|s| s.parse().ok()),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let catalog = Catalog::load_from_file(args.catalog.to_str().unwrap())?;
    let advisor = Recommender::new(catalog)?;
    println!(
        "Fleet advisor online. {} aircraft, {} airports loaded from {}",
        advisor.catalog().fleet.len(),
        advisor.catalog().airports.len(),
        args.catalog.display()
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "fleet".to_string(),
            "airports".to_string(),
            "recommend".to_string(),
            "shortlist".to_string(),
            "export".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "fleet" => print_table(&advisor.catalog().fleet),
                    "airports" => {
                        let airports = advisor.catalog().sorted_airports();
                        print_table(&airports);
                    }
                    "recommend" => match parse_mission(&parts[1..]) {
                        Some(request) => match advisor.recommend(&request) {
                            Ok(scores) => print_recommendation(&scores),
                            Err(e) => println!("{}", e.to_string().red()),
                        },
                        None => println!(
                            "Usage: recommend <ORIG> <DEST> <PAX> [CARGO_KG] [cost|environment|speed] [WIND_KTS WIND_DEG]"
                        ),
                    },
                    "shortlist" => match parse_shortlist(&parts[1..]) {
                        Some(request) => match advisor.shortlist(&request) {
                            Ok(fleet) => {
                                let rows: Vec<_> = fleet.into_iter().cloned().collect();
                                print_table(&rows);
                            }
                            Err(e) => println!("{}", e.to_string().red()),
                        },
                        None => println!(
                            "Usage: shortlist <PAX> <CARGO_KG> <RANGE_KM> <ALT_RANGE_KM> <WIND_KTS> <WIND_DEG> [RUNWAY_M]"
                        ),
                    },
                    "export" => match parse_mission(&parts[1..]) {
                        Some(request) => match advisor.recommend(&request) {
                            Ok(scores) => println!("{}", serde_json::to_string_pretty(&scores)?),
                            Err(e) => println!("{}", e.to_string().red()),
                        },
                        None => println!("Usage: export <ORIG> <DEST> <PAX> [CARGO_KG]"),
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  fleet                    - List the aircraft catalog");
                        println!("  airports                 - List the airport directory");
                        println!("  recommend <O> <D> <PAX> [CARGO] [PROFILE] [WIND_KTS WIND_DEG]");
                        println!("                           - Rank feasible aircraft for the leg (top 5 shown)");
                        println!("  shortlist <PAX> <CARGO> <RANGE> <ALT_RANGE> <WIND_KTS> <WIND_DEG> [RUNWAY_M]");
                        println!("                           - Wind-filter the fleet, no scoring");
                        println!("  export <O> <D> <PAX> [CARGO]");
                        println!("                           - Full ranked list as JSON");
                        println!("  help / ?                 - Show this help menu");
                        println!("  exit / quit              - Exit the advisor\n");
                    }
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

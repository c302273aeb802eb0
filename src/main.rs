#![deny(clippy::all)]

use std::env::Args;
use std::iter::Skip;
use std::str::FromStr;

use flasc::plotting;
use flasc::queries::{self, Selection};
use flasc::solving;

struct Options {
    at: Option<i32>,
    limit: usize,
}

fn read_options(mut args: Skip<Args>) -> Options {
    let mut options = Options { at: None, limit: 0 };
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "-t" => options.at = args.next().and_then(|t| i32::from_str(t.trim()).ok()),
            "-n" => {
                options.limit = args
                    .next()
                    .and_then(|n| usize::from_str(n.trim()).ok())
                    .unwrap_or(0)
            }
            _ => (),
        }
    }

    options
}

fn run_query(mut args: Skip<Args>, selection: Selection) {
    args.next()
        .and_then(|s| if s.trim() == "-in" { args.next() } else { None })
        .map_or_else(
            || {
                println!("error: provide lp file path with {:?}.", "-in path");
                std::process::exit(-1)
            },
            |f| {
                let options = read_options(args);
                solving::collect_models(f, options.limit)
                    .map_err(|err| err.to_string())
                    .and_then(|models| {
                        queries::print_fluents(&models, selection, options.at)
                            .map_err(|err| err.to_string())
                    })
                    .unwrap_or_else(|err| {
                        println!("error: {:?}.", err);
                        std::process::exit(-1)
                    })
            },
        )
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("-all") => run_query(args, Selection::All),
        Some("-act") => run_query(args, Selection::Active),
        Some("-inact") => run_query(args, Selection::Inactive),
        Some("-raw") => args
            .next()
            .and_then(|s| if s.trim() == "-in" { args.next() } else { None })
            .map_or_else(
                || {
                    println!("error: provide lp file path with {:?}.", "-in path");
                    std::process::exit(-1)
                },
                |f| {
                    let options = read_options(args);
                    solving::collect_models(f, options.limit)
                        .map_err(|err| err.to_string())
                        .and_then(|models| {
                            queries::print_raw(&models).map_err(|err| err.to_string())
                        })
                        .unwrap_or_else(|err| {
                            println!("error: {:?}.", err);
                            std::process::exit(-1)
                        })
                },
            ),
        Some("-plot") => args
            .next()
            .and_then(|s| if s.trim() == "-in" { args.next() } else { None })
            .zip({
                if args.next().as_deref() == Some("-out") {
                    args.next()
                } else {
                    None
                }
            })
            .map_or_else(
                || {
                    println!(
                        "error: please provide input in the following order {:?}.",
                        "-in logic_program_path -out chart_path"
                    );
                    std::process::exit(-1)
                },
                |(lp, out)| {
                    let options = read_options(args);
                    solving::collect_models(lp, options.limit)
                        .map_err(|err| err.to_string())
                        .and_then(|models| {
                            plotting::render_counts(out, &queries::status_counts(&models))
                                .map_err(|err| err.to_string())
                        })
                        .unwrap_or_else(|err| {
                            println!("error: {:?}.", err);
                            std::process::exit(-1)
                        })
                },
            ),
        Some(s) => {
            println!("error: unknown operation {:?}.", s);
            std::process::exit(-1)
        }
        _ => {
            println!("error: specify operation.");
            std::process::exit(-1)
        }
    }
}

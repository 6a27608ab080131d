//! Counts the number of variations from a given starting position to a specified depth. Defaults
//! to the standard starting position.
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fs::File;
use std::io::BufReader;
use std::io::prelude::*;
use std::process;
use clap::{Arg, App, crate_authors, crate_version};
use magpie::chess::{variations, CastlingRule, Position, Tables, START_FEN};

fn main() {
    let matches =
        App::new("magpie count")
            .version(crate_version!())
            .author(crate_authors!())
            .about("Counts the number of variations from a given starting position \
                    to a specified\ndepth. Defaults to the standard starting position.")
            .arg(Arg::with_name("file")
                .short("f")
                .value_name("EPD_FILE")
                .takes_value(true)
                .conflicts_with("depth")
                .conflicts_with("fen")
                .help("An EPD file of positions to search"))
            .arg(Arg::with_name("fen")
                .value_name("FEN_STRING")
                .default_value(START_FEN)
                .hide_default_value(true)
                .multiple(true)
                .help("Position to search in Forsyth-Edwards Notation (FEN)"))
            .arg(Arg::with_name("depth")
                .long("depth")
                .short("d")
                .value_name("DEPTH")
                .takes_value(true)
                .required_unless("file")
                .conflicts_with("file")
                .help("Depth to search the position"))
            .arg(Arg::with_name("source-rule")
                .long("source-rule")
                .help("Keeps castling rights when a rook is captured on its corner"))
            .get_matches();

    let tables = Tables::default();
    let rule = variations::perft_rule(matches.is_present("source-rule"));

    let result = if let Some(file) = matches.value_of("file") {
        read_epd(file, &tables, rule)
    } else {
        count_fens(&matches, &tables, rule)
    };

    if let Err(error) = result {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}

fn count_fens(matches: &clap::ArgMatches, tables: &Tables, rule: CastlingRule)
        -> Result<(), String> {
    let depth = matches.value_of("depth").expect("INFALLIBLE");
    let depth: usize = depth.parse().map_err(|error| format!("\"{}\": {}", depth, error))?;

    for fen in matches.values_of("fen").expect("INFALLIBLE") {
        let pos = Position::from_fen(fen, tables.keys())
            .map_err(|error| format!("{}: {}", fen, error))?
            .with_castling_rule(rule);
        println!("\n{}", fen);
        let count = variations::divide(&pos, tables, depth);
        println!("Depth {} total:\t{:12}", depth, count);
    }

    Ok(())
}

fn read_epd(file: &str, tables: &Tables, rule: CastlingRule) -> Result<(), String> {
    let epd = File::open(file)
        .map(BufReader::new)
        .map_err(|error| format!("{}: {}", file, error))?;

    for (line_num, line) in epd.lines().enumerate() {
        let line = line.map_err(|error| format!("{}: line {}: {}", file, line_num, error))?;
        split_epd_line(&line, line_num, tables, rule)
            .map_err(|error| format!("{}: line {}: {}", file, line_num, error))?;
    }

    Ok(())
}

fn split_epd_line(line: &str, line_num: usize, tables: &Tables, rule: CastlingRule)
        -> Result<(), String> {
    let mut fields = line.split(';');
    let fen = match fields.next() {
        Some(fen) if !fen.trim().is_empty() => fen.trim(),
        _ => return Ok(()),
    };
    println!("\nLine {:3}:\t{}", line_num, fen);

    let pos = Position::from_fen(fen, tables.keys())
        .map_err(|error| format!("error: {}", error))?
        .with_castling_rule(rule);

    for field in fields {
        let nums = field.trim().trim_start_matches('D');
        let nums: Vec<&str> = nums.split_whitespace().collect();
        if nums.len() < 2 {
            return Err(format!("\"{}\": not enough fields", field));
        } else if nums.len() > 2 {
            return Err(format!("\"{}\": too many fields", field));
        }

        let depth: usize = nums[0].parse().map_err(|error| format!("\"{}\": {}", nums[0], error))?;
        let expected: u64 = nums[1].parse()
            .map_err(|error| format!("\"{}\": {}", nums[1], error))?;

        println!("Depth {} expected:\t{:12}", depth, expected);
        let count = variations::count(&pos, tables, depth);
        println!("Depth {} result:  \t{:12}", depth, count);
        if count != expected {
            return Err(format!("depth {}: expected {} but counted {}", depth, expected, count));
        }
    }

    Ok(())
}

//! The magpie chess engine.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]
#![warn(clippy::option_unwrap_used, clippy::result_unwrap_used)]

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use clap::{App, Arg, SubCommand, crate_authors, crate_version};
use log::info;
use magpie::chess::{variations, CastlingRule, Position, Tables, START_FEN};
use magpie::config::{Config, ConfigError};
use magpie::engine::Bot;
use magpie::logging;
use magpie::protocol::uci::Uci;

fn main() -> Result<(), Error> {
    let matches =
        App::new("Magpie")
            .version(crate_version!())
            .author(crate_authors!())
            .about("A bitboard move generator speaking UCI")
            .arg(Arg::with_name("log")
                .long("log")
                .short("l")
                .global(true)
                .help("Turns on logging"))
            .arg(Arg::with_name("log-file")
                .long("log-file")
                .global(true)
                .value_name("LOG_FILE")
                .takes_value(true)
                .help("Sets the log file if logging is turned on. Defaults to a timestamped \
                       file in the configured log directory"))
            .arg(Arg::with_name("log-level")
                .long("log-level")
                .global(true)
                .value_name("LEVEL")
                .takes_value(true)
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .help("Sets the log level if logging is turned on [default: info]"))
            .arg(Arg::with_name("config")
                .long("config")
                .short("c")
                .global(true)
                .value_name("CONFIG_FILE")
                .takes_value(true)
                .help("Reads settings from a YAML file"))
            .subcommand(SubCommand::with_name("perft")
                .about("Counts the number of variations from a given starting position \
                        to a specified\ndepth, move by move. Defaults to the standard starting \
                        position.")
                .arg(Arg::with_name("depth")
                    .long("depth")
                    .short("d")
                    .value_name("DEPTH")
                    .takes_value(true)
                    .required(true)
                    .help("Depth to search the position"))
                .arg(Arg::with_name("fen")
                    .value_name("FEN_STRING")
                    .default_value(START_FEN)
                    .hide_default_value(true)
                    .multiple(true)
                    .help("Position to search in Forsyth-Edwards Notation (FEN)"))
                .arg(Arg::with_name("source-rule")
                    .long("source-rule")
                    .help("Keeps castling rights when a rook is captured on its corner")))
            .get_matches();

    let config = match matches.value_of_os("config") {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let level_name = matches.value_of("log-level").unwrap_or(config.log.level.as_str());
    let log_level = logging::parse_level(level_name)
        .ok_or_else(|| Error(format!("{}: invalid log level", level_name)))?;

    let log_file = if matches.is_present("log") || config.log.enabled {
        Some(match matches.value_of_os("log-file") {
            Some(path) => {
                let path = PathBuf::from(path);
                File::create(&path).map_err(|err| Error(format!("{}: {}", path.display(), err)))?
            },
            None => {
                let dir = &config.log.dir;
                logging::create_log_file(dir, config.log.max_files)
                    .map_err(|err| Error(format!("{}: {}", dir.display(), err)))?
                    .1
            },
        })
    } else {
        None
    };
    let _logger = logging::init(log_level, log_file);
    info!("{:?}", config);

    let tables = Arc::new(Tables::new(config.zobrist_seed));
    match matches.subcommand() {
        (_, None) => {
            let rule = CastlingRule::from(config.castling_rule);
            let bot = Bot::new(tables, config.generator, rule, config.time_divisor);
            Uci::new(bot).run();
        },
        ("perft", Some(matches)) => {
            let depth = matches
                .value_of("depth")
                .expect("INFALLIBLE")
                .parse()
                .map_err(|_| {Error("depth must be numeric".to_owned())})?;

            let rule = variations::perft_rule(matches.is_present("source-rule"));

            println!();
            for fen in matches.values_of("fen").expect("INFALLIBLE") {
                let pos = Position::from_fen(fen, tables.keys())
                    .map_err(|err| {Error(format!("{}: {}", fen, err))})?
                    .with_castling_rule(rule);
                println!("{}", fen);
                let count = variations::divide(&pos, &tables, depth);
                println!("Depth {} total:\t{:12}\n", depth, count);
            }
        },
        _ => unreachable!(),
    }

    Ok(())
}

struct Error(String);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.0.fmt(f)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Error { }

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error(err.to_string())
    }
}

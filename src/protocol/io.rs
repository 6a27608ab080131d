//! Handles the engine's input and output with the client.
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::io::{stdin, BufRead};
use std::thread;
use std::sync::mpsc::*;
use log::{info, error};

/// Reads lines from the client on a background thread and writes responses to stdout. All input
/// and output is logged using the log crate (assuming a logger is set up).
#[derive(Debug)]
pub struct Client(Receiver<String>);

impl Client {
    /// Starts reading stdin and returns the interface.
    pub fn connect() -> Self {
        let (sender, receiver) = channel();
        thread::spawn(move || {
            let stdin = stdin();
            Self::thread(stdin.lock(), sender);
        });

        Self(receiver)
    }

    /// Retrieves a message from the client. Blocks until a message is received, and fails once
    /// the input has ended.
    pub fn recv(&self) -> Result<String, RecvError> {
        self.0.recv()
    }

    /// Sends a message to the client.
    pub fn send(s: &str) {
        println!("{}", s);
        info!("<engine>: {}", s);
    }

    /// Forwards lines from `input` until it ends, fails, or nobody is listening
    fn thread<R: BufRead>(mut input: R, sender: Sender<String>) {
        loop {
            let mut line = String::new();

            match input.read_line(&mut line) {
                Ok(0) => {
                    info!("end of input");
                    break;
                },
                Ok(_) => { },
                Err(err) => {
                    error!("io error: {}", err);
                    break;
                },
            }

            let line = line.trim().to_string();
            info!("<client>: {}", line);
            if sender.send(line).is_err() {
                break;
            }
        }
    }
}

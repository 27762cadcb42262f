// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::{self, BufRead, Write};

use log::{debug, error};
use once_cell::sync::Lazy;
use regex::Regex;

use seabattle::{
    config::{BOARD_SIZE, SAMPLE_FLEET},
    Board, Coordinate,
};

/// A parsed line of player input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Fire(Coordinate),
    Show,
    Help,
    Quit,
}

fn main() -> io::Result<()> {
    env_logger::init();

    let mut board = Board::new(SAMPLE_FLEET.iter().copied()).map_err(|err| {
        error!("could not build the sample fleet: {}", err);
        io::Error::new(io::ErrorKind::InvalidData, err)
    })?;

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    println!("Sample fleet placed. Type help or ? for commands.");
    println!();
    show_board(&board);
    loop {
        println!();
        let cmd = input.read_input_lower("> ", |line| match parse_command(line) {
            Ok(cmd) => Some(cmd),
            Err(msg) => {
                println!("{}", msg);
                None
            }
        })?;
        debug!("command: {:?}", cmd);

        match cmd {
            Command::Fire(coord) => {
                println!("{}", board.fire(coord));
                if board.defeated() {
                    println!();
                    show_board(&board);
                    println!("Every ship has been sunk.");
                    break;
                }
            }
            Command::Show => show_board(&board),
            Command::Quit => break,
            Command::Help => println!(
                "Available Commands:
    fire <row>,<column>   fire at the given cell. \"f\" may be used for short, or the
        command left off entirely. Rows and columns count from 0.
    show                  print the board.
    quit                  leave the game.

Legend: ~ water, \u{25A1} ship, * hit, x sunk"
            ),
        }
    }
    Ok(())
}

/// Parse a single line of input, already trimmed and lowercased.
fn parse_command(input: &str) -> Result<Command, String> {
    /// Matcher for the fire command.
    static FIRE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:(?:fire|shoot|f)\s+)?
    (?:(?:at|on)\s+)?
    (?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<column>[0-9]+)$",
        )
        .unwrap()
    });

    match input {
        "?" | "help" | "h" => Ok(Command::Help),
        "show" | "board" | "s" => Ok(Command::Show),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => match FIRE.captures(other) {
            Some(captures) => {
                let row = parse_index(&captures["row"], "row")?;
                let column = parse_index(&captures["column"], "column")?;
                Ok(Command::Fire(Coordinate::new(row, column)))
            }
            None => Err(format!("Invalid command \"{}\". Use '?' for help", other)),
        },
    }
}

fn parse_index(text: &str, name: &str) -> Result<usize, String> {
    text.parse().map_err(|_| format!("invalid {}: {}", name, text))
}

/// Print the rendered field with row and column labels.
fn show_board(board: &Board) {
    print!("   ");
    for i in 0..BOARD_SIZE {
        print!("{} ", i);
    }
    println!();
    for (i, line) in board.render_field().lines().enumerate() {
        println!("{:>2} {}", i, line);
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Exits on
    /// end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}

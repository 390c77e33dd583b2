// syn.txt -- a text based synthesizer and audio workstation
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Implementation of the `theory` command line tool.

use std::io::{self, Write};

use log::{debug, error};
use snafu::{ResultExt, Snafu};
use structopt::StructOpt;

use crate::interval::{self, Interval};
use crate::note::Note;
use crate::scale::{self, ScaleError};

#[derive(Debug, StructOpt)]
#[structopt(name = "theory", about = "Spelling notes, intervals and scales")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Print all notes of a scale, from the tonic up to the octave.
    Scale {
        /// The first note of the scale, e.g. `Eb`.
        tonic: Note,
        /// Name of the scale, e.g. `Harmonic Minor`.
        #[structopt(required = true)]
        name: Vec<String>,
    },
    /// Move a note up by an interval.
    Add { note: Note, interval: Interval },
    /// Move a note down by an interval.
    Sub { note: Note, interval: Interval },
    /// Print the circle of fifths starting at C.
    Fifths,
    /// List all known scales.
    Scales,
    /// List all known intervals with their size in semitones.
    Intervals,
}

#[derive(Debug, Snafu)]
pub enum CliError {
    #[snafu(display("{}", source))]
    Lookup { source: ScaleError },
    #[snafu(display("Could not write output: {}", source))]
    Output { source: io::Error },
}

/// Entry point of the `theory` binary.
pub fn theory_main() -> io::Result<()> {
    let opt = Opt::from_args();

    simple_logger::init_with_level(log_level(opt.verbose))
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&opt.command, &mut out).map_err(|err| {
        error!("{}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })
}

/// Log level for the given number of `-v` flags.
///
/// Commands log at debug level or below, so default runs only print their results.
fn log_level(verbose: usize) -> log::Level {
    match verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    }
}

/// Execute a single command, writing the results to `out`.
pub fn run<W: Write>(command: &Command, out: &mut W) -> Result<(), CliError> {
    match command {
        Command::Scale { tonic, name } => {
            let name = name.join(" ");
            debug!("spelling the {} {} scale", tonic, name);
            let notes = tonic.scale(&name).context(Lookup)?;
            writeln!(out, "{}", join(&notes)).context(Output)?;
        }
        Command::Add { note, interval } => {
            writeln!(out, "{}", *note + *interval).context(Output)?;
        }
        Command::Sub { note, interval } => {
            writeln!(out, "{}", *note - *interval).context(Output)?;
        }
        Command::Fifths => {
            let circle = scale::circle_of_fifths();
            writeln!(out, "{}", join(&circle)).context(Output)?;
        }
        Command::Scales => {
            for (name, degrees) in scale::all() {
                let degrees: Vec<String> = degrees.iter().map(|i| i.to_string()).collect();
                writeln!(out, "{}: {}", name, degrees.join(" ")).context(Output)?;
            }
        }
        Command::Intervals => {
            for interval in interval::all() {
                writeln!(out, "{}: {}", interval, interval.semitones()).context(Output)?;
            }
        }
    }
    Ok(())
}

fn join(notes: &[Note]) -> String {
    notes
        .iter()
        .map(|note| note.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

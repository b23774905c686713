use std::io::{self, BufRead, BufReader, Write};

use serde::{Deserialize, Serialize};

use reduce_helper::protocol::{emit, init_stderr_logger};
use reduce_helper::{candidates, is_reducible, Dictionary, ReduceError};

const TICK_EVERY: usize = 256;

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Msg {
    Init {
        words: Vec<String>,
        word_list_hash: Option<String>, // driver's fingerprint, checked if present
    },
    Work {
        start: usize,
        end: usize,
    },
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum Out {
    Ready { candidates: usize, word_list_hash: String },
    Tick { progress: usize, total: usize },
    Found { word: String },
    Stats { checked: usize, found: usize },
    Done { total: usize },
    Error { message: String },
}

struct State {
    dictionary: Dictionary,
    candidates: Vec<String>, // sorted, so index ranges agree across workers
}

fn init(words: Vec<String>, expected_hash: Option<String>) -> Result<(State, String), ReduceError> {
    let dictionary = Dictionary::from_words(words);
    let hash = dictionary.fingerprint();
    if let Some(expected) = expected_hash {
        if expected != hash {
            return Err(ReduceError::HashMismatch { expected, actual: hash });
        }
    }
    let candidates = candidates(&dictionary).into_iter().map(str::to_owned).collect();
    Ok((State { dictionary, candidates }, hash))
}

fn run_work_streaming<W: Write>(state: &State, start: usize, end: usize, writer: &mut W) -> io::Result<()> {
    let end = end.min(state.candidates.len());
    let start = start.min(end);
    let total = end - start;
    log::debug!("work [{start}, {end}) of {}", state.candidates.len());

    let mut found = 0usize;
    for (progress, word) in state.candidates[start..end].iter().enumerate() {
        if is_reducible(&state.dictionary, word) {
            emit(writer, &Out::Found { word: word.clone() })?;
            found += 1;
        }
        let progress = progress + 1;
        if progress % TICK_EVERY == 0 && progress != total {
            emit(writer, &Out::Tick { progress, total })?;
        }
    }
    emit(writer, &Out::Tick { progress: total, total })?;
    emit(writer, &Out::Stats { checked: total, found })?;
    emit(writer, &Out::Done { total })
}

fn main() -> io::Result<()> {
    init_stderr_logger("warn");

    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let mut line = String::new();
    let mut state_opt: Option<State> = None;
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        let msg: Msg = match serde_json::from_str(&line) {
            Ok(m) => m,
            Err(e) => {
                emit(&mut stdout, &Out::Error { message: format!("bad json: {e}") })?;
                continue;
            }
        };
        match msg {
            Msg::Init { words, word_list_hash } => match init(words, word_list_hash) {
                Ok((state, hash)) => {
                    let ready = Out::Ready { candidates: state.candidates.len(), word_list_hash: hash };
                    state_opt = Some(state);
                    emit(&mut stdout, &ready)?;
                }
                Err(e) => {
                    log::warn!("init rejected: {e}");
                    emit(&mut stdout, &Out::Error { message: e.to_string() })?;
                }
            },
            Msg::Work { start, end } => {
                if let Some(ref state) = state_opt {
                    run_work_streaming(state, start, end, &mut stdout)?;
                } else {
                    emit(&mut stdout, &Out::Error { message: "not initialized".into() })?;
                }
            }
        }
    }
    Ok(())
}

use std::io::{self, BufRead, BufReader};

use serde::{Deserialize, Serialize};

use reduce_helper::protocol::{emit, init_stderr_logger};
use reduce_helper::{reduction_chain, Dictionary};

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Msg {
    Init { words: Vec<String> },
    Check { word: String },
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum Out {
    Ready { words: usize },
    Reducible { word: String, chain: Vec<String> },
    Irreducible { word: String, reason: String },
    Error { message: String },
}

fn check(word: &str, dictionary: &Dictionary) -> Result<Vec<String>, String> {
    if word.is_empty() {
        return Err("word is empty".into());
    }
    if !word.contains('A') && !word.contains('I') {
        return Err(format!("\"{word}\" contains neither A nor I"));
    }
    reduction_chain(dictionary, word)
        .ok_or_else(|| format!("no chain of single-letter deletions from \"{word}\" reaches A or I"))
}

fn main() -> io::Result<()> {
    init_stderr_logger("warn");

    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let mut line = String::new();
    let mut dict_opt: Option<Dictionary> = None;
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
            Msg::Init { words } => {
                let dictionary = Dictionary::from_words(words);
                let ready = Out::Ready { words: dictionary.len() };
                dict_opt = Some(dictionary);
                emit(&mut stdout, &ready)?;
            }
            Msg::Check { word } => {
                if let Some(ref dictionary) = dict_opt {
                    let word = word.trim().to_ascii_uppercase();
                    match check(&word, dictionary) {
                        Ok(chain) => emit(&mut stdout, &Out::Reducible { word, chain })?,
                        Err(reason) => emit(&mut stdout, &Out::Irreducible { word, reason })?,
                    }
                } else {
                    emit(&mut stdout, &Out::Error { message: "not initialized".into() })?;
                }
            }
        }
    }
    Ok(())
}

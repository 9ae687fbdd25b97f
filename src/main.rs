use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use structopt::StructOpt;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

use boggle_tools::boggle::play::play;
use boggle_tools::{find_valid_words, find_valid_words_parallel, Board, FileFormat, Index, Wordlist};

/// Spell-check against a word list and solve Boggle boards with it.
#[derive(StructOpt)]
#[structopt(name = "boggle-tools")]
struct Cli {
    /// Log more (-v for info, -vv for debug). RUST_LOG overrides this.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
struct DictionaryArgs {
    /// Word list, one word per line
    #[structopt(short, long, parse(from_os_str))]
    dict: PathBuf,
    /// Column separator, if the list has more than one column
    #[structopt(long)]
    delimiter: Option<char>,
    /// Which column holds the word (0-based)
    #[structopt(long, default_value = "0")]
    column: usize,
    /// Skip lines that aren't plain a-z words instead of failing
    #[structopt(long)]
    skip_invalid: bool,
}

impl DictionaryArgs {
    fn load(&self) -> Result<Wordlist> {
        let format = FileFormat::builder()
            .delimiter(self.delimiter)
            .word_column(self.column)
            .skip_invalid(self.skip_invalid)
            .build();
        Wordlist::from_file(&self.dict, &format)
            .with_context(|| format!("error loading word list {:?}", self.dict))
    }
}

#[derive(StructOpt)]
enum Command {
    /// Print every dictionary word on a board
    Solve {
        #[structopt(flatten)]
        dict: DictionaryArgs,
        /// Board file: one row per line, tiles separated by tabs
        #[structopt(short, long, parse(from_os_str))]
        board: PathBuf,
        /// Search start cells in parallel
        #[structopt(long)]
        parallel: bool,
    },
    /// Play one round against the solver
    Play {
        #[structopt(flatten)]
        dict: DictionaryArgs,
        #[structopt(short, long, parse(from_os_str))]
        board: PathBuf,
    },
    /// Say whether each word is in the dictionary
    Check {
        #[structopt(flatten)]
        dict: DictionaryArgs,
        words: Vec<String>,
    },
    /// Suggest a dictionary word for each word given
    Suggest {
        #[structopt(flatten)]
        dict: DictionaryArgs,
        words: Vec<String>,
    },
    /// Delete words, then print what is left of the tree
    Delete {
        #[structopt(flatten)]
        dict: DictionaryArgs,
        words: Vec<String>,
    },
    /// Print the prefix tree
    Tree {
        #[structopt(flatten)]
        dict: DictionaryArgs,
        /// Print as JSON records instead of the indented layout
        #[structopt(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Cli::from_args();

    // Logging setup
    let default_level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    let filter_layer = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env()
        .context("error reading logging directives")?;
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    match args.command {
        Command::Solve { dict, board, parallel } => {
            let wordlist = dict.load()?;
            let board = load_board(&board)?;
            let words = if parallel {
                find_valid_words_parallel(&board, &wordlist)?
            } else {
                find_valid_words(&board, &wordlist)?
            };
            print!("{}", board);
            for word in &words {
                println!("{}", word);
            }
        }
        Command::Play { dict, board } => {
            let wordlist = dict.load()?;
            let board = load_board(&board)?;
            play(&board, &wordlist, io::stdin().lock(), io::stdout().lock())?;
        }
        Command::Check { dict, words } => {
            let wordlist = dict.load()?;
            for word in &words {
                println!("{} {}", word, wordlist.contains(word)?);
            }
        }
        Command::Suggest { dict, words } => {
            let wordlist = dict.load()?;
            for word in &words {
                match wordlist.suggest(word)? {
                    Some(suggestion) => println!("{} {}", word, suggestion),
                    None => println!("{} -", word),
                }
            }
        }
        Command::Delete { dict, words } => {
            let mut wordlist = dict.load()?;
            for word in &words {
                if !wordlist.delete(word)? {
                    eprintln!("{} is not in the dictionary", word);
                }
            }
            print!("{}", wordlist);
        }
        Command::Tree { dict, json } => {
            let wordlist = dict.load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(wordlist.trie())?);
            } else {
                print!("{}", wordlist);
            }
        }
    }
    Ok(())
}

fn load_board(path: &Path) -> Result<Board> {
    Board::from_file(path).with_context(|| format!("error loading board {:?}", path))
}

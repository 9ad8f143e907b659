//! Prints the number of distinct anagrams of one word.
//!
//! ```text
//! $ anagrams aab
//! 3
//! $ anagrams a1b
//! error: non-alphabetic character '1' at index 1
//! ```

use std::process::ExitCode;

use anagramd::count_anagrams;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "anagrams", version, about = "Count the distinct anagrams of a word")]
struct Args {
    /// ASCII letters only; case is ignored.
    word: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match count_anagrams(&args.word) {
        Ok(total) => {
            println!("{total}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

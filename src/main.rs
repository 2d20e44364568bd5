#[macro_use]
extern crate log;

use std::io::{self, BufRead};
use std::process;

use ipidseq::classify::Classifier;
use ipidseq::ipid::Ipid;

/// fatal failure reading standard input.
const EXIT_READ_FAILURE: i32 = 1;
/// blank, malformed or out-of-range input line.
const EXIT_BAD_INPUT: i32 = 2;

fn main() {
    pretty_env_logger::init();

    let stdin = io::stdin();
    let code = run(stdin.lock());

    process::exit(code);
}

/// Read one IPID per line, echo each consumed value, print the verdict
/// line and return the process exit status. Stops reading as soon as the
/// verdict is known.
fn run<R: BufRead>(input: R) -> i32 {
    let mut classifier = Classifier::new();

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error: failed to read stdin: {}", err);

                return EXIT_READ_FAILURE;
            }
        };

        let ipid = match line.trim().parse::<Ipid>() {
            Ok(ipid) => ipid,
            Err(err) => {
                error!("bad input line `{}`: {}", line, err);

                println!("error: no input");

                return EXIT_BAD_INPUT;
            }
        };

        print!("{}, ", ipid);

        if let Some(verdict) = classifier.observe(ipid) {
            println!("{}", verdict);

            return verdict.exit_code();
        }
    }

    let verdict = classifier.finish();

    println!("{}", verdict);

    verdict.exit_code()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_on(input: &str) -> i32 {
        let _ = pretty_env_logger::try_init();

        run(Cursor::new(input))
    }

    #[test]
    fn test_global_input() {
        assert_eq!(run_on("10\n11\n12\n13\n"), 0);
    }

    #[test]
    fn test_non_global_input() {
        assert_eq!(run_on("10\n11\n12\n50\n"), 3);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(run_on("42\n"), 4);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(run_on(""), 5);
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(run_on("10\n\n11\n"), EXIT_BAD_INPUT);
    }

    #[test]
    fn test_malformed_line() {
        assert_eq!(run_on("10\nxyz\n"), EXIT_BAD_INPUT);
    }

    #[test]
    fn test_out_of_range_value() {
        assert_eq!(run_on("10\n65536\n"), EXIT_BAD_INPUT);
    }

    #[test]
    fn test_missing_trailing_newline() {
        assert_eq!(run_on("10\n11"), 0);
    }

    #[test]
    fn test_wraparound_input() {
        assert_eq!(run_on("65530\n3\n4\n6\n"), 0);
    }
}

//! Line-oriented interactive session
//!
//! Each accepted input runs one full resolve → evolve → project → render
//! cycle on the calling thread; a failed resolution prints the error in
//! place of the plot and the loop keeps accepting input.

use crate::frame::Session;
use bloq_gates::Selector;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  gate <I|X|Y|Z|H|custom>   select a named gate
  matrix <literal>          set a custom 2x2 matrix, e.g. [[0,1],[1,0]]
  time <0..1>               set the interpolation parameter t
  steps <n>                 set the number of orbit samples
  show                      redraw the current frame
  help                      show this text
  quit                      leave";

enum Command {
    Gate(Selector),
    Matrix(String),
    Time(f64),
    Steps(usize),
    Show,
    Help,
    Quit,
}

/// Parse one input line; `Ok(None)` means a blank line
fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "gate" => match Selector::from_name(rest) {
            Some(selector) => Ok(Some(Command::Gate(selector))),
            None => Err(format!(
                "unknown gate '{}' (expected I, X, Y, Z, H, or custom)",
                rest
            )),
        },
        "matrix" => {
            if rest.is_empty() {
                Err("usage: matrix [[a,b],[c,d]]".into())
            } else {
                Ok(Some(Command::Matrix(rest.to_string())))
            }
        }
        "time" | "t" => {
            let value: f64 = rest
                .parse()
                .map_err(|_| format!("'{}' is not a number", rest))?;
            if (0.0..=1.0).contains(&value) {
                Ok(Some(Command::Time(value)))
            } else {
                Err(format!("time {} is outside [0, 1]", value))
            }
        }
        "steps" => {
            let value: usize = rest
                .parse()
                .map_err(|_| format!("'{}' is not a whole number", rest))?;
            if value == 0 {
                Err("steps must be at least 1".into())
            } else {
                Ok(Some(Command::Steps(value)))
            }
        }
        "show" => Ok(Some(Command::Show)),
        "help" | "?" => Ok(Some(Command::Help)),
        "quit" | "exit" | "q" => Ok(Some(Command::Quit)),
        other => Err(format!("unknown command '{}' (try 'help')", other)),
    }
}

/// Print the current frame, or the resolution error in its place
fn draw(session: &Session) {
    match session.render_frame() {
        Ok(frame) => println!("{}", frame),
        Err(err) => println!("{}", err),
    }
}

pub fn run(session: &mut Session) -> anyhow::Result<()> {
    println!("bloq interactive session ('help' lists commands)\n");
    draw(session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("bloq> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => println!("{}", HELP),
            Ok(Some(Command::Show)) => draw(session),
            Ok(Some(command)) => {
                match command {
                    Command::Gate(selector) => session.selector = selector,
                    Command::Matrix(text) => {
                        session.custom_text = text;
                        session.selector = Selector::Custom;
                    }
                    Command::Time(value) => session.time = value,
                    Command::Steps(value) => session.steps = value,
                    Command::Show | Command::Help | Command::Quit => unreachable!(),
                }
                draw(session);
            }
            Err(message) => println!("{}", message),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gate_command() {
        assert!(matches!(
            parse_command("gate H"),
            Ok(Some(Command::Gate(Selector::H)))
        ));
        assert!(matches!(
            parse_command("  gate  x "),
            Ok(Some(Command::Gate(Selector::X)))
        ));
        assert!(parse_command("gate CNOT").is_err());
    }

    #[test]
    fn test_parse_matrix_keeps_rest_of_line() {
        match parse_command("matrix [[0, 1], [1, 0]]") {
            Ok(Some(Command::Matrix(text))) => assert_eq!(text, "[[0, 1], [1, 0]]"),
            other => panic!("unexpected parse: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_parse_time_enforces_range() {
        assert!(matches!(
            parse_command("time 0.5"),
            Ok(Some(Command::Time(t))) if (t - 0.5).abs() < 1e-12
        ));
        assert!(parse_command("time 1.5").is_err());
        assert!(parse_command("time -0.1").is_err());
        assert!(parse_command("time soon").is_err());
    }

    #[test]
    fn test_parse_steps_rejects_zero() {
        assert!(matches!(
            parse_command("steps 80"),
            Ok(Some(Command::Steps(80)))
        ));
        assert!(parse_command("steps 0").is_err());
    }

    #[test]
    fn test_blank_and_unknown_lines() {
        assert!(matches!(parse_command("   "), Ok(None)));
        assert!(parse_command("draw").is_err());
    }
}

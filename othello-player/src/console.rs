//! Textual move input for interactive agents.

use crate::AgentError;
use othello_rules::{Coordinate, LegalMoveSet};
use std::fmt;
use std::io::{self, BufRead, Write};
use tracing::debug;

enum Input {
    /// Process stdin, shared by every console reading from it.
    Stdin,
    Reader(Box<dyn BufRead>),
}

/// Reads squares typed by a person, re-prompting until one is legal.
pub struct Console {
    input: Input,
    output: Box<dyn Write>,
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = match self.input {
            Input::Stdin => "stdin",
            Input::Reader(_) => "reader",
        };
        f.debug_struct("Console").field("input", &input).finish()
    }
}

impl Console {
    /// A console over any line source and prompt sink.
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Input::Reader(Box::new(input)),
            output: Box::new(output),
        }
    }

    /// A console reading stdin and prompting on stdout.
    pub fn stdio() -> Self {
        Self {
            input: Input::Stdin,
            output: Box::new(io::stdout()),
        }
    }

    fn read_line(&mut self, line: &mut String) -> io::Result<usize> {
        match &mut self.input {
            Input::Stdin => io::stdin().read_line(line),
            Input::Reader(reader) => reader.read_line(line),
        }
    }

    /// Block until the person enters a square from `moves`.
    /// Malformed and illegal squares are reported and asked for again.
    pub fn prompt_move(&mut self, moves: &LegalMoveSet) -> Result<Coordinate, AgentError> {
        loop {
            write!(self.output, "Choose a square: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.read_line(&mut line)? == 0 {
                return Err(AgentError::InputClosed);
            }

            match parse_square(line.trim(), moves) {
                Ok(dest) => return Ok(dest),
                Err(err) => {
                    debug!(input = line.trim(), %err, "rejected square");
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }
}

/// Parse square notation and check it against the legal moves.
pub fn parse_square(input: &str, moves: &LegalMoveSet) -> Result<Coordinate, AgentError> {
    let dest: Coordinate = input.parse()?;
    if moves.contains(dest) {
        Ok(dest)
    } else {
        Err(AgentError::IllegalSquare {
            square: dest,
            legal: moves.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_rules::Board;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;

    /// A prompt sink the test can read back after handing it to a console.
    #[derive(Clone, Default)]
    struct Transcript(Rc<RefCell<Vec<u8>>>);

    impl Write for Transcript {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Transcript {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    fn opening_moves() -> LegalMoveSet {
        LegalMoveSet::generate(&Board::initial())
    }

    #[test]
    fn parse_square_accepts_legal_move() {
        let moves = opening_moves();
        assert_eq!(
            parse_square("D6", &moves).unwrap(),
            Coordinate::from_coords(2, 3)
        );
    }

    #[test]
    fn parse_square_rejects_bad_input() {
        let moves = opening_moves();
        assert!(matches!(parse_square("z9", &moves), Err(AgentError::Parse(_))));
        assert!(matches!(
            parse_square("a1", &moves),
            Err(AgentError::IllegalSquare { .. })
        ));
    }

    #[test]
    fn prompt_retries_until_legal() {
        let transcript = Transcript::default();
        let input = Cursor::new("hello\nc3\n  f4 \n");
        let mut console = Console::new(input, transcript.clone());

        let dest = console.prompt_move(&opening_moves()).unwrap();
        assert_eq!(dest, Coordinate::from_coords(4, 5));

        let text = transcript.text();
        assert_eq!(text.matches("Choose a square: ").count(), 3);
        assert!(text.contains("enter a square like 'd3'"));
        assert!(text.contains("c3 is not a legal move (legal: [d6, c5, f4, e3])"));
    }

    #[test]
    fn prompt_reports_closed_input() {
        let mut console = Console::new(Cursor::new("x\n"), io::sink());
        assert!(matches!(
            console.prompt_move(&opening_moves()),
            Err(AgentError::InputClosed)
        ));
    }
}

use std::io::{BufRead, Write};

use extremum_solvers::Method;

use crate::{CliError, Result};

/// Question-and-answer helper over any line reader and writer.
///
/// Every question is written and flushed before reading, and each answer is
/// one line with surrounding whitespace removed.
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output, for printing results between questions.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompt, returning the output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks `question` and returns the trimmed answer.
    ///
    /// # Errors
    ///
    /// Returns `CliError::UnexpectedEof` if the input is exhausted, or an I/O
    /// error from either stream.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::UnexpectedEof {
                prompt: question.trim().to_owned(),
            });
        }

        Ok(line.trim().to_owned())
    }

    /// Asks for a floating-point number.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidNumber` if the answer does not parse.
    pub fn ask_number(&mut self, question: &str) -> Result<f64> {
        let answer = self.ask(question)?;
        answer
            .parse()
            .map_err(|_| CliError::InvalidNumber { input: answer })
    }

    /// Asks a yes/no question; `yes`, `y`, `no` and `n` are accepted in any case.
    ///
    /// # Errors
    ///
    /// Returns `CliError::UnrecognizedResponse` for any other answer.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?;
        match answer.to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(true),
            "no" | "n" => Ok(false),
            _ => Err(CliError::UnrecognizedResponse { response: answer }),
        }
    }

    /// Asks for a search method by name.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Search` wrapping `UnknownMethod` for an unknown name.
    pub fn ask_method(&mut self, question: &str) -> Result<Method> {
        Ok(self.ask(question)?.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use approx::assert_relative_eq;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn writes_question_and_trims_answer() {
        let mut prompt = prompt("  hello \n");
        assert_eq!(prompt.ask("Say: ").unwrap(), "hello");
        assert_eq!(prompt.into_output(), b"Say: ");
    }

    #[test]
    fn parses_numbers() {
        let mut prompt = prompt("-1.5\nabc\n");
        assert_relative_eq!(prompt.ask_number("a: ").unwrap(), -1.5);
        assert!(matches!(
            prompt.ask_number("b: "),
            Err(CliError::InvalidNumber { input }) if input == "abc"
        ));
    }

    #[test]
    fn accepts_yes_no_literals() {
        let mut prompt = prompt("yes\nN\ny\nno\nmaybe\n");
        assert!(prompt.ask_yes_no("?").unwrap());
        assert!(!prompt.ask_yes_no("?").unwrap());
        assert!(prompt.ask_yes_no("?").unwrap());
        assert!(!prompt.ask_yes_no("?").unwrap());
        assert!(matches!(
            prompt.ask_yes_no("?"),
            Err(CliError::UnrecognizedResponse { response }) if response == "maybe"
        ));
    }

    #[test]
    fn parses_methods() {
        let mut prompt = prompt("golden_ratio\nnewton\n");
        assert_eq!(prompt.ask_method("m: ").unwrap(), Method::GoldenSection);
        assert!(matches!(
            prompt.ask_method("m: "),
            Err(CliError::Search(extremum_solvers::Error::UnknownMethod { .. }))
        ));
    }

    #[test]
    fn eof_is_an_error() {
        let mut prompt = prompt("");
        assert!(matches!(
            prompt.ask("Left bound: "),
            Err(CliError::UnexpectedEof { prompt }) if prompt == "Left bound:"
        ));
    }
}

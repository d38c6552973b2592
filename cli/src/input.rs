use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

/// Prompts for a maze dimension until a line parses as a whole number.
///
/// Range checks are left to [`mazewalk_core::MazeConfig`], so zero and negative numbers are returned as-is.
pub fn read_dimension<R, W>(input: &mut R, output: &mut W, name: &str) -> Result<i64>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "Enter maze {name}: ").context("Could not write prompt")?;
        output.flush().context("Could not write prompt")?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Could not read from standard input")?;
        if read == 0 {
            bail!("Input ended before a maze {name} was entered");
        }

        let line = line.trim();
        match line.parse() {
            Ok(value) => return Ok(value),
            Err(err) => {
                log::debug!("Rejected {name} input {line:?}: {err}");
                writeln!(output, "{line:?} is not a whole number, try again")
                    .context("Could not write prompt")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(text: &str) -> (Result<i64>, String) {
        let mut input = Cursor::new(text.as_bytes());
        let mut output = Vec::new();
        let value = read_dimension(&mut input, &mut output, "height");
        (value, String::from_utf8(output).unwrap())
    }

    #[test]
    fn reads_a_number_after_prompting() {
        let (value, output) = read("12\n");

        assert_eq!(value.unwrap(), 12);
        assert_eq!(output, "Enter maze height: ");
    }

    #[test]
    fn asks_again_on_garbage() {
        let (value, output) = read("twelve\n\n 7 \n");

        assert_eq!(value.unwrap(), 7);
        assert_eq!(output.matches("Enter maze height: ").count(), 3);
        assert!(output.contains("\"twelve\" is not a whole number"));
    }

    #[test]
    fn passes_non_positive_numbers_through() {
        let (value, _) = read("-4\n");

        assert_eq!(value.unwrap(), -4);
    }

    #[test]
    fn fails_when_input_ends() {
        let (value, _) = read("abc\n");

        let err = value.unwrap_err();
        assert!(err.to_string().contains("Input ended"));
    }
}

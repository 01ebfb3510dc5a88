use std::io::{self, BufRead, Write};

/// Interactive input helpers. Each prompt re-asks until it gets valid input,
/// so invalid counts and junk answers never reach the graph queries.
/// Generic over the reader/writer to keep them testable.

pub fn read_positive_count(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
) -> io::Result<usize> {
    loop {
        let answer = ask(input, output, question)?;
        match answer.parse::<usize>() {
            Ok(count) if count > 0 => return Ok(count),
            _ => writeln!(output, "Invalid input. Please enter a positive number.")?,
        }
    }
}

pub fn read_yes_no(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
) -> io::Result<bool> {
    loop {
        match ask(input, output, question)?.to_lowercase().as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => writeln!(output, "Invalid input. Please enter 'yes' or 'no'.")?,
        }
    }
}

pub fn read_nonempty_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
) -> io::Result<String> {
    loop {
        let answer = ask(input, output, question)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
    }
}

fn ask(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> io::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

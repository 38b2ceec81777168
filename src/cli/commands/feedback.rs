//! Feedback command handler

use super::fail;
use course_buddy::core::feedback_store::FeedbackRepository;
use course_buddy::core::models::{Catalog, FeedbackEntry};
use course_buddy::{warn, Error};
use std::io::{self, BufRead, Write};

const PROBLEMS_PROMPT: &str = "What were the problems with exams and assignments? ";
const PREREQ_PROMPT: &str =
    "Recommended course(s) you should take before this one (list course numbers): ";

/// Record feedback for `code`, prompting for any field not given as a flag
pub fn run(
    code: &str,
    problems: Option<String>,
    recommended_prereq: Option<String>,
    catalog: &Catalog,
    repo: &FeedbackRepository,
) {
    let course = match catalog.lookup(code) {
        Ok(course) => course,
        Err(e) => {
            warn!("Feedback submitted for unknown course '{code}'");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut answer = |given: Option<String>, question: &str| {
        given.map_or_else(
            || prompt(&mut input, &mut output, question),
            |text| Ok(text.trim().to_string()),
        )
    };

    let entry = match (
        answer(problems, PROBLEMS_PROMPT),
        answer(recommended_prereq, PREREQ_PROMPT),
    ) {
        (Ok(problems), Ok(prereq)) => FeedbackEntry::new(&problems, &prereq),
        (Err(e), _) | (_, Err(e)) => fail(&Error::from(e)),
    };

    let mut store = repo.load().unwrap_or_else(|e| fail(&e));
    if let Err(e) = repo.append_entry(&mut store, &course.code, entry) {
        fail(&e);
    }

    println!("Your feedback has been saved. Thank you!");
}

/// Ask `question` on `output` and read one trimmed line from `input`
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_trimmed_line() {
        let mut input = Cursor::new("  Midterm 2 \nignored\n");
        let mut output = Vec::new();

        let answer = prompt(&mut input, &mut output, PROBLEMS_PROMPT).unwrap();
        assert_eq!(answer, "Midterm 2");
        assert_eq!(String::from_utf8(output).unwrap(), PROBLEMS_PROMPT);
    }

    #[test]
    fn test_prompt_at_eof_is_empty() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(prompt(&mut input, &mut output, PREREQ_PROMPT).unwrap(), "");
    }
}

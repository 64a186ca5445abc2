//! Answer sheet parsing for `--answers`
//!
//! Format: `Q1=A,Q2=c,Q3=4`. Choices are letters (case-insensitive) or
//! 1-based numbers, both referring to the order the choices were shown in.

use mock_exam_domain::AnswerSheet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnswerParseError {
    #[error("Malformed answer '{0}': expected ID=CHOICE")]
    Malformed(String),

    #[error("Invalid choice '{choice}' for {question_id}: use a letter or a number from 1")]
    InvalidChoice { question_id: String, choice: String },

    #[error("Question {0} answered more than once")]
    Duplicate(String),
}

/// Parse an answer sheet into display positions keyed by question id.
pub fn parse_answers(input: &str) -> Result<AnswerSheet, AnswerParseError> {
    let mut sheet = AnswerSheet::new();

    for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (id, choice) = entry
            .split_once('=')
            .map(|(id, choice)| (id.trim(), choice.trim()))
            .filter(|(id, choice)| !id.is_empty() && !choice.is_empty())
            .ok_or_else(|| AnswerParseError::Malformed(entry.to_string()))?;

        let index = parse_choice(choice).ok_or_else(|| AnswerParseError::InvalidChoice {
            question_id: id.to_string(),
            choice: choice.to_string(),
        })?;

        if sheet.insert(id.to_string(), index).is_some() {
            return Err(AnswerParseError::Duplicate(id.to_string()));
        }
    }

    Ok(sheet)
}

fn parse_choice(choice: &str) -> Option<usize> {
    if let Ok(number) = choice.parse::<usize>() {
        return number.checked_sub(1);
    }
    let mut chars = choice.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            Some(usize::from(c.to_ascii_uppercase() as u8 - b'A'))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letters_and_numbers() {
        let sheet = parse_answers("Q1=A, Q2=c ,Q3=4").unwrap();
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet["Q1"], 0);
        assert_eq!(sheet["Q2"], 2);
        assert_eq!(sheet["Q3"], 3);
    }

    #[test]
    fn test_parse_empty_is_empty_sheet() {
        assert!(parse_answers("").unwrap().is_empty());
        assert!(parse_answers(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(
            parse_answers("Q1").unwrap_err(),
            AnswerParseError::Malformed("Q1".to_string())
        );
        assert!(matches!(
            parse_answers("=A").unwrap_err(),
            AnswerParseError::Malformed(_)
        ));
    }

    #[test]
    fn test_parse_invalid_choice() {
        for bad in ["Q1=0", "Q1=AB", "Q1=?"] {
            assert!(
                matches!(parse_answers(bad), Err(AnswerParseError::InvalidChoice { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_duplicate() {
        assert_eq!(
            parse_answers("Q1=A,Q1=B").unwrap_err(),
            AnswerParseError::Duplicate("Q1".to_string())
        );
    }
}

//! Questions and exams in display order

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question ready to be shown, with choices in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentedQuestion {
    pub id: String,
    pub prompt: String,
    pub choices: Vec<String>,
    /// Position of the correct choice in `choices`
    pub answer: usize,
    /// `order[k]` is the authored position of `choices[k]`
    pub order: Vec<usize>,
    pub shuffled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl PresentedQuestion {
    /// Check a selected display position against the correct one.
    pub fn is_correct(&self, selected: usize) -> Result<bool, DomainError> {
        if selected >= self.choices.len() {
            return Err(DomainError::SelectionOutOfRange {
                question_id: self.id.clone(),
                selected,
                choices: self.choices.len(),
            });
        }
        Ok(selected == self.answer)
    }

    /// Authored position of the choice shown at `display_index`
    pub fn original_index(&self, display_index: usize) -> Option<usize> {
        self.order.get(display_index).copied()
    }

    /// Letter label for a display position (`A`, `B`, ...)
    pub fn label(index: usize) -> String {
        match u8::try_from(index) {
            Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
            _ => (index + 1).to_string(),
        }
    }
}

/// An exam whose questions have been prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentedExam {
    pub id: String,
    pub title: String,
    pub questions: Vec<PresentedQuestion>,
}

impl PresentedExam {
    pub fn question(&self, id: &str) -> Option<&PresentedQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::question::Question;

    fn presented() -> PresentedQuestion {
        Question::new(
            "Q1",
            "Pick C",
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
            2,
        )
        .present(true)
        .unwrap()
    }

    #[test]
    fn test_is_correct() {
        let q = presented();
        assert!(q.is_correct(0).unwrap());
        assert!(!q.is_correct(1).unwrap());
    }

    #[test]
    fn test_is_correct_out_of_range() {
        let err = presented().is_correct(4).unwrap_err();
        assert_eq!(
            err,
            DomainError::SelectionOutOfRange {
                question_id: "Q1".to_string(),
                selected: 4,
                choices: 4,
            }
        );
    }

    #[test]
    fn test_original_index() {
        let q = presented();
        assert_eq!(q.original_index(0), Some(2));
        assert_eq!(q.original_index(3), Some(1));
        assert_eq!(q.original_index(4), None);
    }

    #[test]
    fn test_label() {
        assert_eq!(PresentedQuestion::label(0), "A");
        assert_eq!(PresentedQuestion::label(3), "D");
        assert_eq!(PresentedQuestion::label(26), "27");
    }
}

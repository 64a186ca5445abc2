//! Question entity

use crate::core::error::DomainError;
use crate::exam::presented::PresentedQuestion;
use crate::shuffle::{should_shuffle, shuffle_with_tracked_index};
use serde::{Deserialize, Serialize};

/// A multiple-choice question as written in the question bank.
///
/// `answer` is the position of the correct choice in `choices` as authored.
/// The question id doubles as the shuffle seed, so a question is always
/// presented in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub choices: Vec<String>,
    pub answer: usize,
    /// Image whose labels refer to choices by position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice_image: Option<String>,
    /// Single image that contains both the prompt and the choices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Question {
    /// Create a text-only question
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        choices: Vec<String>,
        answer: usize,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            choices,
            answer,
            choice_image: None,
            composite_image: None,
            explanation: None,
            category: None,
        }
    }

    pub fn with_choice_image(mut self, path: impl Into<String>) -> Self {
        self.choice_image = Some(path.into());
        self
    }

    pub fn with_composite_image(mut self, path: impl Into<String>) -> Self {
        self.composite_image = Some(path.into());
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Check the question is answerable.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::invalid_question(&self.id, "id cannot be empty"));
        }
        if self.choices.len() < 2 {
            return Err(DomainError::invalid_question(
                &self.id,
                format!("needs at least 2 choices, found {}", self.choices.len()),
            ));
        }
        if let Some(pos) = self.choices.iter().position(|c| c.trim().is_empty()) {
            return Err(DomainError::invalid_question(
                &self.id,
                format!("choice {pos} is blank"),
            ));
        }
        if self.answer >= self.choices.len() {
            return Err(DomainError::invalid_question(
                &self.id,
                format!(
                    "answer {} is out of range for {} choices",
                    self.answer,
                    self.choices.len()
                ),
            ));
        }
        Ok(())
    }

    /// Whether the choices of this question may be reordered
    pub fn should_shuffle(&self) -> bool {
        should_shuffle(self.choice_image.is_some(), self.composite_image.is_some())
    }

    /// Produce the display form of this question.
    ///
    /// Choices are shuffled (seeded by the question id) only when
    /// `shuffle_choices` is set and the question has no positional images.
    pub fn present(&self, shuffle_choices: bool) -> Result<PresentedQuestion, DomainError> {
        let (choices, answer, order, shuffled) = if shuffle_choices && self.should_shuffle() {
            let result = shuffle_with_tracked_index(&self.choices, self.answer, &self.id)?;
            (result.items, result.tracked_index, result.order, true)
        } else {
            if self.answer >= self.choices.len() {
                return Err(DomainError::TrackedIndexOutOfRange {
                    index: self.answer,
                    len: self.choices.len(),
                });
            }
            let order = (0..self.choices.len()).collect();
            (self.choices.clone(), self.answer, order, false)
        };

        Ok(PresentedQuestion {
            id: self.id.clone(),
            prompt: self.prompt.clone(),
            choices,
            answer,
            order,
            shuffled,
            choice_image: self.choice_image.clone(),
            composite_image: self.composite_image.clone(),
            explanation: self.explanation.clone(),
            category: self.category.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            "Q1",
            "Which is prime?",
            vec!["4".into(), "6".into(), "7".into(), "9".into()],
            2,
        )
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_answer() {
        let mut q = sample();
        q.answer = 4;
        assert!(matches!(q.validate(), Err(DomainError::InvalidQuestion { .. })));
    }

    #[test]
    fn test_validate_rejects_single_choice() {
        let q = Question::new("Q2", "?", vec!["only".into()], 0);
        let err = q.validate().unwrap_err();
        assert!(err.to_string().contains("at least 2 choices"));
    }

    #[test]
    fn test_validate_rejects_blank_choice_and_id() {
        let q = Question::new("Q3", "?", vec!["a".into(), "  ".into()], 0);
        assert!(q.validate().unwrap_err().to_string().contains("choice 1 is blank"));

        let q = Question::new(" ", "?", vec!["a".into(), "b".into()], 0);
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_present_shuffles_by_id() {
        let presented = sample().present(true).unwrap();
        assert!(presented.shuffled);
        assert_eq!(presented.choices, vec!["7", "4", "9", "6"]);
        assert_eq!(presented.answer, 0);
        assert_eq!(presented.choices[presented.answer], "7");
    }

    #[test]
    fn test_present_without_shuffle_keeps_order() {
        let presented = sample().present(false).unwrap();
        assert!(!presented.shuffled);
        assert_eq!(presented.choices, sample().choices);
        assert_eq!(presented.answer, 2);
        assert_eq!(presented.order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_image_questions_keep_order() {
        let with_choice_image = sample().with_choice_image("/img/q1.png");
        assert!(!with_choice_image.should_shuffle());
        let presented = with_choice_image.present(true).unwrap();
        assert!(!presented.shuffled);
        assert_eq!(presented.choices, sample().choices);

        let composite = sample().with_composite_image("/img/q1-all.png");
        assert!(!composite.present(true).unwrap().shuffled);
    }

    #[test]
    fn test_present_reports_bad_answer_either_way() {
        let mut q = sample();
        q.answer = 10;
        assert!(q.present(true).unwrap_err().is_index_error());
        assert!(q.present(false).unwrap_err().is_index_error());
    }

    #[test]
    fn test_deserialize_optional_fields() {
        let json = r#"{
            "id": "Q5",
            "prompt": "p",
            "choices": ["a", "b"],
            "answer": 1,
            "explanation": "because"
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.explanation.as_deref(), Some("because"));
        assert!(q.choice_image.is_none());
        assert!(q.should_shuffle());
    }
}

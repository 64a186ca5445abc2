//! Exam entity

use crate::core::error::DomainError;
use crate::exam::presented::PresentedExam;
use crate::exam::question::Question;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An ordered set of questions loaded from the question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Exam {
    pub fn new(id: impl Into<String>, title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            questions,
        }
    }

    /// Validate every question and reject duplicate question ids.
    ///
    /// Duplicate ids would also share a shuffle seed and collide in answer
    /// sheets keyed by id.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidExam {
                id: self.id.clone(),
                reason: "id cannot be empty".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for question in &self.questions {
            question.validate()?;
            if !seen.insert(question.id.as_str()) {
                return Err(DomainError::InvalidExam {
                    id: self.id.clone(),
                    reason: format!("duplicate question id '{}'", question.id),
                });
            }
        }
        Ok(())
    }

    /// Present the first `limit` questions (all when `None`).
    pub fn present(
        &self,
        shuffle_choices: bool,
        limit: Option<usize>,
    ) -> Result<PresentedExam, DomainError> {
        let take = limit.unwrap_or(self.questions.len());
        let questions = self
            .questions
            .iter()
            .take(take)
            .map(|q| q.present(shuffle_choices))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PresentedExam {
            id: self.id.clone(),
            title: self.title.clone(),
            questions,
        })
    }
}

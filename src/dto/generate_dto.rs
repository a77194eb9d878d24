use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(Error::Validation(format!(
                "difficulty must be one of: easy, medium, hard (got '{}')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    #[default]
    General,
    Analytical,
    Factual,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::General => "general",
            QuestionType::Analytical => "analytical",
            QuestionType::Factual => "factual",
        }
    }
}

impl FromStr for QuestionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(QuestionType::General),
            "analytical" => Ok(QuestionType::Analytical),
            "factual" => Ok(QuestionType::Factual),
            other => Err(Error::Validation(format!(
                "question_type must be one of: general, analytical, factual (got '{}')",
                other
            ))),
        }
    }
}

/// Body of `POST /api/v1/generate/topic`. Omitted fields fall back to the
/// configured defaults in the handler.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TopicRequest {
    #[validate(length(min = 3, message = "topic must be at least 3 characters"))]
    pub topic: String,
    pub num_questions: Option<u8>,
    pub difficulty: Option<Difficulty>,
    pub question_type: Option<QuestionType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" Hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_question_type_from_str() {
        assert_eq!(
            "analytical".parse::<QuestionType>().unwrap(),
            QuestionType::Analytical
        );
        assert!("trivia".parse::<QuestionType>().is_err());
    }

    #[test]
    fn test_topic_request_rejects_short_topic() {
        let request = TopicRequest {
            topic: "ab".to_string(),
            num_questions: None,
            difficulty: None,
            question_type: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_topic_request_defaults() {
        let request: TopicRequest =
            serde_json::from_value(serde_json::json!({ "topic": "Photosynthesis" })).unwrap();
        assert!(request.num_questions.is_none());
        assert_eq!(request.difficulty.unwrap_or_default(), Difficulty::Medium);
        assert_eq!(
            request.question_type.unwrap_or_default(),
            QuestionType::General
        );
    }
}

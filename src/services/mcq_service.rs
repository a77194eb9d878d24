use crate::dto::generate_dto::{Difficulty, QuestionType};
use crate::error::{Error, Result};
use crate::models::mcq::{McQuestion, McqOption, McqResponse, SourceType};
use crate::services::ai_service::AiService;
use chrono::Utc;
use serde_json::Value as JsonValue;

/// Builds the instruction prompt sent to the model. Pure and deterministic:
/// the same inputs always produce the same string.
pub fn build_prompt(
    content: &str,
    num_questions: u8,
    difficulty: Difficulty,
    question_type: QuestionType,
    is_pdf: bool,
) -> String {
    let source_context = if is_pdf {
        "based on the following PDF content"
    } else {
        "about the following topic"
    };

    let difficulty_instruction = match difficulty {
        Difficulty::Easy => {
            "Create simple, straightforward questions that test basic understanding and recall."
        }
        Difficulty::Medium => {
            "Create moderate difficulty questions that require some analysis and comprehension."
        }
        Difficulty::Hard => {
            "Create challenging questions that require deep understanding, analysis, and critical thinking."
        }
    };

    let type_instruction = match question_type {
        QuestionType::General => {
            "Mix different types of questions including factual, conceptual, and application-based."
        }
        QuestionType::Analytical => {
            "Focus on questions that require analysis, comparison, evaluation, and critical thinking."
        }
        QuestionType::Factual => {
            "Focus on questions that test specific facts, definitions, and direct information recall."
        }
    };

    format!(
        r#"You are an expert educator and question generator. Create {num_questions} high-quality multiple choice questions {source_context}.

Content/Topic: {content}

Instructions:
- Difficulty: {difficulty} - {difficulty_instruction}
- Question Type: {question_type} - {type_instruction}
- Each question must have exactly 4 options (A, B, C, D)
- Only one option should be correct
- Provide clear, educational explanations for the correct answers
- Questions should be diverse and cover different aspects of the content
- Avoid ambiguous, trick, or poorly constructed questions
- Ensure questions are grammatically correct and professionally written
- Make sure all options are plausible but only one is definitively correct

Return the response in the following JSON format:
{{
    "questions": [
        {{
            "question": "Question text here?",
            "options": [
                {{"option": "A) Option text", "is_correct": false}},
                {{"option": "B) Option text", "is_correct": true}},
                {{"option": "C) Option text", "is_correct": false}},
                {{"option": "D) Option text", "is_correct": false}}
            ],
            "explanation": "Detailed explanation why the correct answer is correct and why other options are incorrect"
        }}
    ]
}}

IMPORTANT: Return only valid JSON, no additional text or formatting."#,
        num_questions = num_questions,
        source_context = source_context,
        content = content,
        difficulty = difficulty.as_str(),
        difficulty_instruction = difficulty_instruction,
        question_type = question_type.as_str(),
        type_instruction = type_instruction,
    )
}

/// Converts the model's decoded JSON reply into typed questions.
///
/// Validation is strict: the first malformed element rejects the entire
/// batch, naming the offending question. Partial delivery of well-formed
/// questions is fine (the envelope reports the actual count); partially
/// well-formed questions are not.
pub fn normalize(raw: &JsonValue) -> Result<Vec<McQuestion>> {
    let items = raw
        .get("questions")
        .and_then(|q| q.as_array())
        .ok_or_else(|| Error::Schema("response is missing a 'questions' array".to_string()))?;

    let mut questions = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let question = normalize_question(item).map_err(|e| match e {
            Error::Schema(msg) => Error::Schema(format!("question {}: {}", idx + 1, msg)),
            other => other,
        })?;
        questions.push(question);
    }

    Ok(questions)
}

fn normalize_question(value: &JsonValue) -> Result<McQuestion> {
    let question = value
        .get("question")
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| Error::Schema("missing or empty 'question' text".to_string()))?;

    let raw_options = value
        .get("options")
        .and_then(|v| v.as_array())
        .ok_or_else(|| Error::Schema("missing 'options' array".to_string()))?;

    if raw_options.len() != 4 {
        return Err(Error::Schema(format!(
            "expected exactly 4 options, got {}",
            raw_options.len()
        )));
    }

    let mut options = Vec::with_capacity(4);
    for raw_option in raw_options {
        let text = raw_option
            .get("option")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::Schema("option is missing 'option' text".to_string()))?;
        let is_correct = raw_option
            .get("is_correct")
            .and_then(|v| v.as_bool())
            .ok_or_else(|| Error::Schema("option is missing 'is_correct' flag".to_string()))?;
        options.push(McqOption {
            option: text.to_string(),
            is_correct,
        });
    }

    let correct_count = options.iter().filter(|o| o.is_correct).count();
    if correct_count != 1 {
        return Err(Error::Schema(format!(
            "expected exactly one correct option, got {}",
            correct_count
        )));
    }

    let explanation = value
        .get("explanation")
        .and_then(|v| v.as_str())
        .ok_or_else(|| Error::Schema("missing 'explanation' text".to_string()))?;

    Ok(McQuestion {
        question: question.to_string(),
        options,
        explanation: explanation.to_string(),
    })
}

/// Composes prompt building, the completion call, and normalization for
/// the two generation flows. Failures from the client or the normalizer
/// propagate unchanged.
#[derive(Clone)]
pub struct McqService {
    ai: AiService,
}

impl McqService {
    pub fn new(ai: AiService) -> Self {
        Self { ai }
    }

    pub async fn generate_from_topic(
        &self,
        topic: &str,
        num_questions: u8,
        difficulty: Difficulty,
        question_type: QuestionType,
    ) -> Result<McqResponse> {
        tracing::info!("Generating {} MCQs for topic: {}", num_questions, topic);

        let prompt = build_prompt(topic, num_questions, difficulty, question_type, false);
        let raw = self.ai.generate_mcqs(&prompt).await?;
        let questions = normalize(&raw)?;

        tracing::info!("Successfully generated {} MCQs from topic", questions.len());

        Ok(McqResponse {
            total_questions: questions.len(),
            questions,
            generated_at: Utc::now(),
            source_type: SourceType::Topic,
            topic: Some(topic.to_string()),
            metadata: serde_json::json!({
                "difficulty": difficulty,
                "question_type": question_type,
                "requested_questions": num_questions,
            }),
        })
    }

    pub async fn generate_from_pdf(
        &self,
        content: &str,
        num_questions: u8,
        difficulty: Difficulty,
        question_type: QuestionType,
    ) -> Result<McqResponse> {
        tracing::info!("Generating {} MCQs from PDF content", num_questions);

        let prompt = build_prompt(content, num_questions, difficulty, question_type, true);
        let raw = self.ai.generate_mcqs(&prompt).await?;
        let questions = normalize(&raw)?;

        tracing::info!("Successfully generated {} MCQs from PDF", questions.len());

        Ok(McqResponse {
            total_questions: questions.len(),
            questions,
            generated_at: Utc::now(),
            source_type: SourceType::Pdf,
            topic: None,
            metadata: serde_json::json!({
                "difficulty": difficulty,
                "question_type": question_type,
                "requested_questions": num_questions,
                "content_length": content.chars().count(),
            }),
        })
    }
}

use crate::dto::generate_dto::{Difficulty, QuestionType, TopicRequest};
use crate::error::{Error, Result};
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use validator::Validate;

pub async fn generate_from_topic(
    State(state): State<AppState>,
    Json(payload): Json<TopicRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let num_questions = state
        .config
        .question_count_or_default(payload.num_questions)?;
    let difficulty = payload.difficulty.unwrap_or_default();
    let question_type = payload.question_type.unwrap_or_default();

    let response = state
        .mcq_service
        .generate_from_topic(&payload.topic, num_questions, difficulty, question_type)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

pub async fn generate_from_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let mut file: Option<(String, Bytes)> = None;
    let mut num_questions: Option<u8> = None;
    let mut difficulty: Option<Difficulty> = None;
    let mut question_type: Option<QuestionType> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.bin").to_string();
                let data = field.bytes().await?;
                file = Some((filename, data));
            }
            "num_questions" => {
                let raw = field.text().await?;
                let parsed = raw.trim().parse::<u8>().map_err(|_| {
                    Error::Validation(format!("num_questions must be an integer (got '{}')", raw))
                })?;
                num_questions = Some(parsed);
            }
            "difficulty" => {
                difficulty = Some(field.text().await?.parse()?);
            }
            "question_type" => {
                question_type = Some(field.text().await?.parse()?);
            }
            _ => {}
        }
    }

    let (filename, data) =
        file.ok_or_else(|| Error::Validation("A PDF file upload is required".to_string()))?;
    let num_questions = state.config.question_count_or_default(num_questions)?;
    let difficulty = difficulty.unwrap_or_default();
    let question_type = question_type.unwrap_or_default();

    state.pdf_service.validate_file(&filename, data.len())?;
    let text = state.pdf_service.extract_text(&data)?;

    let response = state
        .mcq_service
        .generate_from_pdf(&text, num_questions, difficulty, question_type)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

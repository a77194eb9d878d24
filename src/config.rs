use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub groq_api_key: String,
    pub groq_api_base: String,
    pub groq_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub max_file_size: usize,
    pub max_pdf_chars: usize,
    pub min_questions: u8,
    pub max_questions: u8,
    pub default_questions: u8,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", "0.0.0.0:8000"),
            groq_api_key: get_env("GROQ_API_KEY")?,
            groq_api_base: get_env_or("GROQ_API_BASE", "https://api.groq.com/openai/v1"),
            groq_model: get_env_or("GROQ_MODEL", "llama-3.1-8b-instant"),
            max_tokens: get_env_parse_or("MAX_TOKENS", 4000)?,
            temperature: get_env_parse_or("TEMPERATURE", 0.7)?,
            max_file_size: get_env_parse_or("MAX_FILE_SIZE", 10 * 1024 * 1024)?,
            max_pdf_chars: get_env_parse_or("MAX_PDF_CHARS", 8000)?,
            min_questions: get_env_parse_or("MIN_QUESTIONS", 1)?,
            max_questions: get_env_parse_or("MAX_QUESTIONS", 20)?,
            default_questions: get_env_parse_or("DEFAULT_QUESTIONS", 5)?,
        })
    }

    /// Resolves an optional requested question count against the configured
    /// bounds. Both generation flows funnel through this before any
    /// external call is made.
    pub fn question_count_or_default(&self, requested: Option<u8>) -> Result<u8> {
        let count = requested.unwrap_or(self.default_questions);
        if count < self.min_questions || count > self.max_questions {
            return Err(Error::Validation(format!(
                "num_questions must be between {} and {}",
                self.min_questions, self.max_questions
            )));
        }
        Ok(count)
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

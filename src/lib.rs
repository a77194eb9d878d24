pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::config::Config;
use crate::services::{
    ai_service::AiService, mcq_service::McqService, pdf_service::PdfService,
};
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ai_service: AiService,
    pub mcq_service: McqService,
    pub pdf_service: PdfService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .unwrap();

        let ai_service = AiService::new(&config, http_client);
        let mcq_service = McqService::new(ai_service.clone());
        let pdf_service = PdfService::new(&config);

        Self {
            config: Arc::new(config),
            ai_service,
            mcq_service,
            pdf_service,
        }
    }
}

pub mod ai_service;
pub mod mcq_service;
pub mod pdf_service;

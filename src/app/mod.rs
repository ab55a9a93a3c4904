pub mod classification_service;
pub mod report;
pub mod ticket_reader;

//! Notes Ingest Server Library
//!
//! Accepts an uploaded PDF, plain text file, PowerPoint deck or image and
//! normalizes it into note pages: ordered text blocks plus rendered PNG
//! images, served to a single notes viewer.
//!
//! The main server binary is in main.rs.
//!
//! # Modules
//!
//! - `notes`: Format dispatch, extraction result types, session slot
//! - `formats`: Per-format extraction strategies (PDF, text, PPTX, image)
//! - `storage`: Local PNG asset directory
//! - `routes`: HTTP endpoints

pub mod config;
pub mod error;
pub mod formats;
pub mod notes;
pub mod routes;
pub mod state;
pub mod storage;

/*!
 * # subtext - Subtitle transcripts and word frequencies
 *
 * A Rust library for stripping timing and markup metadata from subtitle
 * files (WebVTT, SubRip) and counting word frequencies in text.
 *
 * ## Features
 *
 * - Convert VTT and SRT captions into plain-text transcripts
 * - Collapse VTT rolling-caption duplicate lines
 * - Count whitespace-delimited tokens in a text
 * - Build case-insensitive word frequency tables with stable tie ordering
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `transcript_processor`: Subtitle format dispatch and cleanup pipelines
 * - `word_counter`: Total and unique word counting
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod transcript_processor;
pub mod word_counter;

// Re-export main types for easier usage
pub use app_controller::Controller;
pub use errors::AppError;
pub use transcript_processor::{SubtitleFormat, srt_to_transcript, vtt_to_transcript};
pub use word_counter::{WordCount, WordCounter};

/*!
 * # srt2ass - SubRip to Advanced SubStation Alpha converter
 *
 * A Rust library for turning SRT subtitles into styled ASS scripts.
 *
 * ## Features
 *
 * - Parse SRT cues and convert their timestamps to ASS notation
 * - Merge bilingual (Chinese/English) cues into two styled dialogue events
 * - Pick primary and secondary styles from a user supplied style sheet
 * - Accept a full pasted ASS header as style input
 * - Batch conversion of files and directories
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timestamp`: SRT to ASS timestamp conversion
 * - `subtitle_processor`: SRT cue parsing
 * - `styles`: Style sheet handling:
 *   - `styles::catalog`: Declared style names and fields
 *   - `styles::resolver`: Style and margin selection per language track
 *   - `styles::sanitizer`: Removal of pasted `[Script Info]` sections
 * - `ass`: ASS output:
 *   - `ass::events`: `Dialogue:` record construction
 *   - `ass::document`: Full document assembly
 * - `converter`: Single-file conversion entry points
 * - `app_controller`: Batch conversion controller
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod ass;
pub mod converter;
pub mod errors;
pub mod file_utils;
pub mod styles;
pub mod subtitle_processor;
pub mod timestamp;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{BatchReport, Controller};
pub use ass::DialogueEvent;
pub use converter::{convert, ConversionOptions};
pub use errors::{AppError, ConversionError};
pub use styles::{PreparedStyles, ResolvedStyles, StyleCatalog};
pub use subtitle_processor::{Cue, SubtitleCollection};

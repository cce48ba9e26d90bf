/*!
 * ASS output generation.
 *
 * - `events`: turns parsed cues into `Dialogue:` records
 * - `document`: wraps the records and the style sheet into a full script
 */

pub use self::document::render_document;
pub use self::events::{build_cue_events, build_events, DialogueEvent};

pub mod document;
pub mod events;

use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;
use crate::file_utils::FileManager;

// @module: Subtitle-to-transcript normalization

// @const: VTT three-line header block (WEBVTT / Kind: / Language:)
static VTT_HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"WEBVTT\nKind:.*\nLanguage:.*\n").unwrap());

// @const: Line holding a VTT cue timing range, trailing positioning text included
static VTT_TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^.*\d{2}:\d{2}:\d{2}\.\d{3} --> \d{2}:\d{2}:\d{2}\.\d{3}.*\n?").unwrap()
});

// @const: Inline word-level timing marker, e.g. <00:00:01.000>
static VTT_INLINE_TIMESTAMP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\d{2}:\d{2}:\d{2}\.\d{3}>").unwrap());

// @const: Line holding an SRT cue timing range (comma millisecond separator)
static SRT_TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^.*\d{2}:\d{2}:\d{2},\d{3} --> \d{2}:\d{2}:\d{2},\d{3}.*\n?").unwrap()
});

// @const: SRT sequence number line (digits only)
static SRT_SEQUENCE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+$").unwrap());

// @const: Blank or whitespace-only line
static BLANK_LINE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*\n").unwrap());

// @const: Angle-bracket markup tag, not spanning newlines
static MARKUP_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>\n]+>").unwrap());

/// A single transform stage: takes the text produced by the previous
/// stage and returns the next intermediate form.
type Stage = fn(&str) -> String;

// @const: Ordered VTT cleanup pipeline
const VTT_STAGES: &[(&str, Stage)] = &[
    ("strip_vtt_header", strip_vtt_header),
    ("strip_vtt_timing_lines", strip_vtt_timing_lines),
    ("strip_inline_timestamps", strip_inline_timestamps),
    ("strip_blank_lines", strip_blank_lines),
    ("strip_markup_tags", strip_markup_tags),
    ("collapse_duplicate_lines", collapse_duplicate_lines),
    ("join_lines", join_lines),
];

// @const: Ordered SRT cleanup pipeline (no duplicate collapsing)
const SRT_STAGES: &[(&str, Stage)] = &[
    ("strip_srt_sequence_numbers", strip_srt_sequence_numbers),
    ("strip_srt_timing_lines", strip_srt_timing_lines),
    ("strip_blank_lines", strip_blank_lines),
    ("strip_markup_tags", strip_markup_tags),
    ("join_lines", join_lines),
];

/// Subtitle format, selected purely by filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    /// WebVTT captions (.vtt)
    Vtt,
    /// SubRip captions (.srt)
    Srt,
    /// Anything else: content is passed through unmodified
    Plain,
}

impl SubtitleFormat {
    /// Detect the format from a path's extension, case-insensitively.
    /// No content sniffing is performed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension() {
            Some(ext) if ext.eq_ignore_ascii_case("vtt") => SubtitleFormat::Vtt,
            Some(ext) if ext.eq_ignore_ascii_case("srt") => SubtitleFormat::Srt,
            _ => SubtitleFormat::Plain,
        }
    }
}

/// Remove the exact three-line VTT header block. Headers that deviate from
/// the literal WEBVTT / Kind: / Language: shape are left for later stages.
fn strip_vtt_header(content: &str) -> String {
    VTT_HEADER_REGEX.replace_all(content, "").into_owned()
}

/// Remove every line containing a VTT cue timing range, including any
/// trailing positioning text, whether or not the line ends in a newline.
fn strip_vtt_timing_lines(content: &str) -> String {
    VTT_TIMING_REGEX.replace_all(content, "").into_owned()
}

/// Remove karaoke-style inline timestamp markers from cue text.
fn strip_inline_timestamps(content: &str) -> String {
    VTT_INLINE_TIMESTAMP_REGEX.replace_all(content, "").into_owned()
}

/// Remove SRT sequence numbers (lines consisting solely of digits).
fn strip_srt_sequence_numbers(content: &str) -> String {
    SRT_SEQUENCE_REGEX.replace_all(content, "").into_owned()
}

/// Remove every line containing an SRT cue timing range.
fn strip_srt_timing_lines(content: &str) -> String {
    SRT_TIMING_REGEX.replace_all(content, "").into_owned()
}

/// Remove blank and whitespace-only lines.
fn strip_blank_lines(content: &str) -> String {
    BLANK_LINE_REGEX.replace_all(content, "").into_owned()
}

/// Remove remaining angle-bracket markup such as styling tags.
fn strip_markup_tags(content: &str) -> String {
    MARKUP_TAG_REGEX.replace_all(content, "").into_owned()
}

/// Collapse consecutive duplicate lines: a line survives only if its
/// trimmed form differs from the previously kept line's trimmed form.
/// VTT rolling captions commonly repeat the previous cue line verbatim.
fn collapse_duplicate_lines(content: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if kept.last() != Some(&trimmed) {
            kept.push(trimmed);
        }
    }
    kept.join("\n")
}

/// Trim every surviving line and join them with single spaces.
fn join_lines(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run an ordered stage pipeline over the raw content.
fn run_pipeline(label: &str, stages: &[(&str, Stage)], content: &str) -> String {
    let mut current = content.to_string();
    for (name, stage) in stages {
        current = stage(&current);
        debug!("{} stage '{}' produced {} bytes", label, name, current.len());
    }
    current
}

/// Convert raw VTT text into a cleaned, deduplicated transcript string.
pub fn vtt_to_transcript(content: &str) -> String {
    run_pipeline("vtt", VTT_STAGES, content)
}

/// Convert raw SRT text into a cleaned transcript string.
pub fn srt_to_transcript(content: &str) -> String {
    run_pipeline("srt", SRT_STAGES, content)
}

/// Normalize raw text according to its format. Plain text passes through
/// unmodified.
pub fn normalize(format: SubtitleFormat, content: &str) -> String {
    match format {
        SubtitleFormat::Vtt => vtt_to_transcript(content),
        SubtitleFormat::Srt => srt_to_transcript(content),
        SubtitleFormat::Plain => content.to_string(),
    }
}

/// Read a file and resolve it to text content, normalizing subtitle
/// formats selected by the filename suffix.
pub fn resolve_file<P: AsRef<Path>>(path: P) -> Result<String, AppError> {
    let path = path.as_ref();
    let format = SubtitleFormat::from_path(path);
    debug!("Resolving {:?} as {:?}", path, format);

    let content = FileManager::read_to_string(path)?;
    Ok(normalize(format, &content))
}

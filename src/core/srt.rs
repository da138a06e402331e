//! SRT subtitle parsing and serialization.
//!
//! Parsing is lenient per block and strict per field: malformed blocks are
//! skipped with a diagnostic and never abort the parse. The declared
//! subtitle number of each block is preserved as the segment's identity
//! index; serialization renumbers sequentially for display instead.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::state::Segment;

static BLOCK_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("block regex"));

// Hours 1-2 digits, milliseconds 1-3 digits; comma, dot, or colon before
// the milliseconds are all accepted in the wild.
static TIME_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2}):(\d{2}):(\d{2})[,.:](\d{1,3})\s*-->\s*(\d{1,2}):(\d{2}):(\d{2})[,.:](\d{1,3})")
        .expect("timestamp regex")
});

static EXCESS_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("blank regex"));

/// Normalize raw subtitle text: strip a leading BOM, unify line endings,
/// trim, collapse runs of blank lines, and strip trailing spaces per line.
fn clean_srt_content(raw: &str) -> String {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = text.trim();
    let text = EXCESS_BLANK_LINES.replace_all(text, "\n\n");
    text.lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse raw SRT text into segments sorted by start time.
///
/// Never fails: each malformed block is dropped and logged, so the result is
/// the subset of syntactically valid blocks. Declared subtitle numbers
/// survive as `index` values (no renumbering).
pub fn parse_srt(raw: &str) -> Vec<Segment> {
    let normalized = clean_srt_content(raw);
    if normalized.is_empty() {
        return Vec::new();
    }

    let blocks: Vec<&str> = BLOCK_SPLIT.split(&normalized).collect();
    let block_count = blocks.len();
    let mut segments: Vec<Segment> = Vec::with_capacity(block_count);

    for (block_index, block) in blocks.into_iter().enumerate() {
        match parse_block(block) {
            Ok(segment) => segments.push(segment),
            Err(reason) => {
                warn!(block = block_index + 1, reason, "skipping malformed SRT block");
            }
        }
    }

    segments.sort_by(|a, b| a.start.total_cmp(&b.start));

    debug!(
        parsed = segments.len(),
        total = block_count,
        "SRT parsing complete"
    );
    segments
}

fn parse_block(block: &str) -> Result<Segment, &'static str> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    // Minimum shape: number + timestamp + at least one text line
    if lines.len() < 3 {
        return Err("insufficient lines");
    }

    let number: u32 = lines[0].parse().map_err(|_| "invalid subtitle number")?;
    if number == 0 {
        return Err("invalid subtitle number");
    }

    let captures = TIME_RANGE
        .captures(lines[1])
        .ok_or("invalid time format")?;
    let start = timestamp_seconds(&captures, 1)?;
    let end = timestamp_seconds(&captures, 5)?;

    if start >= end {
        return Err("start >= end");
    }
    if start < 0.0 || end < 0.0 {
        return Err("negative timing");
    }

    // Trim each text line, drop empties, join with single spaces, and
    // collapse internal runs of whitespace.
    let text = lines[2..]
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        return Err("empty text");
    }

    Ok(Segment::new(number, start, end, text))
}

/// Read one timestamp from four consecutive capture groups starting at
/// `first_group`. Milliseconds shorter than 3 digits are right-padded.
fn timestamp_seconds(captures: &regex::Captures<'_>, first_group: usize) -> Result<f64, &'static str> {
    let field = |offset: usize| -> Result<u32, &'static str> {
        captures
            .get(first_group + offset)
            .ok_or("invalid time format")?
            .as_str()
            .parse()
            .map_err(|_| "invalid time format")
    };
    let hours = field(0)?;
    let minutes = field(1)?;
    let seconds = field(2)?;

    let ms_raw = captures
        .get(first_group + 3)
        .ok_or("invalid time format")?
        .as_str();
    let millis: u32 = format!("{:0<3}", ms_raw)
        .parse()
        .map_err(|_| "invalid time format")?;

    Ok(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds as f64 + millis as f64 / 1000.0)
}

/// Format seconds as an SRT timestamp: `HH:MM:SS,mmm`, rounded to the
/// nearest millisecond. Rounding, not flooring: parsed millisecond values
/// land just below their exact representation in f64, and flooring would
/// emit them one millisecond short.
pub fn format_srt_time(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let millis = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let secs = total_secs % 60;
    let minutes = (total_secs / 60) % 60;
    let hours = total_secs / 3600;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Serialize segments into the canonical SRT block format.
///
/// Block numbers are sequential display order starting at 1; the segments'
/// stored identity indices are deliberately not emitted.
pub fn serialize_srt(segments: &[Segment]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            format_srt_time(segment.start),
            format_srt_time(segment.end),
            segment.text
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_parse() {
        let srt = "1\n00:00:01,000 --> 00:00:03,500\nHello world\n\n2\n00:00:04,000 --> 00:00:06,000\nSecond line\n";
        let segments = parse_srt(srt);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].index, 1);
        assert_eq!(segments[0].start, 1.0);
        assert_eq!(segments[0].end, 3.5);
        assert_eq!(segments[0].text, "Hello world");
    }

    #[test]
    fn test_bad_ordering_block_dropped() {
        // Block 2 has start >= end and is dropped.
        let srt = "1\n00:00:01,000 --> 00:00:03,500\nHello world\n\n2\n00:00:04,250 --> 00:00:02,000\nBad order\n";
        let segments = parse_srt(srt);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].index, 1);
        assert_eq!(segments[0].start, 1.0);
        assert_eq!(segments[0].end, 3.5);
        assert_eq!(segments[0].text, "Hello world");
    }

    #[test]
    fn test_bom_and_crlf_normalized() {
        let srt = "\u{feff}1\r\n00:00:01,000 --> 00:00:02,000\r\nLine\r\n";
        let segments = parse_srt(srt);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "Line");
    }

    #[test]
    fn test_short_milliseconds_right_padded() {
        // 1-2 digit milliseconds are treated as the leading digits: ",5" is
        // 500ms and ",25" is 250ms.
        let srt = "1\n0:00:01,5 --> 0:00:02,25\nPadded\n";
        let segments = parse_srt(srt);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, 1.5);
        assert_eq!(segments[0].end, 2.25);
    }

    #[test]
    fn test_dot_and_colon_separators() {
        let srt = "1\n00:00:01.000 --> 00:00:02:500\nMixed\n";
        let segments = parse_srt(srt);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].end, 2.5);
    }

    #[test]
    fn test_multiline_text_collapsed() {
        let srt = "1\n00:00:01,000 --> 00:00:04,000\nfirst   line\n  second line  \n";
        let segments = parse_srt(srt);
        assert_eq!(segments[0].text, "first line second line");
    }

    #[test]
    fn test_malformed_blocks_skipped() {
        let srt = concat!(
            "not a number\n00:00:01,000 --> 00:00:02,000\ntext\n\n",
            "2\nnot a timestamp\ntext\n\n",
            "3\n00:00:05,000 --> 00:00:06,000\n\n\n",
            "4\n00:00:07,000 --> 00:00:08,000\nkept\n",
        );
        let segments = parse_srt(srt);
        // Block 3 collapses to two lines once empties are dropped
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].index, 4);
    }

    #[test]
    fn test_output_sorted_by_start() {
        let srt = "5\n00:00:10,000 --> 00:00:12,000\nlater\n\n9\n00:00:01,000 --> 00:00:02,000\nearlier\n";
        let segments = parse_srt(srt);
        assert_eq!(segments[0].index, 9);
        assert_eq!(segments[1].index, 5);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_srt("").is_empty());
        assert!(parse_srt("   \n\n  ").is_empty());
    }

    #[test]
    fn test_format_srt_time() {
        assert_eq!(format_srt_time(0.0), "00:00:00,000");
        assert_eq!(format_srt_time(1.5), "00:00:01,500");
        assert_eq!(format_srt_time(3661.25), "01:01:01,250");
    }

    #[test]
    fn test_serialize_renumbers_sequentially() {
        let segments = vec![
            Segment::new(7, 1.0, 3.5, "Hello world"),
            Segment::new(12, 4.25, 6.0, "Second"),
        ];
        let out = serialize_srt(&segments);
        assert_eq!(
            out,
            "1\n00:00:01,000 --> 00:00:03,500\nHello world\n\n2\n00:00:04,250 --> 00:00:06,000\nSecond\n\n"
        );
    }

    #[test]
    fn test_millisecond_precision_survives_round_trip() {
        // 1.001 is not exactly representable; the serializer must still
        // emit ,001 back rather than truncating to ,000.
        let srt = "1\n00:00:01,001 --> 00:00:02,999\nPrecise\n";
        let segments = parse_srt(srt);
        let out = serialize_srt(&segments);
        assert!(
            out.contains("00:00:01,001 --> 00:00:02,999"),
            "timestamps drifted: {}",
            out
        );
        let reparsed = parse_srt(&out);
        assert_eq!(reparsed[0].start, segments[0].start);
        assert_eq!(reparsed[0].end, segments[0].end);
    }

    #[test]
    fn test_round_trip_modulo_renumbering() {
        let original = vec![
            Segment::new(3, 0.5, 2.0, "first segment"),
            Segment::new(8, 2.25, 4.75, "second segment"),
            Segment::new(9, 10.0, 12.125, "third"),
        ];
        let reparsed = parse_srt(&serialize_srt(&original));
        assert_eq!(reparsed.len(), original.len());
        for (i, (a, b)) in original.iter().zip(reparsed.iter()).enumerate() {
            assert_eq!(b.index as usize, i + 1);
            assert!((a.start - b.start).abs() < 1e-9);
            assert!((a.end - b.end).abs() < 1e-9);
            assert_eq!(a.text, b.text);
        }
    }
}

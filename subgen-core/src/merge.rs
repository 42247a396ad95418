//! Merges short transcription segments into readable subtitle cues.
//!
//! Recognition models emit fragments that are often well under a second
//! long; displaying them one-by-one makes subtitles flicker. This pass
//! coalesces consecutive segments until a cue spans at least a minimum
//! duration.

use crate::types::{Cue, Segment};

/// Minimum cue duration in seconds used when the caller has no preference.
pub const MIN_CUE_DURATION: f64 = 2.0;

/// Fold consecutive segments into cues of at least `min_duration` seconds.
///
/// Single left-to-right pass: each segment joins the open accumulator; a
/// segment whose end reaches `min_duration` from the accumulator's start
/// closes the cue (contributing its own text and end time), and trailing
/// segments that never reach the threshold close a final shorter cue.
/// Every input segment lands in exactly one cue, cue starts are
/// non-decreasing, and cues never overlap.
///
/// Precondition: `segments` is in chronological order; out-of-order input
/// produces unspecified cue boundaries.
pub fn merge_segments(segments: &[Segment], min_duration: f64) -> Vec<Cue> {
    let mut cues = Vec::new();

    // Option, not a zero check: a cue legitimately anchored at t=0.0 must
    // not be mistaken for "no accumulator yet".
    let mut acc_start: Option<f64> = None;
    let mut acc_text: Vec<&str> = Vec::new();

    for segment in segments {
        acc_text.push(segment.text.trim());

        match acc_start {
            None => acc_start = Some(segment.start),
            Some(start) => {
                if segment.end - start >= min_duration {
                    cues.push(Cue {
                        start,
                        end: segment.end,
                        text: acc_text.join(" "),
                    });
                    acc_text.clear();
                    acc_start = None;
                }
            }
        }
    }

    if let Some(start) = acc_start {
        // Trailing segments never reached min_duration; absorb them all
        // into one final cue ending at the last raw segment's end.
        cues.push(Cue {
            start,
            end: segments.last().map(|s| s.end).unwrap_or(start),
            text: acc_text.join(" "),
        });
    }

    cues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_empty_segments() {
        assert!(merge_segments(&[], MIN_CUE_DURATION).is_empty());
    }

    #[test]
    fn wraps_single_segment_as_cue() {
        let segments = vec![Segment::new("  hello world  ", 0.5, 1.2)];
        let cues = merge_segments(&segments, MIN_CUE_DURATION);

        match &cues[..] {
            [cue] => {
                assert_eq!(cue.start, 0.5);
                assert_eq!(cue.end, 1.2);
                assert_eq!(cue.text, "hello world");
            }
            _ => panic!("expected 1 cue, got {}", cues.len()),
        }
    }

    #[test]
    fn folds_short_fragments_into_one_cue() {
        let segments = vec![
            Segment::new("a", 0.0, 1.0),
            Segment::new("b", 1.0, 1.5),
            Segment::new("c", 1.5, 3.0),
        ];

        let cues = merge_segments(&segments, 2.0);

        match &cues[..] {
            [cue] => {
                assert_eq!(cue.start, 0.0);
                assert_eq!(cue.end, 3.0);
                assert_eq!(cue.text, "a b c");
            }
            _ => panic!("expected 1 cue, got {:?}", cues),
        }
    }

    #[test]
    fn keeps_accumulator_anchored_at_time_zero() {
        // Both segments start a cue at t=0.0; the anchor must survive the
        // second iteration rather than being re-seeded at 1.0.
        let segments = vec![
            Segment::new("first", 0.0, 1.0),
            Segment::new("second", 1.0, 2.5),
        ];

        let cues = merge_segments(&segments, 2.0);

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].start, 0.0);
        assert_eq!(cues[0].end, 2.5);
        assert_eq!(cues[0].text, "first second");
    }

    #[test]
    fn closes_cue_at_threshold_and_starts_fresh() {
        let segments = vec![
            Segment::new("one", 0.0, 2.5),
            Segment::new("two", 2.5, 3.0),
            Segment::new("three", 3.0, 5.0),
        ];

        let cues = merge_segments(&segments, 2.0);

        match &cues[..] {
            [first, second] => {
                assert_eq!((first.start, first.end), (0.0, 3.0));
                assert_eq!(first.text, "one two");
                assert_eq!((second.start, second.end), (3.0, 5.0));
                assert_eq!(second.text, "three");
            }
            _ => panic!("expected 2 cues, got {:?}", cues),
        }
    }

    #[test]
    fn trailing_fragments_form_final_short_cue() {
        let segments = vec![
            Segment::new("long enough", 0.0, 1.0),
            Segment::new("to flush", 1.0, 2.0),
            Segment::new("tail", 2.0, 2.4),
            Segment::new("end", 2.4, 2.9),
        ];

        let cues = merge_segments(&segments, 2.0);

        assert_eq!(cues.len(), 2);
        assert_eq!(cues[1].start, 2.0);
        assert_eq!(cues[1].end, 2.9);
        assert_eq!(cues[1].text, "tail end");
    }

    #[test]
    fn cues_are_ordered_and_non_overlapping() {
        let segments: Vec<Segment> = (0..40)
            .map(|i| {
                let start = i as f64 * 0.7;
                Segment::new(format!("w{i}"), start, start + 0.7)
            })
            .collect();

        let cues = merge_segments(&segments, 2.0);

        assert!(!cues.is_empty());
        for cue in &cues {
            assert!(cue.end >= cue.start);
        }
        for pair in cues.windows(2) {
            assert!(pair[1].start >= pair[0].end);
        }

        let total_words: usize = cues.iter().map(|c| c.text.split(' ').count()).sum();
        assert_eq!(total_words, segments.len());
    }
}

use crate::model::Step;

/// Split raw instruction text into ordered steps.
///
/// The service stores instructions as one blob with steps introduced by a
/// numeric marker of the exact shape `<digits>-)`, e.g. `1-)` or `12-)`.
/// Each marker starts a new step that begins with the marker itself; text
/// before the first marker, or text with no marker at all, forms its own
/// step. Fragments are trimmed and joined with a single space; whitespace
/// inside a fragment is left alone. Empty or whitespace-only input yields
/// no steps.
pub fn format_instructions(raw: &str) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut accumulator = String::new();

    for segment in split_on_markers(raw) {
        match segment {
            Segment::Marker(text) => {
                flush(&mut steps, &mut accumulator);
                accumulator.push_str(text);
            }
            Segment::Text(text) => {
                let trimmed = text.trim();
                if !accumulator.is_empty() && !trimmed.is_empty() {
                    accumulator.push(' ');
                }
                accumulator.push_str(trimmed);
            }
        }
    }
    flush(&mut steps, &mut accumulator);

    steps
}

fn flush(steps: &mut Vec<Step>, accumulator: &mut String) {
    let step = accumulator.trim();
    if !step.is_empty() {
        steps.push(Step(step.to_string()));
    }
    accumulator.clear();
}

enum Segment<'a> {
    /// A `<digits>-)` marker occurrence
    Marker(&'a str),
    /// Plain text between markers
    Text(&'a str),
}

/// Scan for `<digits>-)` boundaries, yielding markers and the text between
/// them in encounter order.
fn split_on_markers(raw: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let bytes = raw.as_bytes();
    let mut start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match marker_length(&bytes[pos..]) {
            Some(len) => {
                if start < pos {
                    segments.push(Segment::Text(&raw[start..pos]));
                }
                segments.push(Segment::Marker(&raw[pos..pos + len]));
                pos += len;
                start = pos;
            }
            None => pos += 1,
        }
    }
    if start < bytes.len() {
        segments.push(Segment::Text(&raw[start..]));
    }

    segments
}

/// Length of a `<digits>-)` marker starting at the head of `bytes`, if any.
fn marker_length(bytes: &[u8]) -> Option<usize> {
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    if bytes[digits..].starts_with(b"-)") {
        Some(digits + 2)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(steps: &[Step]) -> Vec<&str> {
        steps.iter().map(Step::as_str).collect()
    }

    #[test]
    fn test_numbered_steps_split_on_markers() {
        let steps = format_instructions("1-) Boil water. 2-) Add pasta.");
        assert_eq!(texts(&steps), vec!["1-) Boil water.", "2-) Add pasta."]);
    }

    #[test]
    fn test_no_marker_is_a_single_step() {
        let steps = format_instructions("No markers here.");
        assert_eq!(texts(&steps), vec!["No markers here."]);
    }

    #[test]
    fn test_empty_input_yields_no_steps() {
        assert!(format_instructions("").is_empty());
        assert!(format_instructions("   \n ").is_empty());
    }

    #[test]
    fn test_multi_digit_markers() {
        let raw = "9-) Rest. 10-) Slice. 11-) Serve warm.";
        let steps = format_instructions(raw);
        assert_eq!(
            texts(&steps),
            vec!["9-) Rest.", "10-) Slice.", "11-) Serve warm."]
        );
    }

    #[test]
    fn test_text_before_first_marker_is_its_own_step() {
        let steps = format_instructions("Prep everything first. 1-) Chop onions.");
        assert_eq!(
            texts(&steps),
            vec!["Prep everything first.", "1-) Chop onions."]
        );
    }

    #[test]
    fn test_marker_without_digits_is_plain_text() {
        let steps = format_instructions("Mix -) well.");
        assert_eq!(texts(&steps), vec!["Mix -) well."]);
    }

    #[test]
    fn test_interior_whitespace_preserved_within_fragment() {
        let steps = format_instructions("1-) Knead  the  dough.");
        assert_eq!(texts(&steps), vec!["1-) Knead  the  dough."]);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed_per_step() {
        let steps = format_instructions("  1-)  Boil water.  \n 2-)  Drain.  ");
        assert_eq!(texts(&steps), vec!["1-) Boil water.", "2-) Drain."]);
    }

    #[test]
    fn test_deterministic() {
        let raw = "1-) One. 2-) Two.";
        assert_eq!(format_instructions(raw), format_instructions(raw));
    }
}

use crate::metrics::FontMetrics;

/// Greedy word-wrap of `text` to `max_width_mm`.
///
/// Words are never split: a single word wider than the line gets a line of
/// its own. Explicit newlines start a new line and blank lines are kept as
/// empty strings. Runs of whitespace inside a line collapse to one space.
pub fn wrap_text(text: &str, max_width_mm: f32, font: &FontMetrics, size_pt: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let text = text.trim_end();
    if text.is_empty() {
        return lines;
    }

    let space_width = font.measure_mm(" ", size_pt);

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in paragraph.split_whitespace() {
            let word_width = font.measure_mm(word, size_pt);
            if word_width > max_width_mm {
                tracing::debug!(word, max_width_mm, "word wider than line, kept whole");
            }

            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space_width + word_width <= max_width_mm {
                current.push(' ');
                current.push_str(word);
                current_width += space_width + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            }
        }

        // An empty `current` here is a blank line in the source text.
        lines.push(current);
    }

    lines
}

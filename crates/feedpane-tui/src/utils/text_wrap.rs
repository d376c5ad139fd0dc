use unicode_width::UnicodeWidthStr;

/// Run of spaces that separates two paragraphs in a feed description
const PARAGRAPH_BREAK: &str = "  ";

pub struct TextWrapper;

impl TextWrapper {
    /// Split text into paragraphs on runs of two or more spaces.
    ///
    /// Single spaces never split. Surrounding whitespace is trimmed from the
    /// whole text and from each paragraph; empty pieces are dropped.
    pub fn split_paragraphs(text: &str) -> Vec<&str> {
        text.trim()
            .split(PARAGRAPH_BREAK)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Greedy word wrap to `width` display columns.
    ///
    /// Words are never broken; a word wider than `width` sits alone on its
    /// own line.
    pub fn wrap_paragraph(text: &str, width: usize) -> Vec<String> {
        let width = width.max(1);
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0;

        for word in text.split_whitespace() {
            let word_width = word.width();
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    /// Lay out a description as wrapped lines, one blank line between paragraphs
    pub fn wrap_description(text: &str, width: usize, split_paragraphs: bool) -> Vec<String> {
        let paragraphs = if split_paragraphs {
            Self::split_paragraphs(text)
        } else {
            vec![text.trim()]
        };

        let mut lines = Vec::new();
        for paragraph in paragraphs {
            let wrapped = Self::wrap_paragraph(paragraph, width);
            if wrapped.is_empty() {
                continue;
            }
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.extend(wrapped);
        }
        lines
    }

    /// Collapse newlines and whitespace runs so text fits on a single row
    pub fn clean_line(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

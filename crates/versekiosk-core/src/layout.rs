//! Text sanitation, word wrap, and pagination.

use crate::config::KioskConfig;
use crate::display::{DisplayPanel, line_height};

#[cfg(test)]
mod tests;

/// Stand-in glyph for characters the bitmap font cannot render.
const FALLBACK_GLYPH: char = '?';

/// Smart typography mapped onto the font's ASCII set.
const REPLACEMENTS: &[(char, &str)] = &[
    ('\u{2013}', "-"),  // en dash
    ('\u{2014}', "-"),  // em dash
    ('\u{2212}', "-"),  // minus sign
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{201E}', "\""),
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{2026}', "..."),
    ('\u{00A0}', " "),
];

/// A paginated poem ready for rendering.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Layout {
    /// Wrapped title, repeated on every page.
    pub title_lines: Vec<String>,
    /// Body lines per page. Never empty: a body-less poem still gets one
    /// (empty) page so the title has somewhere to live.
    pub pages: Vec<Vec<String>>,
}

impl Layout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Map `text` onto the renderable glyph set.
///
/// Newline and printable ASCII pass through, the smart-typography table is
/// applied, and anything else becomes [`FALLBACK_GLYPH`].
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if let Some((_, replacement)) = REPLACEMENTS.iter().find(|(from, _)| *from == ch) {
            out.push_str(replacement);
        } else if ch == '\n' || (' '..='~').contains(&ch) {
            out.push(ch);
        } else {
            out.push(FALLBACK_GLYPH);
        }
    }
    out
}

/// Wrap `text` into lines that fit `width - 2 * margin` pixels.
///
/// Explicit newlines force line breaks and blank lines survive, trailing
/// ones included. Words are packed greedily with one separating space. A
/// word wider than the usable width on its own is broken at the character
/// level and its remainder keeps wrapping on the next line, so a single
/// oversized character still makes progress as its own line.
pub fn wrap_words<D: DisplayPanel>(
    display: &D,
    text: &str,
    width: u32,
    margin: u32,
    scale: u32,
    spacing: u32,
) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let max_line_px = width.saturating_sub(margin * 2);
    if max_line_px == 0 {
        return vec![String::new()];
    }

    // Measurement matches rendering: both operate on the upper-cased form.
    let measure = |s: &str| display.measure_text(&s.to_uppercase(), scale, spacing);

    // `lines()` drops trailing blank lines; they are re-appended below.
    let trailing_newlines = text.chars().rev().take_while(|&ch| ch == '\n').count();

    let mut out: Vec<String> = Vec::new();

    for raw_line in text.lines() {
        let words: Vec<&str> = raw_line.split_whitespace().collect();
        if words.is_empty() {
            out.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in words {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if measure(&candidate) <= max_line_px {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }

            if measure(word) <= max_line_px {
                current = word.to_string();
                continue;
            }

            // Word alone is too wide: character-wrap it and continue the
            // line from its remainder.
            let mut chunk = String::new();
            for ch in word.chars() {
                let mut grown = chunk.clone();
                grown.push(ch);
                if measure(&grown) <= max_line_px {
                    chunk = grown;
                } else {
                    if !chunk.is_empty() {
                        out.push(std::mem::take(&mut chunk));
                    }
                    chunk.push(ch);
                }
            }
            current = chunk;
        }
        out.push(current);
    }

    for _ in 0..trailing_newlines {
        out.push(String::new());
    }
    out
}

/// Paginate a poem against the display bounds.
///
/// The title block repeats on every page and consumes height on every page;
/// the remaining height is divided into whole body lines, floored to one
/// line per page so pathologically small displays still make progress.
pub fn paginate<D: DisplayPanel>(
    display: &D,
    title: &str,
    body: &str,
    cfg: &KioskConfig,
) -> Layout {
    let (display_w, display_h) = display.bounds();

    let safe_title = sanitize(title);
    let safe_body = sanitize(body);

    let title_lines = wrap_words(
        display,
        &safe_title,
        display_w,
        cfg.margin_px,
        cfg.title_scale,
        cfg.line_spacing_px,
    );
    let body_lines = if safe_body.is_empty() {
        Vec::new()
    } else {
        wrap_words(
            display,
            &safe_body,
            display_w,
            cfg.margin_px,
            cfg.body_scale,
            cfg.line_spacing_px,
        )
    };

    let usable_h = display_h.saturating_sub(cfg.margin_px * 2);
    let title_block_h = title_lines.len() as u32 * line_height(cfg.title_scale, cfg.line_spacing_px)
        + cfg.title_gap_px;
    let body_line_h = line_height(cfg.body_scale, cfg.line_spacing_px).max(1);

    let body_h_per_page = usable_h.saturating_sub(title_block_h);
    let lines_per_page = ((body_h_per_page / body_line_h) as usize).max(1);

    let mut pages: Vec<Vec<String>> = body_lines
        .chunks(lines_per_page)
        .map(<[String]>::to_vec)
        .collect();
    if pages.is_empty() {
        pages.push(Vec::new());
    }

    Layout { title_lines, pages }
}

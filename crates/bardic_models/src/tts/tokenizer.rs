//! Splits text into pieces short enough for one TTS request.

/// Longest piece, in characters, the endpoint accepts.
pub const MAX_CHUNK_CHARS: usize = 100;

fn is_boundary(c: char) -> bool {
    matches!(
        c,
        '.' | '!' | '?' | ';' | ':' | ',' | '¿' | '¡' | '…' | '。' | '！' | '？' | '、' | '，'
    )
}

/// Break `text` into speakable chunks of at most `max_chars` characters.
///
/// Sentences and clauses are kept whole where possible and packed together up
/// to the limit; longer clauses are cut at the last space before the limit.
/// Pieces with nothing alphanumeric in them are dropped, so whitespace or
/// punctuation-only input yields no chunks.
///
/// # Examples
///
/// ```
/// use bardic_models::chunk_text;
///
/// assert_eq!(chunk_text("Hello, world.", 100), vec!["Hello, world."]);
/// assert!(chunk_text(" ... !", 100).is_empty());
/// ```
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);

    let mut clauses = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c == '\n' || c == '\r' {
            clauses.push(std::mem::take(&mut current));
            continue;
        }
        current.push(c);
        if is_boundary(c) {
            clauses.push(std::mem::take(&mut current));
        }
    }
    clauses.push(current);

    let pieces = clauses
        .iter()
        .map(|c| c.trim())
        .filter(|c| c.chars().any(char::is_alphanumeric))
        .flat_map(|c| split_long(c, max_chars));

    let mut chunks: Vec<String> = Vec::new();
    for piece in pieces {
        match chunks.last_mut() {
            Some(last) if last.chars().count() + 1 + piece.chars().count() <= max_chars => {
                last.push(' ');
                last.push_str(&piece);
            }
            _ => chunks.push(piece),
        }
    }
    chunks
}

fn split_long(clause: &str, max_chars: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = clause;

    while rest.chars().count() > max_chars {
        let limit = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let window = &rest[..limit];
        let cut = match window.rfind(char::is_whitespace) {
            Some(i) if i > 0 => i,
            _ => limit,
        };
        let (head, tail) = rest.split_at(cut);
        out.push(head.trim_end().to_string());
        rest = tail.trim_start();
    }

    if !rest.is_empty() {
        out.push(rest.to_string());
    }
    out
}

//! Inline emphasis within a single line
//!
//! Bold (`**x**`) is resolved first over the whole line, then italic (`*x*`)
//! over what remains. Both take the shortest span with at least one character
//! inside. Bold spans are atomic for the italic pass, so an italic span may
//! enclose a bold one but never cross its boundary. Stars that do not delimit
//! a span stay in the text as literal characters.

use super::ast::Inline;

/// Pieces of a line after the bold pass
#[derive(Debug)]
enum Atom {
    /// A `*` at this byte offset (relative to the parsed text)
    Star(usize),
    Text(String),
    Strong(Vec<Inline>),
}

/// Parse inline emphasis in one line of content
pub fn parse_inline(text: &str) -> Vec<Inline> {
    InlineParser::default().parse(text)
}

/// Byte offsets of `*` characters that are shown literally
pub fn literal_markers(text: &str) -> Vec<usize> {
    let mut parser = InlineParser::default();
    parser.parse(text);
    parser.literal_stars.sort_unstable();
    parser.literal_stars
}

#[derive(Default)]
struct InlineParser {
    literal_stars: Vec<usize>,
}

impl InlineParser {
    fn parse(&mut self, text: &str) -> Vec<Inline> {
        let atoms = self.bold_pass(text);
        self.italic_pass(atoms)
    }

    fn bold_pass(&mut self, text: &str) -> Vec<Atom> {
        let bytes = text.as_bytes();
        let mut atoms = Vec::new();
        let mut plain_start = 0;
        let mut i = 0;

        while i + 1 < bytes.len() {
            if &bytes[i..i + 2] == b"**" {
                // At least one character between the markers
                if let Some(close) = find(bytes, b"**", i + 3) {
                    atomize(&text[plain_start..i], plain_start, &mut atoms);
                    let inner = atomize_owned(&text[i + 2..close], i + 2);
                    atoms.push(Atom::Strong(self.italic_pass(inner)));
                    i = close + 2;
                    plain_start = i;
                    continue;
                }
            }
            i += 1;
        }
        atomize(&text[plain_start..], plain_start, &mut atoms);
        atoms
    }

    fn italic_pass(&mut self, atoms: Vec<Atom>) -> Vec<Inline> {
        let mut out = Vec::new();
        let mut atoms: Vec<Option<Atom>> = atoms.into_iter().map(Some).collect();
        let mut k = 0;

        while k < atoms.len() {
            let Some(atom) = atoms[k].take() else {
                k += 1;
                continue;
            };
            match atom {
                Atom::Star(offset) => {
                    // The opening star needs at least one atom before the closing one
                    let close = (k + 2..atoms.len())
                        .find(|&m| matches!(atoms[m], Some(Atom::Star(_))));
                    match close {
                        Some(m) => {
                            let inner: Vec<Atom> =
                                atoms[k + 1..m].iter_mut().filter_map(Option::take).collect();
                            atoms[m] = None;
                            out.push(Inline::Emphasis(self.flatten(inner)));
                            k = m + 1;
                        }
                        None => {
                            self.literal_stars.push(offset);
                            push_text(&mut out, "*");
                            k += 1;
                        }
                    }
                }
                Atom::Text(s) => {
                    push_text(&mut out, &s);
                    k += 1;
                }
                Atom::Strong(children) => {
                    out.push(Inline::Strong(children));
                    k += 1;
                }
            }
        }
        out
    }

    /// Emphasis content: stars inside are literal
    fn flatten(&mut self, atoms: Vec<Atom>) -> Vec<Inline> {
        let mut out = Vec::new();
        for atom in atoms {
            match atom {
                Atom::Star(offset) => {
                    self.literal_stars.push(offset);
                    push_text(&mut out, "*");
                }
                Atom::Text(s) => push_text(&mut out, &s),
                Atom::Strong(children) => out.push(Inline::Strong(children)),
            }
        }
        out
    }
}

/// First occurrence of `needle` at or after `from`
fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

/// Split plain text into star and text atoms
fn atomize(text: &str, base: usize, atoms: &mut Vec<Atom>) {
    let mut start = 0;
    for (i, _) in text.match_indices('*') {
        if i > start {
            atoms.push(Atom::Text(text[start..i].to_string()));
        }
        atoms.push(Atom::Star(base + i));
        start = i + 1;
    }
    if start < text.len() {
        atoms.push(Atom::Text(text[start..].to_string()));
    }
}

fn atomize_owned(text: &str, base: usize) -> Vec<Atom> {
    let mut atoms = Vec::new();
    atomize(text, base, &mut atoms);
    atoms
}

/// Append text, merging with a preceding text node
fn push_text(out: &mut Vec<Inline>, s: &str) {
    if s.is_empty() {
        return;
    }
    if let Some(Inline::Text(last)) = out.last_mut() {
        last.push_str(s);
    } else {
        out.push(Inline::Text(s.to_string()));
    }
}

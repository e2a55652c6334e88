//! Minimal HTML slicing for EGD card pages
//!
//! Only two things are ever needed from a page: the text of one element
//! located by id, and the table row that links to a given tournament.
//! Matching is ASCII case-insensitive; lowering only ASCII keeps byte
//! offsets valid in the original string.

use regex::Regex;
use std::sync::LazyLock;

static RATING_CHANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*-->\s*(\d+)").expect("valid rating change regex"));

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Inner HTML of the first element whose `id` attribute equals `id`
pub fn element_inner_by_id<'a>(html: &'a str, id: &str) -> Option<&'a str> {
    let lc = to_lower(html);
    let id_lc = to_lower(id);

    let attr_pos = [format!("id=\"{}\"", id_lc), format!("id='{}'", id_lc)]
        .iter()
        .filter_map(|needle| lc.find(needle.as_str()))
        .min()?;

    let open_start = lc[..attr_pos].rfind('<')?;
    let open_end = html[attr_pos..].find('>')? + attr_pos + 1;
    let tag: String = lc[open_start + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if tag.is_empty() {
        return None;
    }

    let close_at = matching_close(&lc, &tag, open_end)?;
    Some(&html[open_end..close_at])
}

/// Byte offset of the `</tag` closing the element whose content starts at `from`
fn matching_close(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let open = format!("<{}", tag);
    let close = format!("</{}", tag);
    let mut depth = 1usize;
    let mut pos = from;

    loop {
        let next_close = lc[pos..].find(&close)? + pos;
        let next_open = lc[pos..]
            .find(&open)
            .map(|o| o + pos)
            .filter(|&o| o < next_close);

        match next_open {
            Some(o) => {
                if is_tag_boundary(lc, o + open.len()) {
                    depth += 1;
                }
                pos = o + open.len();
            }
            None => {
                depth -= 1;
                if depth == 0 {
                    return Some(next_close);
                }
                pos = next_close + close.len();
            }
        }
    }
}

fn is_tag_boundary(s: &str, at: usize) -> bool {
    s[at..]
        .chars()
        .next()
        .is_none_or(|c| c.is_ascii_whitespace() || c == '>' || c == '/')
}

/// Byte offset of the next `<tag` opening at or after `from`, skipping
/// longer tag names that share the prefix (`<abbr>` for `a`)
fn find_open_tag(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let open = format!("<{}", tag);
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(&open)? + pos;
        if is_tag_boundary(lc, at + open.len()) {
            return Some(at);
        }
        pos = at + open.len();
    }
}

/// Byte offset of the last `<tag` opening before `before`
fn rfind_open_tag(lc: &str, tag: &str, before: usize) -> Option<usize> {
    let open = format!("<{}", tag);
    let mut end = before;
    loop {
        let at = lc[..end].rfind(&open)?;
        if is_tag_boundary(lc, at + open.len()) {
            return Some(at);
        }
        end = at;
    }
}

/// Next `<tag ...>...</tag>` element at or after `from`, as `(start, end)`
/// byte offsets. Nested elements of the same tag stay inside the block.
pub fn next_tag_block_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let tag = to_lower(tag);
    let start = find_open_tag(&lc, &tag, from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let close_at = matching_close(&lc, &tag, open_end)?;
    let end = lc[close_at..].find('>')? + close_at + 1;
    Some((start, end))
}

/// All top-level `tag` elements in `s`
pub fn tag_blocks<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    let mut blocks = Vec::new();
    let mut from = 0;
    while let Some((start, end)) = next_tag_block_ci(s, tag, from) {
        blocks.push(&s[start..end]);
        from = end;
    }
    blocks
}

/// Innermost `<tr>` element enclosing byte offset `at`
fn enclosing_row<'a>(html: &'a str, lc: &str, at: usize) -> Option<&'a str> {
    let mut before = at;
    loop {
        let start = rfind_open_tag(lc, "tr", before)?;
        let open_end = html[start..].find('>')? + start + 1;
        match matching_close(lc, "tr", open_end) {
            Some(close_at) if close_at > at => return Some(&html[start..close_at]),
            _ => before = start,
        }
    }
}

/// Remove tags, keeping text and whitespace as-is
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Decode named and numeric character references
pub fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&tail[1..semi]).map(|c| (c, semi)));

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                name.strip_prefix('#')?.parse().ok()?
            };
            char::from_u32(code)
        }
    }
}

/// Visible text of an HTML fragment
pub fn text_content(fragment: &str) -> String {
    decode_entities(&strip_tags(fragment))
}

/// Rating a player entered a tournament with, read from their player card.
///
/// Finds the link whose text is `tournament_pin`, takes the innermost table
/// row around it and returns `old` from the first cell of that row showing an
/// `old --> new` rating change.
pub fn tournament_rating(player_card: &str, tournament_pin: &str) -> Option<String> {
    let lc = to_lower(player_card);
    let mut from = 0;

    while let Some((start, end)) = next_tag_block_ci(player_card, "a", from) {
        from = end;
        if text_content(&player_card[start..end]).trim() != tournament_pin {
            continue;
        }

        let rating = enclosing_row(player_card, &lc, start).and_then(|row| {
            tag_blocks(row, "td").into_iter().find_map(|cell| {
                RATING_CHANGE_RE
                    .captures(&text_content(cell))
                    .map(|caps| caps[1].to_string())
            })
        });
        if rating.is_some() {
            return rating;
        }
    }
    None
}

// src/query/tokenize.rs
//
// Word segmentation for mixed Thai/English search text. Thai has no
// whitespace word boundaries, so Thai runs are split by greedy
// longest-match against a fixed domain word list; anything between
// dictionary hits comes out as an opaque chunk that no rule will match.

/// Domain vocabulary for the segmenter. Longest match wins, so generic
/// words ("บ้าน") can coexist with their longer compounds ("บ้านเดี่ยว").
const THAI_WORDS: &[&str] = &[
    "บ้านเดี่ยว",
    "บ้าน",
    "คอนโดมิเนียม",
    "คอนโด",
    "ทาวน์โฮม",
    "ทาวน์เฮ้าส์",
    "ห้องนอน",
    "ห้องน้ำ",
    "ไม่เกิน",
    "ล้าน",
    "บาท",
    "ราคา",
    "ต้องการ",
    "ซื้อ",
    "เช่า",
    "จอง",
    "ว่าง",
    "ใกล้",
    "แถว",
    "ใน",
    "ที่",
    "เมือง",
    "นนทบุรี",
    "กรุงเทพมหานคร",
    "กรุงเทพ",
    "เชียงใหม่",
    "ภูเก็ต",
];

/// Unit/classifier words that bind to a preceding number. A digit token
/// followed by one of these is merged into a single quantity token
/// ("2 ห้องนอน"), which is what the per-token count patterns match on.
const CLASSIFIERS: &[&str] = &["ห้องนอน", "bedroom", "bedrooms", "ล้าน", "บาท"];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Class {
    Thai,
    Digit,
    Latin,
    Skip,
}

fn class_of(c: char) -> Class {
    if ('\u{0E00}'..='\u{0E7F}').contains(&c) {
        Class::Thai
    } else if c.is_ascii_digit() {
        Class::Digit
    } else if c.is_alphabetic() {
        Class::Latin
    } else {
        Class::Skip
    }
}

/// Splits lowercased query text into word tokens. Never fails; input
/// with nothing recognizable just yields opaque tokens (or none).
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut run_class = Class::Skip;

    for c in text.chars() {
        let class = class_of(c);
        if class != run_class {
            flush(&mut tokens, &mut run, run_class);
            run_class = class;
        }
        if class != Class::Skip {
            run.push(c);
        }
    }
    flush(&mut tokens, &mut run, run_class);

    merge_quantities(tokens)
}

fn flush(tokens: &mut Vec<String>, run: &mut String, class: Class) {
    if run.is_empty() {
        return;
    }
    match class {
        Class::Thai => segment_thai(run, tokens),
        Class::Digit | Class::Latin => tokens.push(run.clone()),
        Class::Skip => {}
    }
    run.clear();
}

/// Greedy maximal matching over one unbroken Thai run. Characters not
/// covered by the dictionary are grouped into a single chunk up to the
/// next dictionary hit.
fn segment_thai(run: &str, out: &mut Vec<String>) {
    let mut rest = run;
    let mut unknown = String::new();

    while !rest.is_empty() {
        let hit = THAI_WORDS
            .iter()
            .filter(|w| rest.starts_with(**w))
            .max_by_key(|w| w.len());

        match hit {
            Some(word) => {
                if !unknown.is_empty() {
                    out.push(std::mem::take(&mut unknown));
                }
                out.push((*word).to_string());
                rest = &rest[word.len()..];
            }
            None => {
                let c = rest.chars().next().unwrap();
                unknown.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    if !unknown.is_empty() {
        out.push(unknown);
    }
}

fn merge_quantities(raw: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(raw.len());
    let mut iter = raw.into_iter().peekable();

    while let Some(token) = iter.next() {
        let is_number = token.chars().all(|c| c.is_ascii_digit());
        if is_number {
            if let Some(next) = iter.peek() {
                if CLASSIFIERS.contains(&next.as_str()) {
                    let unit = iter.next().unwrap();
                    out.push(format!("{token} {unit}"));
                    continue;
                }
            }
        }
        out.push(token);
    }

    out
}

use crate::constants::report::{DEFAULT_SENTIMENT_INDEX, SECTION_DELIMITER, SENTIMENT_INDEX_MAX};
use crate::types::ReportSection;

/// One classification rule: a title predicate plus a section builder.
/// Builders return None to drop a section whose content is empty.
struct SectionRule {
    matches: fn(&str) -> bool,
    build: fn(&str) -> Option<ReportSection>,
}

/// Evaluated in priority order, first match wins. A fragment matching no
/// rule falls through to Generic with its raw text.
const RULES: &[SectionRule] = &[
    SectionRule {
        matches: is_sentiment_index,
        build: build_sentiment_index,
    },
    SectionRule {
        matches: is_market_prediction,
        build: build_market_prediction,
    },
    SectionRule {
        matches: is_headlines,
        build: build_headlines,
    },
];

/// Partition a live-analysis blob into typed sections.
///
/// Best-effort: the grounded provider call cannot be schema-constrained,
/// so malformed output degrades to Generic sections or an empty list,
/// never an error. Pure with respect to a single call.
pub fn parse_report(text: &str) -> Vec<ReportSection> {
    let mut sections = Vec::new();

    for fragment in text.split(SECTION_DELIMITER) {
        if fragment.trim().is_empty() {
            continue;
        }

        let (title, body) = split_fragment(fragment);

        match RULES.iter().find(|rule| (rule.matches)(title)) {
            Some(rule) => {
                if let Some(section) = (rule.build)(body) {
                    sections.push(section);
                }
            }
            None => sections.push(ReportSection::Generic {
                // Keep the untrimmed fragment so a label that failed
                // classification stays visible.
                text: fragment.to_string(),
            }),
        }
    }

    sections
}

/// Split a fragment once on the first colon. When no colon exists the whole
/// fragment is the title probe and the body is whatever follows the header
/// line.
fn split_fragment(fragment: &str) -> (&str, &str) {
    match fragment.split_once(':') {
        Some((title, body)) => (title, body),
        None => match fragment.split_once('\n') {
            Some((_, rest)) => (fragment, rest),
            None => (fragment, ""),
        },
    }
}

fn is_sentiment_index(title: &str) -> bool {
    title.contains("Daily Sentiment Index")
}

fn is_market_prediction(title: &str) -> bool {
    title.contains("Market Prediction")
}

fn is_headlines(title: &str) -> bool {
    title.contains("Key Headlines") || title.contains("Headlines")
}

fn build_sentiment_index(body: &str) -> Option<ReportSection> {
    if body.trim().is_empty() {
        return None;
    }
    Some(ReportSection::SentimentIndex {
        score: scan_score(body),
    })
}

fn build_market_prediction(body: &str) -> Option<ReportSection> {
    let text = body.trim();
    if text.is_empty() {
        return None;
    }
    Some(ReportSection::MarketPrediction {
        text: text.to_string(),
    })
}

fn build_headlines(body: &str) -> Option<ReportSection> {
    // Trim the edges only; internal line breaks are preformatted content.
    let text = body.trim();
    if text.is_empty() {
        return None;
    }
    Some(ReportSection::Headlines {
        text: text.to_string(),
    })
}

/// First run of decimal digits anywhere in the body, clamped to the 0-100
/// scale; 50 when the body carries no digits at all.
fn scan_score(body: &str) -> u32 {
    let Some(start) = body.find(|c: char| c.is_ascii_digit()) else {
        return DEFAULT_SENTIMENT_INDEX;
    };

    let digits = &body[start..];
    let run_len = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..run_len]
        .parse::<u32>()
        .unwrap_or(u32::MAX)
        .min(SENTIMENT_INDEX_MAX)
}

//! Rule-based query interpreter
//!
//! Every detector is a row in a rule table. Tables are walked in order;
//! amount tables stop at the first row that yields a usable number, the
//! category and tag tables apply every matching row.

use super::{category, ContentTag, ParsedQuery, SortBy};
use lazy_static::lazy_static;
use regex::Regex;

/// Control phrases stripped from the query before keywords are collected
pub const STOP_WORDS: &[&str] = &[
    "harga",
    "kalori",
    "dibawah",
    "di bawah",
    "murah",
    "termurah",
    "rekomendasi",
    "makanan",
    "minuman",
    "produk",
    "yang",
    "<",
    "rb",
    "ribu",
    "berkuah",
    "kering",
    "sembako",
    "promo",
    "diskon",
    "voucher",
    "gratis",
    "skincare",
    "kecantikan",
    "toserba",
];

/// Words that turn on price sorting and the cheap threshold
const CHEAP_WORDS: &[&str] = &["murah", "termurah", "rekomendasi"];

/// How a captured number maps onto the filter's unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scaling {
    /// Values below 1000 are read as thousands of Rupiah ("30" means 30.000)
    Thousands,
    Literal,
}

/// Detector for a numeric ceiling; capture group 1 holds the number
struct AmountRule {
    pattern: Regex,
    scaling: Scaling,
}

struct CategoryRule {
    pattern: Regex,
    category: &'static str,
    skincare: bool,
}

struct TagRule {
    pattern: Regex,
    tag: ContentTag,
}

fn amount(pattern: &str, scaling: Scaling) -> AmountRule {
    AmountRule {
        pattern: Regex::new(pattern).unwrap(),
        scaling,
    }
}

fn category_rule(pattern: &str, category: &'static str, skincare: bool) -> CategoryRule {
    CategoryRule {
        pattern: Regex::new(pattern).unwrap(),
        category,
        skincare,
    }
}

fn tag_rule(pattern: &str, tag: ContentTag) -> TagRule {
    TagRule {
        pattern: Regex::new(pattern).unwrap(),
        tag,
    }
}

// Whole-word tests use ASCII word boundaries: a non-ASCII letter such as
// `é` next to a word does not join it.
lazy_static! {
    static ref PRICE_RULES: Vec<AmountRule> = vec![
        amount(
            r"(?i)(?:harga\s*(?:di\s*)?bawah|price\s*below)\s*([0-9]+)",
            Scaling::Thousands
        ),
        amount(r"(?i)([0-9]+)\s*(?:rb|ribu)", Scaling::Thousands),
        amount(r"<\s*([0-9]+)", Scaling::Thousands),
    ];
    static ref CALORIE_RULES: Vec<AmountRule> = vec![
        amount(r"(?i)kalori\s*(?:di\s*)?bawah\s*([0-9]+)", Scaling::Literal),
        amount(r"(?i)kalori\s*<\s*([0-9]+)", Scaling::Literal),
    ];
    static ref CATEGORY_RULES: Vec<CategoryRule> = vec![
        category_rule(r"(?-u:\b)skincare(?-u:\b)", category::KECANTIKAN, true),
        category_rule(r"(?-u:\b)kecantikan(?-u:\b)", category::KECANTIKAN, false),
        category_rule(r"(?-u:\b)makanan(?-u:\b)", category::MAKANAN, false),
        category_rule(r"(?-u:\b)minuman(?-u:\b)", category::MINUMAN, false),
        category_rule(r"(?-u:\b)fashion(?-u:\b)", category::FASHION, false),
        category_rule(r"(?-u:\b)aksesoris(?-u:\b)", category::AKSESORIS, false),
        category_rule(r"(?-u:\b)kerajinan(?-u:\b)", category::KERAJINAN, false),
        category_rule(r"(?-u:\b)(?:toserba|sembako)(?-u:\b)", category::TOSERBA, false),
    ];
    static ref TAG_RULES: Vec<TagRule> = vec![
        tag_rule(r"berkuah|kuah|sop|soto|rawon", ContentTag::Berkuah),
        tag_rule(
            r"makanan kering|kering|goreng|keripik|kerupuk|serundeng",
            ContentTag::Kering
        ),
        tag_rule(r"sembako", ContentTag::Sembako),
    ];
    static ref PROMO_RE: Regex =
        Regex::new(r"(?-u:\b)(?:promo|diskon|voucher|gratis)(?-u:\b)").unwrap();
    static ref STOP_WORDS_RE: Regex = Regex::new(&format!(
        "(?i){}",
        STOP_WORDS
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|")
    ))
    .unwrap();
}

/// Digits of `captured`, or None when there are none or the value is zero
fn parse_amount(captured: &str) -> Option<u64> {
    let digits: String = captured.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<u64>().ok().filter(|n| *n > 0)
}

/// First usable amount across `rules`, in table order
fn first_amount(text: &str, rules: &[AmountRule]) -> Option<u64> {
    rules.iter().find_map(|rule| {
        let captures = rule.pattern.captures(text)?;
        let n = parse_amount(captures.get(1)?.as_str())?;
        Some(match rule.scaling {
            Scaling::Thousands if n < 1000 => n * 1000,
            _ => n,
        })
    })
}

fn extract_keywords(text: &str) -> Vec<String> {
    STOP_WORDS_RE
        .replace_all(text, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Interpret a raw buyer query.
///
/// Total: an unrecognised query simply yields an empty [`ParsedQuery`]
/// (apart from residual keywords).
pub fn parse_query(raw: &str) -> ParsedQuery {
    let text = raw.to_lowercase();
    let mut parsed = ParsedQuery {
        max_price: first_amount(&text, &PRICE_RULES),
        max_calories: first_amount(&text, &CALORIE_RULES),
        ..Default::default()
    };

    if CHEAP_WORDS.iter().any(|w| text.contains(w)) {
        parsed.sort_by = Some(SortBy::Price);
        parsed.cheap_hint = true;
    }

    for rule in CATEGORY_RULES.iter() {
        if rule.pattern.is_match(&text) {
            parsed.category_hints.insert(rule.category.to_string());
            parsed.skincare_hint |= rule.skincare;
        }
    }

    parsed.promo_only = PROMO_RE.is_match(&text);

    for rule in TAG_RULES.iter() {
        if rule.pattern.is_match(&text) {
            parsed.tags.insert(rule.tag);
        }
    }

    parsed.keywords = extract_keywords(&text);

    tracing::debug!(
        "Parsed query '{}' → max_price={:?}, max_calories={:?}, categories={:?}, tags={:?}, keywords={:?}",
        raw,
        parsed.max_price,
        parsed.max_calories,
        parsed.category_hints,
        parsed.tags,
        parsed.keywords
    );

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_below_scaled_to_thousands() {
        let parsed = parse_query("harga di bawah 30");
        assert_eq!(parsed.max_price, Some(30_000));
    }

    #[test]
    fn test_price_below_literal() {
        assert_eq!(parse_query("harga di bawah 50000").max_price, Some(50_000));
        assert_eq!(parse_query("Harga dibawah 1000").max_price, Some(1_000));
        assert_eq!(parse_query("price below 45").max_price, Some(45_000));
    }

    #[test]
    fn test_price_thousands_suffix() {
        assert_eq!(parse_query("kopi 25rb").max_price, Some(25_000));
        assert_eq!(parse_query("kopi 25 ribu").max_price, Some(25_000));
    }

    #[test]
    fn test_price_less_than() {
        assert_eq!(parse_query("harga < 30000").max_price, Some(30_000));
        assert_eq!(parse_query("<15").max_price, Some(15_000));
    }

    #[test]
    fn test_price_zero_falls_through_to_next_rule() {
        let parsed = parse_query("harga di bawah 0 atau 20rb");
        assert_eq!(parsed.max_price, Some(20_000));
    }

    #[test]
    fn test_calories() {
        assert_eq!(parse_query("kalori di bawah 100").max_calories, Some(100));
        assert_eq!(parse_query("kalori < 250").max_calories, Some(250));
        assert_eq!(parse_query("kalori dibawah 50").max_calories, Some(50));
    }

    #[test]
    fn test_calorie_number_also_feeds_price_rule() {
        let parsed = parse_query("kalori < 100");
        assert_eq!(parsed.max_calories, Some(100));
        assert_eq!(parsed.max_price, Some(100_000));
    }

    #[test]
    fn test_skincare_murah() {
        let parsed = parse_query("skincare murah");
        assert_eq!(
            parsed.category_hints.iter().collect::<Vec<_>>(),
            vec!["Kecantikan"]
        );
        assert!(parsed.skincare_hint);
        assert!(parsed.cheap_hint);
        assert_eq!(parsed.sort_by, Some(SortBy::Price));
        assert!(parsed.keywords.is_empty());
    }

    #[test]
    fn test_duplicate_category_hints_collapse() {
        let parsed = parse_query("skincare kecantikan");
        assert_eq!(parsed.category_hints.len(), 1);
    }

    #[test]
    fn test_multiple_categories() {
        let parsed = parse_query("makanan dan minuman");
        assert!(parsed.has_category("Makanan"));
        assert!(parsed.has_category("Minuman"));
        assert_eq!(parsed.keywords, vec!["dan"]);
    }

    #[test]
    fn test_sembako_sets_category_and_tag() {
        let parsed = parse_query("Sembako promo");
        assert!(parsed.has_category("Toserba"));
        assert!(parsed.has_tag(ContentTag::Sembako));
        assert!(parsed.promo_only);
        assert!(parsed.keywords.is_empty());
    }

    #[test]
    fn test_promo_requires_whole_word() {
        assert!(parse_query("ada diskon?").promo_only);
        assert!(!parse_query("promosi").promo_only);
    }

    #[test]
    fn test_content_tags() {
        assert!(parse_query("makanan berkuah").has_tag(ContentTag::Berkuah));
        assert!(parse_query("soto").has_tag(ContentTag::Berkuah));
        let dry = parse_query("makanan kering");
        assert!(dry.has_tag(ContentTag::Kering));
        assert!(dry.has_category("Makanan"));
        assert!(parse_query("keripik pedas").has_tag(ContentTag::Kering));
    }

    #[test]
    fn test_keywords_preserve_order() {
        let parsed = parse_query("Es Krim Durian");
        assert_eq!(parsed.keywords, vec!["es", "krim", "durian"]);
    }

    #[test]
    fn test_stop_words_removed_from_keywords() {
        let parsed = parse_query("rekomendasi produk yang termurah");
        assert!(parsed.keywords.is_empty());
        assert!(parsed.cheap_hint);
    }

    #[test]
    fn test_numbers_survive_as_keywords() {
        let parsed = parse_query("harga di bawah 30");
        assert_eq!(parsed.keywords, vec!["30"]);
    }

    #[test]
    fn test_unrecognised_query() {
        let parsed = parse_query("batik tulis");
        assert_eq!(parsed.max_price, None);
        assert_eq!(parsed.max_calories, None);
        assert_eq!(parsed.sort_by, None);
        assert!(parsed.category_hints.is_empty());
        assert!(parsed.tags.is_empty());
        assert!(!parsed.promo_only && !parsed.cheap_hint && !parsed.skincare_hint);
        assert_eq!(parsed.keywords, vec!["batik", "tulis"]);
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(parse_query(""), ParsedQuery::default());
        assert_eq!(parse_query("   "), ParsedQuery::default());
    }

    #[test]
    fn test_oversized_number_is_skipped() {
        let parsed = parse_query("harga di bawah 99999999999999999999999");
        assert_eq!(parsed.max_price, None);
    }

    #[test]
    fn test_non_ascii_letters_are_word_boundaries() {
        assert!(parse_query("promoé").promo_only);
        assert!(parse_query("éfashion").has_category(category::FASHION));
        assert!(parse_query("kerajinanñ").has_category(category::KERAJINAN));

        assert!(!parse_query("promosi").promo_only);
        assert!(parse_query("fashionable").category_hints.is_empty());
    }
}

//! Locale-aware ordering for product names.
//!
//! Names compare the way a Portuguese reader expects: accents and case do not
//! change which letter a word starts with, so "Água" sorts next to "agenda" rather
//! than after "zebra". Comparison runs in three levels, each one only consulted
//! when the previous one ties:
//!
//! 1. base letters (diacritics removed, case folded)
//! 2. accents (unaccented before accented)
//! 3. case (lower before upper)
//!
//! A final comparison of the raw text makes the order total.

use std::cmp::Ordering;

pub fn compare_names(a: &str, b: &str) -> Ordering {
    let primary = base_key(a).cmp(base_key(b));
    primary
        .then_with(|| accent_key(a).cmp(accent_key(b)))
        .then_with(|| case_key(a).cmp(case_key(b)))
        .then_with(|| a.cmp(b))
}

fn base_key(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| fold_diacritic(c).0)
}

fn accent_key(text: &str) -> impl Iterator<Item = bool> + '_ {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| fold_diacritic(c).1)
}

fn case_key(text: &str) -> impl Iterator<Item = bool> + '_ {
    text.chars().map(char::is_uppercase)
}

/// Maps a lower-case letter to its base letter, flagging whether it carried a mark.
fn fold_diacritic(c: char) -> (char, bool) {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => return (other, false),
    };
    (base, true)
}

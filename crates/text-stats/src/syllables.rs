/// Heuristic syllable estimate for a single word.
///
/// Counts vowel groups over the word's letters, then drops a silent trailing `e`
/// and the unvoiced `-es`/`-ed` endings. Any non-empty word counts at least one.
pub fn count(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    let mut groups = 0usize;
    let mut prev_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }

    if groups > 1 && silent_ending(&letters) {
        groups -= 1;
    }
    groups.max(1)
}

fn silent_ending(letters: &[char]) -> bool {
    match letters {
        // "table", "little": the consonant + le keeps its own syllable
        [.., c, 'l', 'e'] if !is_vowel(*c) => false,
        [.., c, 'e'] if !is_vowel(*c) => true,
        // "wanted", "boxes" keep the ending; "jumped", "makes" do not
        [.., c, 'e', 'd'] => !is_vowel(*c) && !matches!(*c, 't' | 'd'),
        [.., c, 'e', 's'] => !is_vowel(*c) && !matches!(*c, 's' | 'x' | 'z' | 'c' | 'g' | 'h'),
        _ => false,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'y'
            | 'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'æ'
            | 'è' | 'é' | 'ê' | 'ë'
            | 'ì' | 'í' | 'î' | 'ï'
            | 'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'œ'
            | 'ù' | 'ú' | 'û' | 'ü' | 'ÿ'
            | 'а' | 'е' | 'ё' | 'и' | 'о' | 'у' | 'ы' | 'э' | 'ю' | 'я'
    )
}

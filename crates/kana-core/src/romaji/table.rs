use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use tracing::{debug, debug_span};

use super::config::{parse_romaji_toml, RomajiConfigError, RomajiTableConfig};
use crate::tree::{MappingTree, MutableNode};

pub const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static HEPBURN_TREE: OnceLock<MappingTree> = OnceLock::new();
static BUILT_FROM_CUSTOM: AtomicBool = AtomicBool::new(false);

pub(crate) const SOKUON: char = 'っ';
pub(crate) const MORAIC_NASAL: char = 'ん';

const SMALL_Y: [(char, &str); 3] = [('ゃ', "ya"), ('ゅ', "yu"), ('ょ', "yo")];
const SMALL_Y_EXTRA: [(char, &str); 2] = [('ぃ', "yi"), ('ぇ', "ye")];
const SMALL_AIUEO: [(char, &str); 5] = [
    ('ぁ', "a"),
    ('ぃ', "i"),
    ('ぅ', "u"),
    ('ぇ', "e"),
    ('ぉ', "o"),
];
const SMALL_KANA: [(char, &str); 9] = [
    (SOKUON, ""),
    ('ゃ', "ya"),
    ('ゅ', "yu"),
    ('ょ', "yo"),
    ('ぁ', "a"),
    ('ぃ', "i"),
    ('ぅ', "u"),
    ('ぇ', "e"),
    ('ぉ', "o"),
];

/// Kana whose leading consonant letter combines with a small ゃ/ゅ/ょ.
pub(crate) const YOON_KANA: [char; 11] =
    ['き', 'に', 'ひ', 'み', 'り', 'ぎ', 'び', 'ぴ', 'ゔ', 'く', 'ふ'];
/// Kana whose yōon uses a consonant cluster instead of consonant + "y".
pub(crate) const YOON_EXCEPTIONS: [(char, &str); 4] =
    [('し', "sh"), ('ち', "ch"), ('じ', "j"), ('ぢ', "j")];
/// Kana that get an apostrophe after a preceding ん.
pub(crate) const AMBIGUOUS_VOWELS: [char; 8] = ['あ', 'い', 'う', 'え', 'お', 'や', 'ゆ', 'よ'];

/// Leading consonants doubled after っ, and the letter they double to.
/// Everything else (vowels, "n", symbols) is left alone.
fn sokuon_consonant(c: char) -> Option<char> {
    match c {
        'c' => Some('t'),
        'b' | 'd' | 'f' | 'g' | 'h' | 'j' | 'k' | 'm' | 'p' | 'q' | 'r' | 's' | 't' | 'v'
        | 'w' | 'x' | 'z' => Some(c),
        _ => None,
    }
}

/// Set custom table TOML before first `hepburn_tree()` call.
pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
    // Validate eagerly
    parse_romaji_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| RomajiConfigError::AlreadyInitialized)?;
    // A tree built before the set above never saw the custom table.
    if HEPBURN_TREE.get().is_some() && !BUILT_FROM_CUSTOM.load(Ordering::Acquire) {
        return Err(RomajiConfigError::AlreadyInitialized);
    }
    Ok(())
}

/// Get or build the process-wide Hiragana → Hepburn tree.
pub fn hepburn_tree() -> &'static MappingTree {
    HEPBURN_TREE.get_or_init(|| {
        let custom = CUSTOM_TOML.get();
        BUILT_FROM_CUSTOM.store(custom.is_some(), Ordering::Release);
        let toml_str = custom.map(|s| s.as_str()).unwrap_or(DEFAULT_TOML);
        // init_custom validated the custom table and build.rs the default one.
        let config = parse_romaji_toml(toml_str).expect("romaji TOML must be valid");
        build_hepburn_tree(&config).freeze()
    })
}

fn value_of(tree: &MutableNode, kana: char) -> Option<String> {
    tree.get(kana)?.value().map(str::to_string)
}

/// Build the mutable Hepburn tree from validated table data.
pub fn build_hepburn_tree(config: &RomajiTableConfig) -> MutableNode {
    let _span = debug_span!("build_hepburn_tree", syllables = config.syllables.len()).entered();
    let mut tree = MutableNode::new();

    for (kana, romaji) in &config.syllables {
        tree.set_value(kana, romaji.as_str());
    }

    for (symbol, latin) in &config.symbols {
        tree.set_value(symbol, latin.as_str());
    }

    // うぃ, くぁ, ... fall back to these when no digraph exists.
    for (kana, romaji) in SMALL_Y.iter().chain(SMALL_AIUEO.iter()) {
        tree.set_value(&kana.to_string(), *romaji);
    }

    // きゃ → kya, きぃ → kyi
    for kana in YOON_KANA {
        let Some(consonant) = value_of(&tree, kana).and_then(|v| v.chars().next()) else {
            continue;
        };
        for (small, romaji) in SMALL_Y {
            tree.set_value(&format!("{kana}{small}"), format!("{consonant}{romaji}"));
        }
        for (small, romaji) in SMALL_Y_EXTRA {
            let path = format!("{kana}{small}");
            if tree.find(&path).and_then(MutableNode::value).is_none() {
                tree.set_value(&path, format!("{consonant}{romaji}"));
            }
        }
    }

    // じゃ → ja, しぇ → she
    for (kana, cluster) in YOON_EXCEPTIONS {
        for (small, romaji) in SMALL_Y {
            let vowel = &romaji[1..];
            tree.set_value(&format!("{kana}{small}"), format!("{cluster}{vowel}"));
        }
        tree.set_value(&format!("{kana}ぃ"), format!("{cluster}yi"));
        tree.set_value(&format!("{kana}ぇ"), format!("{cluster}e"));
    }

    let sokuon = sokuon_subtree(&tree);
    tree.replace_subtree(&SOKUON.to_string(), sokuon);

    for (kana, romaji) in SMALL_KANA {
        tree.set_value(&kana.to_string(), romaji);
    }

    // んあ → n'a, so it never reads as な
    for kana in AMBIGUOUS_VOWELS {
        if let Some(romaji) = value_of(&tree, kana) {
            tree.set_value(&format!("{MORAIC_NASAL}{kana}"), format!("n'{romaji}"));
        }
    }

    if !config.overrides.is_empty() {
        let mut overrides = MutableNode::new();
        for (kana, romaji) in &config.overrides {
            overrides.set_value(kana, romaji.as_str());
        }
        overrides.merge_into(&mut tree);
    }

    debug!(node_count = tree.node_count(), "hepburn tree built");
    tree
}

/// Copy of `base` with every value's leading consonant doubled.
fn sokuon_subtree(base: &MutableNode) -> MutableNode {
    let mut sokuon = base.duplicate();
    sokuon.map_values(&mut |romaji| {
        match romaji.chars().next().and_then(sokuon_consonant) {
            Some(doubled) => format!("{doubled}{romaji}"),
            None => romaji.to_string(),
        }
    });
    sokuon
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(path: &str) -> Option<&'static str> {
        hepburn_tree().find(path).and_then(|n| n.value())
    }

    #[test]
    fn base_syllables() {
        assert_eq!(lookup("か"), Some("ka"));
        assert_eq!(lookup("し"), Some("shi"));
        assert_eq!(lookup("ち"), Some("chi"));
        assert_eq!(lookup("つ"), Some("tsu"));
        assert_eq!(lookup("ん"), Some("n"));
        assert_eq!(lookup("ゔぁ"), Some("va"));
    }

    #[test]
    fn symbols() {
        assert_eq!(lookup("。"), Some("."));
        assert_eq!(lookup("、"), Some(","));
        assert_eq!(lookup("〜"), Some("~"));
        assert_eq!(lookup("「"), Some("‘"));
        assert_eq!(lookup("　"), Some(" "));
        assert_eq!(lookup("ー"), Some("-"));
    }

    #[test]
    fn yoon_digraphs() {
        assert_eq!(lookup("きゃ"), Some("kya"));
        assert_eq!(lookup("にゅ"), Some("nyu"));
        assert_eq!(lookup("ぴょ"), Some("pyo"));
        assert_eq!(lookup("きぃ"), Some("kyi"));
        assert_eq!(lookup("ふぇ"), Some("fye"));
        // ゔぃ is already a base syllable; the extra digraph does not clobber it.
        assert_eq!(lookup("ゔぃ"), Some("vi"));
        assert_eq!(lookup("ゔゃ"), Some("vya"));
    }

    #[test]
    fn yoon_exceptions() {
        assert_eq!(lookup("しゃ"), Some("sha"));
        assert_eq!(lookup("ちゅ"), Some("chu"));
        assert_eq!(lookup("じょ"), Some("jo"));
        assert_eq!(lookup("ぢゃ"), Some("ja"));
        assert_eq!(lookup("しぇ"), Some("she"));
        assert_eq!(lookup("ちぃ"), Some("chyi"));
    }

    #[test]
    fn small_kana() {
        assert_eq!(lookup("っ"), Some(""));
        assert_eq!(lookup("ゃ"), Some("ya"));
        assert_eq!(lookup("ぁ"), Some("a"));
    }

    #[test]
    fn sokuon_gemination() {
        assert_eq!(lookup("っか"), Some("kka"));
        assert_eq!(lookup("っち"), Some("tchi"));
        assert_eq!(lookup("っちゃ"), Some("tcha"));
        assert_eq!(lookup("っしゃ"), Some("ssha"));
        assert_eq!(lookup("っぱ"), Some("ppa"));
        // Vowels, ん and symbols are not doubled.
        assert_eq!(lookup("っあ"), Some("a"));
        assert_eq!(lookup("っん"), Some("n"));
        assert_eq!(lookup("っ。"), Some("."));
    }

    #[test]
    fn moraic_nasal_apostrophe() {
        assert_eq!(lookup("んあ"), Some("n'a"));
        assert_eq!(lookup("んよ"), Some("n'yo"));
        assert!(hepburn_tree().find("んか").is_none());
        assert!(!hepburn_tree().find("ん").unwrap().is_leaf());
    }

    #[test]
    fn global_is_built_once() {
        let a: *const MappingTree = hepburn_tree();
        let b: *const MappingTree = hepburn_tree();
        assert_eq!(a, b);
    }

    #[test]
    fn concurrent_first_use_builds_once() {
        use std::sync::atomic::AtomicUsize;
        use std::thread;

        let tree: OnceLock<MappingTree> = OnceLock::new();
        let builds = AtomicUsize::new(0);
        let config = parse_romaji_toml(DEFAULT_TOML).unwrap();

        let seen: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        let built = tree.get_or_init(|| {
                            builds.fetch_add(1, Ordering::SeqCst);
                            build_hepburn_tree(&config).freeze()
                        });
                        assert_eq!(built.find("っちゃ").and_then(|n| n.value()), Some("tcha"));
                        assert_eq!(built.find("んあ").and_then(|n| n.value()), Some("n'a"));
                        built as *const MappingTree as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(seen.iter().all(|&p| p == seen[0]));
    }

    #[test]
    fn overrides_merge_over_derived_values() {
        let mut config = parse_romaji_toml(DEFAULT_TOML).unwrap();
        config.overrides.insert("し".into(), "si".into());
        config.overrides.insert("てぃ".into(), "ti".into());
        let tree = build_hepburn_tree(&config);
        assert_eq!(tree.find("し").unwrap().value(), Some("si"));
        assert_eq!(tree.find("てぃ").unwrap().value(), Some("ti"));
        // Derived digraphs under し survive the merge.
        assert_eq!(tree.find("しゃ").unwrap().value(), Some("sha"));
    }

    #[test]
    fn init_custom_after_first_use_fails() {
        hepburn_tree();
        let err = init_custom(DEFAULT_TOML.to_string()).unwrap_err();
        assert!(matches!(err, RomajiConfigError::AlreadyInitialized));
    }

    #[test]
    fn init_custom_rejects_invalid_toml() {
        let err = init_custom("[syllables]\n".to_string()).unwrap_err();
        assert!(matches!(err, RomajiConfigError::Empty));
    }
}

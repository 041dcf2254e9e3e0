pub mod katakana;
pub mod okurigana;
pub mod romaji;
pub mod tokenize;
pub mod tree;
pub mod unicode;

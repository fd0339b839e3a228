// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-scoring language detection.
//!
//! Each supported language carries a small list of indicator strings;
//! a message is lowercased and every indicator found as a substring
//! scores one point. The highest-scoring language wins, with earlier
//! table entries winning ties. No score at all means English.

use deskmate_core::Language;
use tracing::debug;

/// Indicator strings per language, in tie-break order. A language earlier
/// in this table beats a later one at equal score, so the order is part
/// of the detector's observable behavior and must not be rearranged.
static LANGUAGE_INDICATORS: &[(Language, &[&str])] = &[
    (
        Language::It,
        &[
            "ciao",
            "grazie",
            "per favore",
            "aiuto",
            "problema",
            "password",
            "italiano",
            "ho",
            "bisogno",
            "può",
            "salve",
            "buongiorno",
        ],
    ),
    (
        Language::Es,
        &[
            "hola",
            "gracias",
            "por favor",
            "ayuda",
            "problema",
            "contraseña",
            "español",
            "tengo",
            "necesito",
            "puede",
            "buenos días",
            "quiero",
            "instalar",
            "como",
            "donde",
            "que",
            "soy",
            "estoy",
            "mi",
            "tu",
            "su",
            "este",
            "esta",
        ],
    ),
    (
        Language::Fr,
        &[
            "bonjour",
            "merci",
            "s'il vous plaît",
            "aide",
            "problème",
            "mot de passe",
            "français",
            "j'ai",
            "besoin",
            "pouvez",
            "salut",
        ],
    ),
    (
        Language::De,
        &[
            "hallo",
            "danke",
            "bitte",
            "hilfe",
            "problem",
            "passwort",
            "deutsch",
            "ich habe",
            "brauche",
            "können",
            "guten tag",
        ],
    ),
    (
        Language::Pt,
        &[
            "olá",
            "obrigado",
            "por favor",
            "ajuda",
            "problema",
            "senha",
            "português",
            "tenho",
            "preciso",
            "pode",
            "bom dia",
        ],
    ),
    (
        Language::Nl,
        &[
            "hallo",
            "dank je",
            "alsjeblieft",
            "hulp",
            "probleem",
            "wachtwoord",
            "nederlands",
            "ik heb",
            "nodig",
            "kunt",
            "goedemorgen",
        ],
    ),
    (
        Language::Zh,
        &[
            "你好", "谢谢", "请", "帮助", "问题", "密码", "中文", "我有", "需要", "可以",
        ],
    ),
    (
        Language::Ja,
        &[
            "こんにちは",
            "ありがとう",
            "お願い",
            "ヘルプ",
            "問題",
            "パスワード",
            "日本語",
            "私は",
            "必要",
            "できます",
        ],
    ),
    (
        Language::Ko,
        &[
            "안녕하세요",
            "감사합니다",
            "제발",
            "도움",
            "문제",
            "비밀번호",
            "한국어",
            "저는",
            "필요",
            "할 수",
        ],
    ),
    (
        Language::Ar,
        &[
            "مرحبا",
            "شكرا",
            "من فضلك",
            "مساعدة",
            "مشكلة",
            "كلمة المرور",
            "عربي",
            "لدي",
            "أحتاج",
            "يمكن",
        ],
    ),
    (
        Language::Ru,
        &[
            "привет",
            "спасибо",
            "пожалуйста",
            "помощь",
            "проблема",
            "пароль",
            "русский",
            "у меня",
            "нужно",
            "можете",
        ],
    ),
    (
        Language::Hi,
        &[
            "नमस्ते",
            "धन्यवाद",
            "कृपया",
            "मदद",
            "समस्या",
            "पासवर्ड",
            "हिंदी",
            "मेरे पास",
            "चाहिए",
            "कर सकते",
        ],
    ),
];

/// Detects the language of a user message via indicator scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageDetector;

impl LanguageDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detect the language of `text`.
    ///
    /// Indicators match as substrings of the lowercased message, so short
    /// indicators deliberately fire inside larger words; the scoring
    /// threshold handles the noise. Ties keep the earlier table entry,
    /// and a zero score everywhere falls back to English.
    pub fn detect(&self, text: &str) -> Language {
        let text_lower = text.to_lowercase();

        let mut best_language = None;
        let mut best_score = 0usize;

        for (language, indicators) in LANGUAGE_INDICATORS {
            let score = indicators
                .iter()
                .filter(|indicator| text_lower.contains(*indicator))
                .count();
            // Strictly greater: at equal score the first table entry wins.
            if score > best_score {
                best_score = score;
                best_language = Some(*language);
            }
        }

        let detected = best_language.unwrap_or(Language::DEFAULT);
        debug!(language = %detected, score = best_score, "language detected");
        detected
    }
}

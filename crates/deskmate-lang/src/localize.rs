// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Localized interface text and AI language directives.
//!
//! Translation bundles exist for English, Spanish, French, German, and
//! Chinese; every other supported language reads through the English
//! fallback. The bundles hold interface strings only — troubleshooting
//! templates carry their own translations.

use deskmate_core::Language;

static EN: &[(&str, &str)] = &[
    (
        "welcome",
        "Hello! I'm your AI-powered IT Helpdesk assistant. How can I help you today?",
    ),
    ("ask_question", "Ask your IT question:"),
    ("send", "Send"),
    ("helpful", "Helpful"),
    ("not_helpful", "Not Helpful"),
    ("create_ticket", "Create Ticket"),
    ("new_chat", "Start New Chat"),
    ("end_chat", "End Chat"),
    ("clear_chat", "Clear Chat"),
    ("thank_you", "Thank you for using our IT Support! 😊"),
    ("new_session", "Starting a new chat session for you..."),
    (
        "ticket_question",
        "Would you like to create a ticket for a human to assist you?",
    ),
    ("no_thanks", "No, thanks"),
    ("start_new_chat", "Start New Chat"),
    (
        "login_required",
        "You must be logged in to use the chat assistant.",
    ),
    (
        "basic_mode",
        "⚡ **Basic Mode**: AI service unavailable, using rule-based responses. Check your API configuration.",
    ),
    ("enter_message", "Please enter a message before sending."),
    ("starting_new_chat", "Starting a new chat session for you..."),
    ("language_select", "Select Language:"),
    ("password_reset", "Password Reset"),
    ("vpn_issues", "VPN Issues"),
    ("email_problems", "Email Problems"),
    ("printer_setup", "Printer Setup"),
    ("network_issues", "Network Issues"),
    ("software_help", "Software Help"),
];

static ES: &[(&str, &str)] = &[
    (
        "welcome",
        "¡Hola! Soy tu asistente de mesa de ayuda IT con IA. ¿Cómo puedo ayudarte hoy?",
    ),
    ("ask_question", "Haz tu pregunta de IT:"),
    ("send", "Enviar"),
    ("helpful", "Útil"),
    ("not_helpful", "No Útil"),
    ("create_ticket", "Crear Ticket"),
    ("new_chat", "Nuevo Chat"),
    ("end_chat", "Terminar Chat"),
    ("clear_chat", "Limpiar Chat"),
    ("thank_you", "¡Gracias por usar nuestro soporte IT! 😊"),
    ("new_session", "Iniciando una nueva sesión de chat para ti..."),
    (
        "ticket_question",
        "¿Te gustaría crear un ticket para que un humano te asista?",
    ),
    ("no_thanks", "No, gracias"),
    ("start_new_chat", "Iniciar Nuevo Chat"),
    (
        "login_required",
        "Debes iniciar sesión para usar el asistente de chat.",
    ),
    (
        "basic_mode",
        "⚡ **Modo Básico**: Servicio de IA no disponible, usando respuestas basadas en reglas. Verifica tu configuración de API.",
    ),
    ("enter_message", "Por favor ingresa un mensaje antes de enviar."),
    ("starting_new_chat", "Iniciando una nueva sesión de chat para ti..."),
    ("language_select", "Seleccionar Idioma:"),
    ("password_reset", "Restablecer Contraseña"),
    ("vpn_issues", "Problemas de VPN"),
    ("email_problems", "Problemas de Email"),
    ("printer_setup", "Configurar Impresora"),
    ("network_issues", "Problemas de Red"),
    ("software_help", "Ayuda de Software"),
];

static FR: &[(&str, &str)] = &[
    (
        "welcome",
        "Bonjour! Je suis votre assistant de support IT alimenté par IA. Comment puis-je vous aider aujourd'hui?",
    ),
    ("ask_question", "Posez votre question IT:"),
    ("send", "Envoyer"),
    ("helpful", "Utile"),
    ("not_helpful", "Pas Utile"),
    ("create_ticket", "Créer Ticket"),
    ("new_chat", "Nouveau Chat"),
    ("end_chat", "Terminer Chat"),
    ("clear_chat", "Effacer Chat"),
    ("thank_you", "Merci d'utiliser notre support IT! 😊"),
    ("new_session", "Démarrage d'une nouvelle session de chat pour vous..."),
    (
        "ticket_question",
        "Souhaitez-vous créer un ticket pour qu'un humain vous assiste?",
    ),
    ("no_thanks", "Non, merci"),
    ("start_new_chat", "Démarrer Nouveau Chat"),
    (
        "login_required",
        "Vous devez être connecté pour utiliser l'assistant de chat.",
    ),
    (
        "basic_mode",
        "⚡ **Mode Basique**: Service IA indisponible, utilisant des réponses basées sur des règles. Vérifiez votre configuration API.",
    ),
    ("enter_message", "Veuillez saisir un message avant d'envoyer."),
    (
        "starting_new_chat",
        "Démarrage d'une nouvelle session de chat pour vous...",
    ),
    ("language_select", "Sélectionner la Langue:"),
    ("password_reset", "Réinitialiser Mot de Passe"),
    ("vpn_issues", "Problèmes VPN"),
    ("email_problems", "Problèmes Email"),
    ("printer_setup", "Configuration Imprimante"),
    ("network_issues", "Problèmes Réseau"),
    ("software_help", "Aide Logiciel"),
];

static DE: &[(&str, &str)] = &[
    (
        "welcome",
        "Hallo! Ich bin Ihr KI-gestützter IT-Helpdesk-Assistent. Wie kann ich Ihnen heute helfen?",
    ),
    ("ask_question", "Stellen Sie Ihre IT-Frage:"),
    ("send", "Senden"),
    ("helpful", "Hilfreich"),
    ("not_helpful", "Nicht Hilfreich"),
    ("create_ticket", "Ticket Erstellen"),
    ("new_chat", "Neuer Chat"),
    ("end_chat", "Chat Beenden"),
    ("clear_chat", "Chat Löschen"),
    ("thank_you", "Vielen Dank für die Nutzung unseres IT-Supports!"),
    ("starting_new_chat", "Starte eine neue Chat-Sitzung für Sie..."),
    ("language_select", "Sprache Auswählen:"),
    ("password_reset", "Passwort Zurücksetzen"),
    ("vpn_issues", "VPN-Probleme"),
    ("email_problems", "E-Mail-Probleme"),
    ("printer_setup", "Drucker Einrichten"),
    ("network_issues", "Netzwerkprobleme"),
    ("software_help", "Software-Hilfe"),
];

static ZH: &[(&str, &str)] = &[
    (
        "welcome",
        "您好！我是您的AI驱动的IT帮助台助手。今天我可以为您做些什么？",
    ),
    ("ask_question", "请提出您的IT问题："),
    ("send", "发送"),
    ("helpful", "有帮助"),
    ("not_helpful", "没帮助"),
    ("create_ticket", "创建工单"),
    ("new_chat", "新对话"),
    ("end_chat", "结束对话"),
    ("clear_chat", "清除对话"),
    ("thank_you", "感谢您使用我们的IT支持！"),
    ("starting_new_chat", "正在为您开始新的聊天会话..."),
    ("language_select", "选择语言："),
    ("password_reset", "密码重置"),
    ("vpn_issues", "VPN问题"),
    ("email_problems", "邮箱问题"),
    ("printer_setup", "打印机设置"),
    ("network_issues", "网络问题"),
    ("software_help", "软件帮助"),
];

fn bundle(language: Language) -> Option<&'static [(&'static str, &'static str)]> {
    match language {
        Language::En => Some(EN),
        Language::Es => Some(ES),
        Language::Fr => Some(FR),
        Language::De => Some(DE),
        Language::Zh => Some(ZH),
        _ => None,
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, value)| *value)
}

/// Localized interface text with an English fallback chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Localizer;

impl Localizer {
    pub fn new() -> Self {
        Self
    }

    /// Look up interface text for `key` in `language`.
    ///
    /// Falls back to the English bundle when the language has no bundle
    /// or no entry for the key, and finally to the key itself.
    pub fn text<'a>(&self, key: &'a str, language: Language) -> &'a str {
        bundle(language)
            .and_then(|table| lookup(table, key))
            .or_else(|| lookup(EN, key))
            .unwrap_or(key)
    }

    /// Wrap a rendered response for display in the target language.
    ///
    /// Arabic gets a right-to-left container; CJK languages get wider
    /// line spacing. Everything else passes through untouched.
    pub fn format_for_display(&self, response: &str, language: Language) -> String {
        if language.is_rtl() {
            format!("<div dir=\"rtl\" style=\"text-align: right;\">{response}</div>")
        } else if language.is_cjk() {
            format!("<div style=\"line-height: 1.6;\">{response}</div>")
        } else {
            response.to_string()
        }
    }

    /// The language-enforcement directive prepended to the AI system prompt.
    pub fn language_prompt(&self, language: Language) -> &'static str {
        match language {
            Language::Es => {
                "IMPORTANTE: Responde SIEMPRE en español. Eres un asistente de soporte técnico IT. Traduce toda tu respuesta al español, incluyendo títulos, pasos y notas. Usa términos técnicos en español cuando sea posible."
            }
            Language::Fr => {
                "IMPORTANT: Répondez TOUJOURS en français. Vous êtes un assistant de support technique IT. Traduisez toute votre réponse en français."
            }
            Language::De => {
                "WICHTIG: Antworte IMMER auf Deutsch. Du bist ein IT-Support-Assistent. Übersetze deine gesamte Antwort ins Deutsche."
            }
            Language::Zh => "重要：始终用中文回答。你是一个IT技术支持助手。将你的整个回答翻译成中文。",
            Language::Ja => {
                "重要：必ず日本語で答えてください。あなたはITサポートアシスタントです。回答全体を日本語に翻訳してください。"
            }
            Language::Ar => {
                "مهم: أجب دائماً باللغة العربية. أنت مساعد دعم تقني IT. ترجم إجابتك كاملة إلى العربية."
            }
            Language::Ru => {
                "ВАЖНО: Всегда отвечай на русском языке. Ты помощник IT-поддержки. Переводи весь свой ответ на русский язык."
            }
            Language::Hi => {
                "महत्वपूर्ण: हमेशा हिंदी में जवाब दें। आप एक IT सपोर्ट असिस्टेंट हैं। अपना पूरा उत्तर हिंदी में अनुवाद करें।"
            }
            Language::Pt => {
                "IMPORTANTE: Responda SEMPRE em português. Você é um assistente de suporte técnico IT. Traduza toda sua resposta para o português."
            }
            Language::It => {
                "IMPORTANTE: Rispondi SEMPRE in italiano. Sei un assistente di supporto tecnico IT. Traduci tutta la tua risposta in italiano."
            }
            Language::Nl => {
                "BELANGRIJK: Antwoord ALTIJD in het Nederlands. Je bent een IT-ondersteuningsassistent. Vertaal je hele antwoord naar het Nederlands."
            }
            Language::Ko => {
                "중요: 항상 한국어로 답하세요. 당신은 IT 지원 도우미입니다. 전체 답변을 한국어로 번역하세요."
            }
            Language::En => "Respond in English. You are an IT support assistant.",
        }
    }

    /// Build the session welcome message for a logged-in user.
    ///
    /// The capability suffix depends on whether the AI gateway is live;
    /// suffixes exist for English, Spanish, and French, with the English
    /// suffix serving everyone else.
    pub fn welcome_message(&self, username: &str, ai_available: bool, language: Language) -> String {
        let base = self.text("welcome", language);

        let mut message = if language == Language::En {
            base.replace("Hello!", &format!("Hello {username}!"))
        } else {
            base.replace("Hello!", &format!("{username}!"))
        };

        let suffix = match (ai_available, language) {
            (true, Language::Es) => {
                " Puedo ayudarte con una amplia gama de problemas de IT. ¿En qué puedo ayudarte hoy?"
            }
            (true, Language::Fr) => {
                " Je peux vous aider avec une large gamme de problèmes IT. Comment puis-je vous aider aujourd'hui?"
            }
            (true, _) => {
                " I can help you with a wide range of IT issues. What can I help you with today?"
            }
            (false, Language::Es) => {
                " Estoy en modo básico pero aún puedo ayudar con problemas comunes. ¿Cómo puedo asistirte?"
            }
            (false, Language::Fr) => {
                " Je suis en mode de base mais je peux encore aider avec des problèmes courants. Comment puis-je vous aider?"
            }
            (false, _) => {
                " I'm in basic mode but can still help with common issues. How can I assist you?"
            }
        };
        message.push_str(suffix);
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_returns_localized_value() {
        let localizer = Localizer::new();
        assert_eq!(
            localizer.text("create_ticket", Language::Es),
            "Crear Ticket"
        );
        assert_eq!(localizer.text("create_ticket", Language::Zh), "创建工单");
    }

    #[test]
    fn missing_entry_falls_back_to_english() {
        let localizer = Localizer::new();
        // The German bundle has no basic_mode entry.
        let text = localizer.text("basic_mode", Language::De);
        assert!(text.contains("Basic Mode"));
    }

    #[test]
    fn unbundled_language_reads_english() {
        let localizer = Localizer::new();
        assert_eq!(localizer.text("send", Language::Ja), "Send");
    }

    #[test]
    fn unknown_key_returns_key_verbatim() {
        let localizer = Localizer::new();
        assert_eq!(localizer.text("no_such_key", Language::En), "no_such_key");
    }

    #[test]
    fn arabic_responses_are_wrapped_rtl() {
        let localizer = Localizer::new();
        let formatted = localizer.format_for_display("مرحبا", Language::Ar);
        assert!(formatted.starts_with("<div dir=\"rtl\""));
        assert!(formatted.contains("مرحبا"));
    }

    #[test]
    fn cjk_responses_get_line_height_wrapper() {
        let localizer = Localizer::new();
        let formatted = localizer.format_for_display("你好", Language::Zh);
        assert!(formatted.contains("line-height: 1.6"));
    }

    #[test]
    fn latin_responses_pass_through() {
        let localizer = Localizer::new();
        assert_eq!(
            localizer.format_for_display("Step 1: reboot", Language::En),
            "Step 1: reboot"
        );
    }

    #[test]
    fn language_prompt_enforces_target_language() {
        let localizer = Localizer::new();
        assert!(localizer.language_prompt(Language::Es).contains("español"));
        assert!(
            localizer
                .language_prompt(Language::En)
                .starts_with("Respond in English")
        );
    }

    #[test]
    fn english_welcome_greets_by_name() {
        let localizer = Localizer::new();
        let msg = localizer.welcome_message("maria", true, Language::En);
        assert!(msg.starts_with("Hello maria!"));
        assert!(msg.contains("wide range of IT issues"));
    }

    #[test]
    fn basic_mode_welcome_mentions_limited_capability() {
        let localizer = Localizer::new();
        let msg = localizer.welcome_message("maria", false, Language::Es);
        assert!(msg.contains("modo básico"));
    }
}

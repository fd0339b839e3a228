// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned troubleshooting templates per intent and language.
//!
//! Password reset and VPN carry Spanish, Italian, and French translations;
//! the other intents exist in English only. Any language without a
//! translation renders the English template. The rendered shape matches
//! what the AI gateway produces: greeting, bolded numbered steps, closing.

use deskmate_core::{Intent, Language};

struct Template {
    greeting: &'static str,
    step_label: &'static str,
    steps: &'static [&'static str],
    closing: &'static str,
}

static PASSWORD_EN: Template = Template {
    greeting: "Hi {name}! I can definitely help you reset your password. This is one of the most common issues we handle! 😊",
    step_label: "Step",
    steps: &[
        "Go to your company login portal at portal.company.com",
        "Click the 'Forgot Password' link below the login form",
        "Enter your registered email address or employee ID",
        "Check your email for the reset link (arrives in 2-3 minutes)",
        "Click the reset link and create a new secure password",
        "Log in with your new password and update saved passwords",
    ],
    closing: "That should get you back into your account! 🎉 If you don't receive the reset email within 5 minutes, check your spam folder first.",
};

static PASSWORD_ES: Template = Template {
    greeting: "¡Hola {name}! ¡Definitivamente puedo ayudarte a restablecer tu contraseña. ¡Este es uno de los problemas más comunes que manejamos! 😊",
    step_label: "Paso",
    steps: &[
        "Ve al portal de inicio de sesión de tu empresa en portal.company.com",
        "Haz clic en el enlace 'Olvidé mi contraseña' debajo del formulario de inicio de sesión",
        "Ingresa tu dirección de correo electrónico registrada o ID de empleado",
        "Revisa tu correo electrónico para el enlace de restablecimiento (llega en 2-3 minutos)",
        "Haz clic en el enlace de restablecimiento y crea una nueva contraseña segura",
        "Inicia sesión con tu nueva contraseña y actualiza las contraseñas guardadas",
    ],
    closing: "¡Eso debería devolverle el acceso a tu cuenta! 🎉 Si no recibes el correo de restablecimiento en 5 minutos, revisa tu carpeta de spam primero.",
};

static PASSWORD_IT: Template = Template {
    greeting: "Ciao {name}! Posso sicuramente aiutarti a reimpostare la tua password. Questo è uno dei problemi più comuni che gestiamo! 😊",
    step_label: "Passo",
    steps: &[
        "Vai al portale di accesso della tua azienda su portal.company.com",
        "Clicca sul link 'Password dimenticata' sotto il modulo di accesso",
        "Inserisci il tuo indirizzo email registrato o ID dipendente",
        "Controlla la tua email per il link di reimpostazione (arriva in 2-3 minuti)",
        "Clicca sul link di reimpostazione e crea una nuova password sicura",
        "Accedi con la tua nuova password e aggiorna le password salvate",
    ],
    closing: "Questo dovrebbe ripristinare l'accesso al tuo account! 🎉 Se non ricevi l'email di reimpostazione entro 5 minuti, controlla prima la cartella spam.",
};

static PASSWORD_FR: Template = Template {
    greeting: "Bonjour {name}! Je peux certainement vous aider à réinitialiser votre mot de passe. C'est l'un des problèmes les plus courants que nous traitons! 😊",
    step_label: "Étape",
    steps: &[
        "Allez au portail de connexion de votre entreprise sur portal.company.com",
        "Cliquez sur le lien 'Mot de passe oublié' sous le formulaire de connexion",
        "Entrez votre adresse email enregistrée ou ID employé",
        "Vérifiez votre email pour le lien de réinitialisation (arrive en 2-3 minutes)",
        "Cliquez sur le lien de réinitialisation et créez un nouveau mot de passe sécurisé",
        "Connectez-vous avec votre nouveau mot de passe et mettez à jour les mots de passe enregistrés",
    ],
    closing: "Cela devrait vous reconnecter à votre compte! 🎉 Si vous ne recevez pas l'email de réinitialisation dans les 5 minutes, vérifiez d'abord votre dossier spam.",
};

static VPN_EN: Template = Template {
    greeting: "Hello {name}! I'll help you get the VPN client working smoothly! 🔒",
    step_label: "Step",
    steps: &[
        "Open your company software center or download portal",
        "Search for 'Corporate VPN Client' or 'Cisco AnyConnect'",
        "Click 'Install' and wait for download completion",
        "Run installer with administrator privileges (right-click > 'Run as administrator')",
        "Launch the VPN app from your desktop or start menu",
        "Enter server address: vpn.company.com",
        "Log in with your company credentials",
        "Click 'Connect' and check for green connection status",
    ],
    closing: "You should now be securely connected! 🌐 The connection icon will appear in your system tray.",
};

static VPN_ES: Template = Template {
    greeting: "¡Hola {name}! ¡Te ayudaré a hacer funcionar el cliente VPN sin problemas! 🔒",
    step_label: "Paso",
    steps: &[
        "Abre el centro de software de tu empresa o portal de descargas",
        "Busca 'Cliente VPN Corporativo' o 'Cisco AnyConnect'",
        "Haz clic en 'Instalar' y espera a que se complete la descarga",
        "Ejecuta el instalador con privilegios de administrador (clic derecho > 'Ejecutar como administrador')",
        "Inicia la aplicación VPN desde tu escritorio o menú de inicio",
        "Ingresa la dirección del servidor: vpn.company.com",
        "Inicia sesión con las credenciales de tu empresa",
        "Haz clic en 'Conectar' y verifica el estado de conexión verde",
    ],
    closing: "¡Ahora deberías estar conectado de forma segura! 🌐 El icono de conexión aparecerá en tu bandeja del sistema.",
};

static VPN_IT: Template = Template {
    greeting: "Ciao {name}! Ti aiuterò a far funzionare il client VPN senza problemi! 🔒",
    step_label: "Passo",
    steps: &[
        "Apri il centro software della tua azienda o portale download",
        "Cerca 'Client VPN Aziendale' o 'Cisco AnyConnect'",
        "Clicca su 'Installa' e aspetta il completamento del download",
        "Esegui l'installer con privilegi di amministratore (tasto destro > 'Esegui come amministratore')",
        "Avvia l'app VPN dal desktop o dal menu start",
        "Inserisci l'indirizzo del server: vpn.company.com",
        "Accedi con le credenziali della tua azienda",
        "Clicca su 'Connetti' e verifica lo stato di connessione verde",
    ],
    closing: "Ora dovresti essere connesso in modo sicuro! 🌐 L'icona di connessione apparirà nella barra delle applicazioni.",
};

static VPN_FR: Template = Template {
    greeting: "Bonjour {name}! Je vais vous aider à faire fonctionner le client VPN en douceur! 🔒",
    step_label: "Étape",
    steps: &[
        "Ouvrez le centre logiciel de votre entreprise ou le portail de téléchargement",
        "Recherchez 'Client VPN d'entreprise' ou 'Cisco AnyConnect'",
        "Cliquez sur 'Installer' et attendez la fin du téléchargement",
        "Exécutez l'installateur avec des privilèges d'administrateur (clic droit > 'Exécuter en tant qu'administrateur')",
        "Lancez l'application VPN depuis votre bureau ou menu démarrer",
        "Entrez l'adresse du serveur: vpn.company.com",
        "Connectez-vous avec vos identifiants d'entreprise",
        "Cliquez sur 'Connecter' et vérifiez l'état de connexion vert",
    ],
    closing: "Vous devriez maintenant être connecté en toute sécurité! 🌐 L'icône de connexion apparaîtra dans votre barre système.",
};

static EMAIL_EN: Template = Template {
    greeting: "Hi {name}! Email problems can be frustrating. Let's get this fixed! 📧",
    step_label: "Step",
    steps: &[
        "Check internet connection (try opening a website)",
        "Restart your email client completely (Outlook, etc.)",
        "Verify email settings (incoming/outgoing servers, ports)",
        "Check if mailbox is full - delete old emails if needed",
        "Temporarily disable antivirus email scanning",
        "Try webmail at webmail.company.com as a test",
        "Note any error messages for further troubleshooting",
    ],
    closing: "Email issues are often simple connectivity problems! 📬",
};

static PRINTER_EN: Template = Template {
    greeting: "Hey {name}! Printer troubles are classic IT challenges, but we can fix this! 🖨️",
    step_label: "Step",
    steps: &[
        "Check printer is powered on and shows 'Ready' status",
        "Verify connection (ethernet cable or WiFi)",
        "Ensure computer and printer are on same network",
        "Update/reinstall printer drivers from manufacturer website",
        "Clear print queue: Control Panel > Devices > right-click printer > clear documents",
        "Run Windows printer troubleshooter",
        "Print test page from printer properties",
    ],
    closing: "Most printer issues are network or driver related! 🎯 These steps resolve the majority of problems.",
};

static PERFORMANCE_EN: Template = Template {
    greeting: "Hi {name}! Let's speed up your computer and get it running smoothly! ⚡",
    step_label: "Step",
    steps: &[
        "Restart your computer (clears memory and processes)",
        "Check storage space (need at least 15% free)",
        "Run disk cleanup (type 'disk cleanup' in start menu)",
        "Install Windows updates (Settings > Update & Security)",
        "Run malware scan with Windows Defender",
        "Disable unnecessary startup programs (Task Manager > Startup)",
        "Consider RAM upgrade if computer is 4+ years old",
    ],
    closing: "These steps should give your computer a nice performance boost! 🚀",
};

static NETWORK_EN: Template = Template {
    greeting: "Hello {name}! WiFi problems can be really frustrating. Let's fix your connection! 📶",
    step_label: "Step",
    steps: &[
        "Restart WiFi adapter (Network settings > disable/enable WiFi)",
        "Forget and reconnect to network (WiFi settings > manage networks)",
        "Test if other devices connect to same WiFi",
        "Restart router (unplug 30 seconds, plug back in)",
        "Update WiFi drivers (Device Manager > Network adapters)",
        "Reset network settings if needed (Settings > Network > Network reset)",
        "Contact network admin for corporate WiFi issues",
    ],
    closing: "WiFi problems usually respond well to these steps! 📡",
};

static CLARIFICATION_EN: &str = "Hi {name}! I'm here to help with your IT issue! 🤔\n\nI'd love to learn more about what's happening so I can assist you better:\n\n• What were you trying to do when the problem started?\n• Are you seeing any specific error messages?\n• When did you first notice this issue?\n• Has anything changed recently on your computer?\n\n**Quick universal fixes that often work:**\n• Restart your device\n• Check all cable connections\n• Update your software/drivers\n• Clear browser cache (for web issues)\n\nDon't worry - we'll figure this out together! If you need immediate help, I can also help you create a support ticket for our technical team. 🎫";

static CLARIFICATION_ES: &str = "¡Hola {name}! ¡Estoy aquí para ayudarte con tu problema de TI! 🤔\n\nMe gustaría saber más sobre lo que está pasando para poder ayudarte mejor:\n\n• ¿Qué estabas tratando de hacer cuando comenzó el problema?\n• ¿Estás viendo algún mensaje de error específico?\n• ¿Cuándo notaste este problema por primera vez?\n• ¿Ha cambiado algo recientemente en tu computadora?\n\n**Soluciones universales rápidas que a menudo funcionan:**\n• Reiniciar tu dispositivo\n• Verificar todas las conexiones de cables\n• Actualizar tu software/controladores\n• Limpiar caché del navegador (para problemas web)\n\n¡No te preocupes - resolveremos esto juntos! Si necesitas ayuda inmediata, también puedo ayudarte a crear un ticket de soporte para nuestro equipo técnico. 🎫";

static CLARIFICATION_IT: &str = "Ciao {name}! Sono qui per aiutarti con il tuo problema IT! 🤔\n\nMi piacerebbe saperne di più su quello che sta succedendo per poterti aiutare meglio:\n\n• Cosa stavi cercando di fare quando è iniziato il problema?\n• Stai vedendo messaggi di errore specifici?\n• Quando hai notato questo problema per la prima volta?\n• È cambiato qualcosa di recente sul tuo computer?\n\n**Soluzioni universali rapide che spesso funzionano:**\n• Riavviare il dispositivo\n• Controllare tutte le connessioni dei cavi\n• Aggiornare software/driver\n• Pulire cache del browser (per problemi web)\n\nNon preoccuparti - risolveremo questo insieme! Se hai bisogno di aiuto immediato, posso anche aiutarti a creare un ticket di supporto per il nostro team tecnico. 🎫";

static CLARIFICATION_FR: &str = "Bonjour {name}! Je suis là pour vous aider avec votre problème informatique! 🤔\n\nJ'aimerais en savoir plus sur ce qui se passe pour mieux vous aider:\n\n• Que faisiez-vous quand le problème a commencé?\n• Voyez-vous des messages d'erreur spécifiques?\n• Quand avez-vous remarqué ce problème pour la première fois?\n• Quelque chose a-t-il changé récemment sur votre ordinateur?\n\n**Solutions universelles rapides qui fonctionnent souvent:**\n• Redémarrer votre appareil\n• Vérifier toutes les connexions de câbles\n• Mettre à jour logiciels/pilotes\n• Vider le cache du navigateur (pour problèmes web)\n\nNe vous inquiétez pas - nous allons résoudre cela ensemble! Si vous avez besoin d'aide immédiate, je peux aussi vous aider à créer un ticket de support pour notre équipe technique. 🎫";

fn template(intent: Intent, language: Language) -> Option<&'static Template> {
    match (intent, language) {
        (Intent::PasswordReset, Language::Es) => Some(&PASSWORD_ES),
        (Intent::PasswordReset, Language::It) => Some(&PASSWORD_IT),
        (Intent::PasswordReset, Language::Fr) => Some(&PASSWORD_FR),
        (Intent::PasswordReset, _) => Some(&PASSWORD_EN),
        (Intent::Vpn, Language::Es) => Some(&VPN_ES),
        (Intent::Vpn, Language::It) => Some(&VPN_IT),
        (Intent::Vpn, Language::Fr) => Some(&VPN_FR),
        (Intent::Vpn, _) => Some(&VPN_EN),
        (Intent::Email, _) => Some(&EMAIL_EN),
        (Intent::Printer, _) => Some(&PRINTER_EN),
        (Intent::Performance, _) => Some(&PERFORMANCE_EN),
        (Intent::Network, _) => Some(&NETWORK_EN),
        (Intent::Unclassified, _) => None,
    }
}

/// Render the troubleshooting template for a built-in intent.
///
/// `Unclassified` has no template; callers use [`clarification`] instead.
pub fn render_template(intent: Intent, language: Language, username: &str) -> Option<String> {
    let template = template(intent, language)?;

    let mut out = template.greeting.replace("{name}", username);
    out.push_str("\n\n");
    for (i, step) in template.steps.iter().enumerate() {
        out.push_str(&format!("**{} {}:** {}\n", template.step_label, i + 1, step));
    }
    out.push('\n');
    out.push_str(template.closing);
    Some(out)
}

/// Render the clarification response for queries nothing matched.
///
/// Asks four guiding questions and lists universal quick fixes. Translated
/// for Spanish, Italian, and French; English otherwise.
pub fn clarification(language: Language, username: &str) -> String {
    let text = match language {
        Language::Es => CLARIFICATION_ES,
        Language::It => CLARIFICATION_IT,
        Language::Fr => CLARIFICATION_FR,
        _ => CLARIFICATION_EN,
    };
    text.replace("{name}", username)
}

/// Render a response for a secondary keyword store hit. English only.
pub fn keyword_steps_response(username: &str, keyword: &str, steps: &[String]) -> String {
    let instructions = steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("**Step {}:** {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Hi {username}! I understand you're having trouble with '{keyword}'. Please follow these steps carefully:\n\n{instructions}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_template_spanish_has_six_pasos() {
        let rendered = render_template(Intent::PasswordReset, Language::Es, "maria")
            .expect("template exists");
        assert!(rendered.starts_with("¡Hola maria!"));
        assert_eq!(rendered.matches("**Paso").count(), 6);
        assert!(rendered.contains("**Paso 6:**"));
        assert!(rendered.contains("carpeta de spam"));
    }

    #[test]
    fn vpn_template_english_has_eight_steps() {
        let rendered =
            render_template(Intent::Vpn, Language::En, "alex").expect("template exists");
        assert!(rendered.starts_with("Hello alex!"));
        assert_eq!(rendered.matches("**Step").count(), 8);
        assert!(rendered.contains("vpn.company.com"));
    }

    #[test]
    fn vpn_template_french_uses_etape_label() {
        let rendered =
            render_template(Intent::Vpn, Language::Fr, "alex").expect("template exists");
        assert_eq!(rendered.matches("**Étape").count(), 8);
    }

    #[test]
    fn untranslated_language_falls_back_to_english() {
        let rendered =
            render_template(Intent::PasswordReset, Language::De, "jan").expect("template exists");
        assert!(rendered.starts_with("Hi jan!"));
        assert_eq!(rendered.matches("**Step").count(), 6);
    }

    #[test]
    fn english_only_intents_render_in_english_everywhere() {
        for lang in [Language::Es, Language::Zh, Language::Ar] {
            let rendered =
                render_template(Intent::Printer, lang, "sam").expect("template exists");
            assert!(rendered.starts_with("Hey sam!"));
            assert_eq!(rendered.matches("**Step").count(), 7);
        }
    }

    #[test]
    fn step_counts_match_per_intent() {
        let expectations = [
            (Intent::PasswordReset, 6),
            (Intent::Vpn, 8),
            (Intent::Email, 7),
            (Intent::Printer, 7),
            (Intent::Performance, 7),
            (Intent::Network, 7),
        ];
        for (intent, count) in expectations {
            let rendered =
                render_template(intent, Language::En, "sam").expect("template exists");
            assert_eq!(rendered.matches("**Step").count(), count, "{intent}");
        }
    }

    #[test]
    fn unclassified_has_no_template() {
        assert!(render_template(Intent::Unclassified, Language::En, "sam").is_none());
    }

    #[test]
    fn clarification_asks_four_questions() {
        let text = clarification(Language::En, "sam");
        assert!(text.starts_with("Hi sam!"));
        // Four guiding bullets each end with a question mark.
        assert_eq!(text.matches('?').count(), 4);
        assert!(text.contains("support ticket"));
    }

    #[test]
    fn clarification_translated_for_italian() {
        let text = clarification(Language::It, "luca");
        assert!(text.starts_with("Ciao luca!"));
        assert!(text.contains("Soluzioni universali"));
    }

    #[test]
    fn keyword_steps_render_numbered() {
        let steps = vec!["Do the thing".to_string(), "Do the other thing".to_string()];
        let text = keyword_steps_response("sam", "monitor", &steps);
        assert!(text.contains("'monitor'"));
        assert!(text.contains("**Step 1:** Do the thing"));
        assert!(text.contains("**Step 2:** Do the other thing"));
    }
}

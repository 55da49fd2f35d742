/// All localized interface labels for a locale
///
/// The HR authoring panel always uses the English table; the employee preview
/// uses the table of the selected locale.
#[derive(Debug, Clone)]
pub struct UiStrings {
    // ==================== Headers ====================
    /// Product name shown above both panels
    pub app_title: &'static str,

    /// Tagline under the product name
    pub app_subtitle: &'static str,

    /// Title of the HR authoring panel
    pub hr_panel_title: &'static str,

    /// Title of the employee preview panel
    pub employee_panel_title: &'static str,

    // ==================== Form Fields ====================
    pub field_company_name: &'static str,
    pub field_role: &'static str,
    pub field_language: &'static str,
    pub field_base_language: &'static str,
    pub field_base_language_value: &'static str,

    // ==================== Sections ====================
    pub section_checklist: &'static str,

    /// Hint shown next to the checklist heading
    pub section_template: &'static str,

    pub section_welcome_note: &'static str,

    /// Placeholder for an empty welcome note
    pub welcome_placeholder: &'static str,

    // ==================== Status ====================
    /// Shown while a welcome note translation is in flight
    pub status_translating: &'static str,

    /// Shown when the welcome note could not be translated and the English
    /// text is displayed instead
    pub status_translation_error: &'static str,
}

// ==================== English Strings ====================

/// English interface strings (canonical)
pub const ENGLISH_STRINGS: UiStrings = UiStrings {
    app_title: "GlobalOnboard",
    app_subtitle: "Write onboarding once, welcome everyone in their language",
    hr_panel_title: "HR workspace",
    employee_panel_title: "Employee preview",

    field_company_name: "Company name",
    field_role: "Role",
    field_language: "Preview language",
    field_base_language: "Base language",
    field_base_language_value: "English",

    section_checklist: "Onboarding checklist",
    section_template: "Edits apply to the English source",
    section_welcome_note: "Welcome note",
    welcome_placeholder: "Write a short message for your new hire...",

    status_translating: "Translating welcome note...",
    status_translation_error: "Translation unavailable. Showing the English note.",
};

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: UiStrings = UiStrings {
    app_title: "GlobalOnboard",
    app_subtitle: "Escribe la incorporación una vez y da la bienvenida a todos en su idioma",
    hr_panel_title: "Espacio de RR. HH.",
    employee_panel_title: "Vista del empleado",

    field_company_name: "Nombre de la empresa",
    field_role: "Puesto",
    field_language: "Idioma de vista previa",
    field_base_language: "Idioma base",
    field_base_language_value: "Inglés",

    section_checklist: "Lista de incorporación",
    section_template: "Los cambios se aplican al texto en inglés",
    section_welcome_note: "Mensaje de bienvenida",
    welcome_placeholder: "Escribe un mensaje breve para tu nueva incorporación...",

    status_translating: "Traduciendo el mensaje de bienvenida...",
    status_translation_error: "Traducción no disponible. Se muestra el mensaje en inglés.",
};

// ==================== French Strings ====================

pub const FRENCH_STRINGS: UiStrings = UiStrings {
    app_title: "GlobalOnboard",
    app_subtitle: "Rédigez l'intégration une fois, accueillez chacun dans sa langue",
    hr_panel_title: "Espace RH",
    employee_panel_title: "Aperçu employé",

    field_company_name: "Nom de l'entreprise",
    field_role: "Poste",
    field_language: "Langue de l'aperçu",
    field_base_language: "Langue de base",
    field_base_language_value: "Anglais",

    section_checklist: "Liste d'intégration",
    section_template: "Les modifications s'appliquent au texte anglais",
    section_welcome_note: "Mot de bienvenue",
    welcome_placeholder: "Écrivez un court message pour votre nouvelle recrue...",

    status_translating: "Traduction du mot de bienvenue...",
    status_translation_error: "Traduction indisponible. Le message anglais est affiché.",
};

// ==================== German Strings ====================

pub const GERMAN_STRINGS: UiStrings = UiStrings {
    app_title: "GlobalOnboard",
    app_subtitle: "Onboarding einmal schreiben, alle in ihrer Sprache begrüßen",
    hr_panel_title: "HR-Arbeitsbereich",
    employee_panel_title: "Mitarbeitervorschau",

    field_company_name: "Firmenname",
    field_role: "Position",
    field_language: "Vorschausprache",
    field_base_language: "Basissprache",
    field_base_language_value: "Englisch",

    section_checklist: "Onboarding-Checkliste",
    section_template: "Änderungen gelten für den englischen Text",
    section_welcome_note: "Willkommensnachricht",
    welcome_placeholder: "Schreiben Sie eine kurze Nachricht an Ihre neue Kollegin oder Ihren neuen Kollegen...",

    status_translating: "Willkommensnachricht wird übersetzt...",
    status_translation_error: "Übersetzung nicht verfügbar. Die englische Nachricht wird angezeigt.",
};

// ==================== Japanese Strings ====================

pub const JAPANESE_STRINGS: UiStrings = UiStrings {
    app_title: "GlobalOnboard",
    app_subtitle: "オンボーディングを一度書けば、誰にでも母語で歓迎を",
    hr_panel_title: "人事ワークスペース",
    employee_panel_title: "従業員プレビュー",

    field_company_name: "会社名",
    field_role: "職種",
    field_language: "プレビュー言語",
    field_base_language: "基本言語",
    field_base_language_value: "英語",

    section_checklist: "オンボーディングチェックリスト",
    section_template: "編集内容は英語の原文に適用されます",
    section_welcome_note: "ウェルカムメッセージ",
    welcome_placeholder: "新しいメンバーへの短いメッセージを書いてください...",

    status_translating: "ウェルカムメッセージを翻訳しています...",
    status_translation_error: "翻訳を利用できません。英語のメッセージを表示しています。",
};

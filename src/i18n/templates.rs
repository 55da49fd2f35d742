//! Pre-translated onboarding templates.
//!
//! Every locale ships the same checklist under the same task ids, in the same
//! order, so English and localized tasks can be paired by id.

use serde::{Deserialize, Serialize};

/// One checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable identifier shared by every translation of this task
    pub id: String,
    pub title: String,
    pub description: String,
}

impl Task {
    pub fn new(id: &str, title: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Onboarding content for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub company_name: String,
    pub role: String,
    pub tasks: Vec<Task>,
}

/// Compile-time seed for a template; turned into an owned `Template` when the
/// registry is built.
pub(crate) struct TemplateSeed {
    pub company_name: &'static str,
    pub role: &'static str,
    /// `(id, title, description)`
    pub tasks: &'static [(&'static str, &'static str, &'static str)],
}

impl TemplateSeed {
    pub(crate) fn build(&self) -> Template {
        Template {
            company_name: self.company_name.to_string(),
            role: self.role.to_string(),
            tasks: self
                .tasks
                .iter()
                .map(|(id, title, description)| Task::new(id, title, description))
                .collect(),
        }
    }
}

pub(crate) const ENGLISH_TEMPLATE: TemplateSeed = TemplateSeed {
    company_name: "Northwind Labs",
    role: "Product Designer",
    tasks: &[
        (
            "welcome-call",
            "Join the welcome call",
            "Meet your manager and onboarding buddy to walk through the first-week plan.",
        ),
        (
            "accounts",
            "Set up your accounts",
            "Activate email, chat and the HR portal using the invites in your inbox.",
        ),
        (
            "policies",
            "Review company policies",
            "Read the code of conduct and the security guidelines before Friday.",
        ),
        (
            "first-project",
            "Ship a starter task",
            "Pick a starter ticket with your buddy and demo it at the end of the week.",
        ),
    ],
};

pub(crate) const SPANISH_TEMPLATE: TemplateSeed = TemplateSeed {
    company_name: "Northwind Labs",
    role: "Diseñador/a de producto",
    tasks: &[
        (
            "welcome-call",
            "Únete a la llamada de bienvenida",
            "Conoce a tu responsable y a tu compañero de acogida para repasar el plan de la primera semana.",
        ),
        (
            "accounts",
            "Configura tus cuentas",
            "Activa el correo, el chat y el portal de RR. HH. con las invitaciones de tu bandeja de entrada.",
        ),
        (
            "policies",
            "Revisa las políticas de la empresa",
            "Lee el código de conducta y las pautas de seguridad antes del viernes.",
        ),
        (
            "first-project",
            "Completa una primera tarea",
            "Elige una tarea inicial con tu compañero y preséntala al final de la semana.",
        ),
    ],
};

pub(crate) const FRENCH_TEMPLATE: TemplateSeed = TemplateSeed {
    company_name: "Northwind Labs",
    role: "Designer produit",
    tasks: &[
        (
            "welcome-call",
            "Participez à l'appel de bienvenue",
            "Rencontrez votre manager et votre parrain pour parcourir le programme de la première semaine.",
        ),
        (
            "accounts",
            "Configurez vos comptes",
            "Activez la messagerie, le chat et le portail RH grâce aux invitations reçues.",
        ),
        (
            "policies",
            "Consultez les règles de l'entreprise",
            "Lisez le code de conduite et les consignes de sécurité avant vendredi.",
        ),
        (
            "first-project",
            "Livrez une première tâche",
            "Choisissez un ticket de démarrage avec votre parrain et présentez-le en fin de semaine.",
        ),
    ],
};

pub(crate) const GERMAN_TEMPLATE: TemplateSeed = TemplateSeed {
    company_name: "Northwind Labs",
    role: "Produktdesigner:in",
    tasks: &[
        (
            "welcome-call",
            "Nehmen Sie am Begrüßungsgespräch teil",
            "Lernen Sie Ihre Führungskraft und Ihren Onboarding-Buddy kennen und gehen Sie gemeinsam den Plan für die erste Woche durch.",
        ),
        (
            "accounts",
            "Richten Sie Ihre Konten ein",
            "Aktivieren Sie E-Mail, Chat und das HR-Portal über die Einladungen in Ihrem Posteingang.",
        ),
        (
            "policies",
            "Lesen Sie die Unternehmensrichtlinien",
            "Lesen Sie den Verhaltenskodex und die Sicherheitsrichtlinien vor Freitag.",
        ),
        (
            "first-project",
            "Erledigen Sie eine erste Aufgabe",
            "Wählen Sie mit Ihrem Buddy ein Einstiegsticket aus und präsentieren Sie es am Ende der Woche.",
        ),
    ],
};

pub(crate) const JAPANESE_TEMPLATE: TemplateSeed = TemplateSeed {
    company_name: "Northwind Labs",
    role: "プロダクトデザイナー",
    tasks: &[
        (
            "welcome-call",
            "ウェルカムコールに参加する",
            "マネージャーとオンボーディングバディに会い、初週の計画を確認します。",
        ),
        (
            "accounts",
            "アカウントを設定する",
            "受信トレイの招待からメール、チャット、人事ポータルを有効化します。",
        ),
        (
            "policies",
            "社内規定を確認する",
            "金曜日までに行動規範とセキュリティガイドラインを読みます。",
        ),
        (
            "first-project",
            "最初のタスクを完了する",
            "バディと一緒に入門チケットを選び、週末に成果を発表します。",
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn localized_seeds() -> [&'static TemplateSeed; 4] {
        [
            &SPANISH_TEMPLATE,
            &FRENCH_TEMPLATE,
            &GERMAN_TEMPLATE,
            &JAPANESE_TEMPLATE,
        ]
    }

    #[test]
    fn test_build_copies_seed() {
        let template = ENGLISH_TEMPLATE.build();
        assert_eq!(template.company_name, "Northwind Labs");
        assert_eq!(template.role, "Product Designer");
        assert_eq!(template.tasks.len(), 4);
        assert_eq!(template.tasks[0].id, "welcome-call");
        assert_eq!(template.tasks[0].title, "Join the welcome call");
    }

    #[test]
    fn test_task_ids_match_english_in_order() {
        let english: Vec<_> = ENGLISH_TEMPLATE.tasks.iter().map(|t| t.0).collect();
        for seed in localized_seeds() {
            let ids: Vec<_> = seed.tasks.iter().map(|t| t.0).collect();
            assert_eq!(ids, english);
        }
    }

    #[test]
    fn test_task_ids_unique() {
        let mut ids: Vec<_> = ENGLISH_TEMPLATE.tasks.iter().map(|t| t.0).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ENGLISH_TEMPLATE.tasks.len());
    }

    #[test]
    fn test_french_accounts_task() {
        let template = FRENCH_TEMPLATE.build();
        let task = template
            .tasks
            .iter()
            .find(|task| task.id == "accounts")
            .expect("task exists");
        assert_eq!(task.title, "Configurez vos comptes");
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let template = ENGLISH_TEMPLATE.build();
        let json = serde_json::to_value(&template).expect("Should serialize");
        assert_eq!(json["companyName"], "Northwind Labs");
        assert_eq!(json["tasks"][1]["id"], "accounts");
    }
}

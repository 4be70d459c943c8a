//! Lesson generation through a generative text service.
//!
//! The service itself is behind [`LessonGenerator`]; this module owns the
//! request side ([`GenerationParams`], [`build_prompt`]) and the response
//! side ([`parse_generated`]) of the exchange.

use std::{env, fmt};

use log::{debug, error};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use tactiboard_core::lesson::LessonPlan;

/// Environment variable holding the generation service credentials.
pub const API_KEY_VAR: &str = "API_KEY";

/// Failure of a lesson generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Clé API manquante. Veuillez vérifier la configuration.")]
    MissingApiKey,

    #[error("Réponse vide de l'IA")]
    EmptyResponse,

    #[error("Réponse de l'IA invalide: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Erreur du service de génération: {0}")]
    Service(String),
}

/// School level of the class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[default]
    #[serde(rename = "1 A.C (7ème)")]
    FirstYear,
    #[serde(rename = "2 A.C (8ème)")]
    SecondYear,
    #[serde(rename = "3 A.C (9ème)")]
    ThirdYear,
    #[serde(rename = "Lycée")]
    HighSchool,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstYear => "1 A.C (7ème)",
            Self::SecondYear => "2 A.C (8ème)",
            Self::ThirdYear => "3 A.C (9ème)",
            Self::HighSchool => "Lycée",
        }
    }
}

/// Sport taught in the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sport {
    #[default]
    Basketball,
    Handball,
    Football,
    Volleyball,
    Futsal,
    Rugby,
}

impl Sport {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basketball => "Basketball",
            Self::Handball => "Handball",
            Self::Football => "Football",
            Self::Volleyball => "Volleyball",
            Self::Futsal => "Futsal",
            Self::Rugby => "Rugby",
        }
    }
}

/// Attackers against defenders, such as 3 against 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericalSituation {
    #[default]
    #[serde(rename = "3c2")]
    ThreeVsTwo,
    #[serde(rename = "4c3")]
    FourVsThree,
    #[serde(rename = "5c4")]
    FiveVsFour,
    #[serde(rename = "5c5")]
    FiveVsFive,
}

impl NumericalSituation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ThreeVsTwo => "3c2",
            Self::FourVsThree => "4c3",
            Self::FiveVsFour => "5c4",
            Self::FiveVsFive => "5c5",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "Débutant")]
    Beginner,
    #[default]
    #[serde(rename = "Intermédiaire")]
    Intermediate,
    #[serde(rename = "Avancé")]
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Débutant",
            Self::Intermediate => "Intermédiaire",
            Self::Advanced => "Avancé",
        }
    }
}

/// Court drawing style requested from the service. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaStyle {
    #[default]
    Zones,
    Lanes,
    Full,
}

impl SchemaStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zones => "zones",
            Self::Lanes => "lanes",
            Self::Full => "full",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(Level, Sport, NumericalSituation, Difficulty, SchemaStyle);

/// Everything the teacher chooses before asking for a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationParams {
    pub level: Level,
    pub sport: Sport,
    pub situation: NumericalSituation,
    /// Empty asks the service to derive the objective from the situation.
    pub objective: String,
    /// Minutes.
    pub duration: u32,
    pub students: u32,
    pub material: String,
    pub difficulty: Difficulty,
    pub schema_style: SchemaStyle,
    pub custom_criteria: Vec<String>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            level: Level::default(),
            sport: Sport::default(),
            situation: NumericalSituation::default(),
            objective: String::new(),
            duration: 60,
            students: 24,
            material: "12 ballons, 20 plots, 6 chasubles".to_string(),
            difficulty: Difficulty::default(),
            schema_style: SchemaStyle::default(),
            custom_criteria: Vec::new(),
        }
    }
}

/// A generative service producing lesson plans.
pub trait LessonGenerator {
    fn generate(&self, params: &GenerationParams) -> Result<LessonPlan, GenerateError>;
}

impl<F> LessonGenerator for F
where
    F: Fn(&GenerationParams) -> Result<LessonPlan, GenerateError>,
{
    fn generate(&self, params: &GenerationParams) -> Result<LessonPlan, GenerateError> {
        self(params)
    }
}

const DIAGRAM_RULES: &str = "\
RÈGLES STRICTES POUR LES SCHÉMAS TACTIQUES (OBLIGATOIRE) :
1. JOUEURS :
   - Utilise des labels spécifiques au sport :
     * BASKETBALL : PG (Meneur), SG (Arrière), SF (Ailier), PF (Ailier fort), C (Pivot).
     * HANDBALL : AL (Ailier Gauche), AR (Ailier Droit), ARG (Arrière Gauche), ARD (Arrière Droit), DC (Demi-Centre), P (Pivot), GB (Gardien).
   - Équipes :
     * 'team1' (Blanc) = Attaquants principaux.
     * 'team2' (Orange) = Défenseurs ou opposants.
   - Orientation : Indique l'angle (0-360) où le joueur regarde.

2. FLÈCHES ET ACTIONS :
   - 'pass' : Ligne pleine (Passe).
   - 'movement' : Ligne pointillée (Déplacement sans ballon).
   - 'dribble' : Ligne zigzag ou courbe (Dribble).
   - 'rotation' : Double flèche ou courbe (Échange de poste).
   - 'action' : Flèche épaisse (Tir, action décisive).

3. TERRAIN :
   - Positionne les joueurs de manière réaliste (ex: Ailiers dans les coins, Pivot dans la raquette).
   - Le ballon doit être attribué à un joueur clé (DC ou PG).

Structure de la séance :
1. Échauffement.
2. Partie Fondamentale (2-3 situations progressives).
3. Bilan.
";

/// Builds the instruction text sent to the generative service.
///
/// ```
/// use tactiboard::generate::{GenerationParams, Sport, build_prompt};
///
/// let params = GenerationParams { sport: Sport::Handball, ..GenerationParams::default() };
/// assert!(build_prompt(&params).contains("pour : Handball."));
/// ```
pub fn build_prompt(params: &GenerationParams) -> String {
    let objective = if params.objective.trim().is_empty() {
        format!(
            "à déduire de la situation {} (Conserver ou Progresser)",
            params.situation
        )
    } else {
        params.objective.clone()
    };

    let criteria = if params.custom_criteria.is_empty() {
        "Génère des critères d'évaluation pertinents (Technique, Tactique, Moteur) adaptés à la situation."
            .to_string()
    } else {
        let imposed = serde_json::to_string(&params.custom_criteria).unwrap_or_default();
        format!(
            "IMPORTANT - CRITÈRES D'ÉVALUATION IMPOSÉS :\n\
             L'utilisateur a défini les critères d'évaluation suivants : {imposed}. \
             Tu DOIS utiliser ces critères pour construire les grilles d'évaluation de chaque situation \
             (warmup, fondamentale, final). Pour chaque critère imposé, définis les descriptions précises \
             pour 0 point, 1 point et 2 points en lien avec la situation."
        )
    };

    format!(
        "Tu es un Expert Générateur de Diagrammes Tactiques et Pédagogue EPS.\n\
         Génère une séance complète et des schémas tactiques de haute précision pour : {sport}.\n\
         \n\
         Contexte :\n\
         - Niveau : {level}\n\
         - Objectif : {objective}\n\
         - Situation : {situation}\n\
         - Difficulté : {difficulty}\n\
         - Durée : {duration} min\n\
         - Effectif : {students} élèves\n\
         - Matériel : {material}\n\
         \n\
         {DIAGRAM_RULES}\n\
         {criteria}\n",
        sport = params.sport,
        level = params.level,
        situation = params.situation,
        difficulty = params.difficulty,
        duration = params.duration,
        students = params.students,
        material = params.material,
    )
}

/// Parses the service response into a lesson plan.
pub fn parse_generated(text: &str) -> Result<LessonPlan, GenerateError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GenerateError::EmptyResponse);
    }
    let lesson: LessonPlan = serde_json::from_str(text).map_err(|err| {
        error!(err:err; "Generated lesson is not a valid document");
        GenerateError::Malformed(err)
    })?;
    debug!(
        title = lesson.title.as_str(),
        situations = lesson.fundamental.len();
        "Generated lesson parsed"
    );
    Ok(lesson)
}

/// Reads the service credentials from the environment.
pub fn api_key_from_env() -> Result<String, GenerateError> {
    match env::var(API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => {
            error!(var = API_KEY_VAR; "API key not found in environment variables");
            Err(GenerateError::MissingApiKey)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = GenerationParams::default();
        assert_eq!(params.level.to_string(), "1 A.C (7ème)");
        assert_eq!(params.sport, Sport::Basketball);
        assert_eq!(params.situation.to_string(), "3c2");
        assert_eq!(params.duration, 60);
        assert_eq!(params.students, 24);
        assert_eq!(params.difficulty, Difficulty::Intermediate);
        assert_eq!(params.schema_style, SchemaStyle::Zones);
        assert!(params.custom_criteria.is_empty());
    }

    #[test]
    fn test_params_wire_names() {
        let json = r#"{"level":"Lycée","sport":"Rugby","situation":"5c4","difficulty":"Avancé","schemaStyle":"full","customCriteria":["Passe"]}"#;
        let params: GenerationParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.level, Level::HighSchool);
        assert_eq!(params.sport, Sport::Rugby);
        assert_eq!(params.situation, NumericalSituation::FiveVsFour);
        assert_eq!(params.difficulty, Difficulty::Advanced);
        assert_eq!(params.schema_style, SchemaStyle::Full);
        assert_eq!(params.custom_criteria, vec!["Passe".to_string()]);
        assert_eq!(params.students, 24);
    }

    #[test]
    fn test_prompt_generated_criteria() {
        let prompt = build_prompt(&GenerationParams::default());
        assert!(prompt.starts_with("Tu es un Expert Générateur de Diagrammes Tactiques"));
        assert!(prompt.contains("PG (Meneur)"));
        assert!(prompt.contains("'dribble' : Ligne zigzag"));
        assert!(prompt.contains("Objectif : à déduire de la situation 3c2"));
        assert!(prompt.contains("Génère des critères d'évaluation pertinents"));
        assert!(!prompt.contains("IMPOSÉS"));
    }

    #[test]
    fn test_prompt_imposed_criteria() {
        let params = GenerationParams {
            objective: "Conserver le ballon".to_string(),
            custom_criteria: vec!["Qualité de passe".to_string(), "Démarquage".to_string()],
            ..GenerationParams::default()
        };
        let prompt = build_prompt(&params);
        assert!(prompt.contains("Objectif : Conserver le ballon"));
        assert!(prompt.contains(r#"["Qualité de passe","Démarquage"]"#));
        assert!(prompt.contains("0 point, 1 point et 2 points"));
    }

    #[test]
    fn test_parse_generated() {
        assert!(matches!(parse_generated("  \n"), Err(GenerateError::EmptyResponse)));
        assert!(matches!(parse_generated("{not json"), Err(GenerateError::Malformed(_))));
        assert!(matches!(
            parse_generated(r#"{"fundamental": 3}"#),
            Err(GenerateError::Malformed(_))
        ));

        let lesson = parse_generated(
            r#"{"title":"Jeu rapide","sport":"Handball","fundamental":[{"title":"Situation 1",
                "schema":{"players":[{"id":"p1","label":"DC","x":50,"y":60,"role":"attacker","team":"team1","hasBall":true}],
                "arrows":[{"fromX":50,"fromY":60,"toX":20,"toY":30,"type":"pass"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(lesson.title, "Jeu rapide");
        let schema = &lesson.fundamental[0].schema;
        assert_eq!(schema.players().len(), 1);
        assert!(schema.players()[0].has_ball());
        assert_eq!(schema.arrows().len(), 1);
    }

    #[test]
    fn test_closure_generator() {
        let generator = |params: &GenerationParams| -> Result<LessonPlan, GenerateError> {
            let mut lesson = LessonPlan::blank();
            lesson.sport = params.sport.to_string();
            Ok(lesson)
        };
        let params = GenerationParams {
            sport: Sport::Futsal,
            ..GenerationParams::default()
        };
        assert_eq!(generator.generate(&params).unwrap().sport, "Futsal");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GenerateError::MissingApiKey.to_string(),
            "Clé API manquante. Veuillez vérifier la configuration."
        );
        assert_eq!(GenerateError::EmptyResponse.to_string(), "Réponse vide de l'IA");
    }
}

//! Módulo de conjugación verbal para francés
//!
//! Genera la tabla de seis personas de un verbo a partir de su infinitivo
//! y un tiempo verbal, sin diccionario ni estado entre llamadas.

pub mod elision;
pub mod engine;
pub mod irregular;
pub mod regular;
pub mod stem_changing;

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConjugationError;

pub use elision::resolve_pronoun;
pub use engine::Conjugator;
pub use irregular::IrregularEntry;
pub use regular::{lookup_key, RuleSet, RuleTable};
pub use stem_changing::resolve_stem;

/// Tiempo verbal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Present,
    Imparfait,
    Futur,
    Conditionnel,
    Subjonctif,
    PasseCompose,
}

impl Tense {
    pub const ALL: [Tense; 6] = [
        Tense::Present,
        Tense::Imparfait,
        Tense::Futur,
        Tense::Conditionnel,
        Tense::Subjonctif,
        Tense::PasseCompose,
    ];

    /// Identificador estable usado por los clientes del motor
    pub fn id(&self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Imparfait => "imparfait",
            Tense::Futur => "futur",
            Tense::Conditionnel => "conditionnel",
            Tense::Subjonctif => "subjonctif",
            Tense::PasseCompose => "passe_compose",
        }
    }

    /// Nombre francés del tiempo, para mostrar
    pub fn label(&self) -> &'static str {
        match self {
            Tense::Present => "Présent",
            Tense::Imparfait => "Imparfait",
            Tense::Futur => "Futur simple",
            Tense::Conditionnel => "Conditionnel présent",
            Tense::Subjonctif => "Subjonctif présent",
            Tense::PasseCompose => "Passé composé",
        }
    }

    /// Descripción breve del uso del tiempo
    pub fn description(&self) -> &'static str {
        match self {
            Tense::Present => "Used for actions happening right now.",
            Tense::Imparfait => "Used for ongoing past actions or descriptions.",
            Tense::Futur => "Used for actions that will happen.",
            Tense::Conditionnel => "Used for 'would' situations.",
            Tense::Subjonctif => "Used after expressions of wish, doubt or necessity (que ...).",
            Tense::PasseCompose => "Used for completed past actions.",
        }
    }

    /// Tiempo compuesto (auxiliar + participio)
    pub fn is_compound(&self) -> bool {
        matches!(self, Tense::PasseCompose)
    }

    /// Futur y conditionnel se forman sobre una base con forma de infinitivo
    pub fn uses_future_stem(&self) -> bool {
        matches!(self, Tense::Futur | Tense::Conditionnel)
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tense {
    type Err = ConjugationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = lookup_key(s).replace(['-', ' '], "_");
        match normalized.as_str() {
            "present" => Ok(Tense::Present),
            "imparfait" => Ok(Tense::Imparfait),
            "futur" | "futur_simple" => Ok(Tense::Futur),
            "conditionnel" | "conditionnel_present" => Ok(Tense::Conditionnel),
            "subjonctif" | "subjonctif_present" => Ok(Tense::Subjonctif),
            "passe_compose" | "pc" => Ok(Tense::PasseCompose),
            _ => Err(ConjugationError::UnknownTense(s.trim().to_string())),
        }
    }
}

/// Persona gramatical, en el orden fijo de la tabla
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PersonSlot {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl PersonSlot {
    pub const ALL: [PersonSlot; 6] = [
        PersonSlot::FirstSingular,
        PersonSlot::SecondSingular,
        PersonSlot::ThirdSingular,
        PersonSlot::FirstPlural,
        PersonSlot::SecondPlural,
        PersonSlot::ThirdPlural,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Personas de la "bota": je, tu, il, ils
    pub fn is_boot(&self) -> bool {
        matches!(
            self,
            PersonSlot::FirstSingular
                | PersonSlot::SecondSingular
                | PersonSlot::ThirdSingular
                | PersonSlot::ThirdPlural
        )
    }

    pub fn is_singular(&self) -> bool {
        self.index() < 3
    }

    /// Pronombre sujeto sin elisión
    pub fn pronoun(&self) -> &'static str {
        match self {
            PersonSlot::FirstSingular => "Je",
            PersonSlot::SecondSingular => "Tu",
            PersonSlot::ThirdSingular => "Il / Elle / On",
            PersonSlot::FirstPlural => "Nous",
            PersonSlot::SecondPlural => "Vous",
            PersonSlot::ThirdPlural => "Ils / Elles",
        }
    }
}

/// Grupo de un verbo regular según su terminación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VerbGroup {
    /// -er (parler)
    First,
    /// -ir (finir)
    Second,
    /// -re (vendre)
    Third,
}

impl VerbGroup {
    pub const ALL: [VerbGroup; 3] = [VerbGroup::First, VerbGroup::Second, VerbGroup::Third];

    /// Determina el grupo a partir del infinitivo (ya normalizado)
    pub fn from_infinitive(infinitive: &str) -> Option<Self> {
        let group = if infinitive.ends_with("er") {
            VerbGroup::First
        } else if infinitive.ends_with("ir") {
            VerbGroup::Second
        } else if infinitive.ends_with("re") {
            VerbGroup::Third
        } else {
            return None;
        };

        // "er" a secas no tiene raíz
        if infinitive.len() > group.infinitive_ending().len() {
            Some(group)
        } else {
            None
        }
    }

    /// Obtiene la terminación del infinitivo
    pub fn infinitive_ending(&self) -> &'static str {
        match self {
            VerbGroup::First => "er",
            VerbGroup::Second => "ir",
            VerbGroup::Third => "re",
        }
    }

    /// Lo que se vuelve a añadir a la raíz para formar futur y conditionnel
    pub fn future_stem_suffix(&self) -> &'static str {
        match self {
            VerbGroup::First => "er",
            VerbGroup::Second => "ir",
            VerbGroup::Third => "r",
        }
    }
}

/// Clasificación de un verbo, calculada una sola vez por llamada
#[derive(Debug, Clone, Copy)]
pub enum VerbClass<'t> {
    Regular(VerbGroup),
    Irregular(&'t IrregularEntry),
}

impl<'t> VerbClass<'t> {
    /// Los irregulares tienen prioridad sobre la terminación
    pub fn classify(infinitive: &str, table: &'t RuleTable) -> Option<Self> {
        if let Some(entry) = table.irregular(infinitive) {
            return Some(VerbClass::Irregular(entry));
        }
        VerbGroup::from_infinitive(infinitive).map(VerbClass::Regular)
    }
}

/// Verbo auxiliar de los tiempos compuestos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Auxiliary {
    Avoir,
    Etre,
}

impl Auxiliary {
    pub fn infinitive(&self) -> &'static str {
        match self {
            Auxiliary::Avoir => "avoir",
            Auxiliary::Etre => "être",
        }
    }
}

/// Una forma conjugada.
///
/// `surface_form` es la forma autoritativa. La separación entre `stem` y
/// `ending` solo sirve para resaltar la terminación al mostrarla; en el
/// passé composé `stem` lleva el auxiliar con su espacio y `ending` el participio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugatedForm {
    pub pronoun: &'static str,
    pub stem: String,
    pub ending: String,
    pub surface_form: String,
}

impl ConjugatedForm {
    /// Pronombre + forma, tal como se lee ("J’aime", "Tu aimes")
    pub fn phrase(&self) -> String {
        if self.pronoun.ends_with(elision::ELIDED_FIRST_SINGULAR_MARK) {
            format!("{}{}", self.pronoun, self.surface_form)
        } else {
            format!("{} {}", self.pronoun, self.surface_form)
        }
    }
}

/// Las seis formas de un verbo en un tiempo, en orden de `PersonSlot`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Conjugation {
    forms: [ConjugatedForm; 6],
}

impl Conjugation {
    pub fn new(forms: [ConjugatedForm; 6]) -> Self {
        Self { forms }
    }

    pub fn get(&self, slot: PersonSlot) -> &ConjugatedForm {
        &self.forms[slot.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConjugatedForm> {
        self.forms.iter()
    }

    pub fn singular(&self) -> impl Iterator<Item = &ConjugatedForm> {
        self.by_number(true)
    }

    pub fn plural(&self) -> impl Iterator<Item = &ConjugatedForm> {
        self.by_number(false)
    }

    fn by_number(&self, singular: bool) -> impl Iterator<Item = &ConjugatedForm> {
        PersonSlot::ALL
            .into_iter()
            .zip(self.forms.iter())
            .filter(move |(slot, _)| slot.is_singular() == singular)
            .map(|(_, form)| form)
    }
}

impl Index<usize> for Conjugation {
    type Output = ConjugatedForm;

    fn index(&self, index: usize) -> &Self::Output {
        &self.forms[index]
    }
}

impl Index<PersonSlot> for Conjugation {
    type Output = ConjugatedForm;

    fn index(&self, slot: PersonSlot) -> &Self::Output {
        self.get(slot)
    }
}

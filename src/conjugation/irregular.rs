//! Paradigmas de verbos franceses irregulares
//!
//! Cada entrada guarda las seis formas de cada tiempo simple, el participio
//! pasado invariable y el auxiliar con el que forma el passé composé.

use std::collections::HashMap;

use super::regular::Endings;
use super::{Auxiliary, Tense};

/// Paradigma de un verbo irregular
#[derive(Debug, Clone)]
pub struct IrregularEntry {
    /// Infinitivo con sus tildes ("être")
    pub infinitive: &'static str,
    pub auxiliary: Auxiliary,
    past_participle: Option<&'static str>,
    forms: HashMap<Tense, Endings>,
}

impl IrregularEntry {
    pub fn new(infinitive: &'static str, auxiliary: Auxiliary) -> Self {
        Self {
            infinitive,
            auxiliary,
            past_participle: None,
            forms: HashMap::new(),
        }
    }

    /// Añade las seis formas de un tiempo simple
    pub fn with_forms(mut self, tense: Tense, forms: Endings) -> Self {
        self.forms.insert(tense, forms);
        self
    }

    pub fn with_past_participle(mut self, participle: &'static str) -> Self {
        self.past_participle = Some(participle);
        self
    }

    pub fn forms(&self, tense: Tense) -> Option<&Endings> {
        self.forms.get(&tense)
    }

    pub fn past_participle(&self) -> Option<&'static str> {
        self.past_participle
    }

    /// Indica si la entrada puede conjugarse en el tiempo dado
    pub fn supports(&self, tense: Tense) -> bool {
        if tense.is_compound() {
            self.past_participle.is_some()
        } else {
            self.forms.contains_key(&tense)
        }
    }
}

/// Irregulares incluidos en la tabla estándar
pub fn standard_irregulars() -> Vec<IrregularEntry> {
    vec![avoir(), etre(), aller(), faire()]
}

fn avoir() -> IrregularEntry {
    IrregularEntry::new("avoir", Auxiliary::Avoir)
        .with_forms(Tense::Present, ["ai", "as", "a", "avons", "avez", "ont"])
        .with_forms(
            Tense::Imparfait,
            ["avais", "avais", "avait", "avions", "aviez", "avaient"],
        )
        .with_forms(
            Tense::Futur,
            ["aurai", "auras", "aura", "aurons", "aurez", "auront"],
        )
        .with_forms(
            Tense::Conditionnel,
            ["aurais", "aurais", "aurait", "aurions", "auriez", "auraient"],
        )
        .with_forms(
            Tense::Subjonctif,
            ["aie", "aies", "ait", "ayons", "ayez", "aient"],
        )
        .with_past_participle("eu")
}

fn etre() -> IrregularEntry {
    // "j'ai été": être se conjuga con avoir
    IrregularEntry::new("être", Auxiliary::Avoir)
        .with_forms(
            Tense::Present,
            ["suis", "es", "est", "sommes", "êtes", "sont"],
        )
        .with_forms(
            Tense::Imparfait,
            ["étais", "étais", "était", "étions", "étiez", "étaient"],
        )
        .with_forms(
            Tense::Futur,
            ["serai", "seras", "sera", "serons", "serez", "seront"],
        )
        .with_forms(
            Tense::Conditionnel,
            ["serais", "serais", "serait", "serions", "seriez", "seraient"],
        )
        .with_forms(
            Tense::Subjonctif,
            ["sois", "sois", "soit", "soyons", "soyez", "soient"],
        )
        .with_past_participle("été")
}

fn aller() -> IrregularEntry {
    IrregularEntry::new("aller", Auxiliary::Etre)
        .with_forms(
            Tense::Present,
            ["vais", "vas", "va", "allons", "allez", "vont"],
        )
        .with_forms(
            Tense::Imparfait,
            ["allais", "allais", "allait", "allions", "alliez", "allaient"],
        )
        .with_forms(
            Tense::Futur,
            ["irai", "iras", "ira", "irons", "irez", "iront"],
        )
        .with_forms(
            Tense::Conditionnel,
            ["irais", "irais", "irait", "irions", "iriez", "iraient"],
        )
        .with_forms(
            Tense::Subjonctif,
            ["aille", "ailles", "aille", "allions", "alliez", "aillent"],
        )
        .with_past_participle("allé")
}

fn faire() -> IrregularEntry {
    IrregularEntry::new("faire", Auxiliary::Avoir)
        .with_forms(
            Tense::Present,
            ["fais", "fais", "fait", "faisons", "faites", "font"],
        )
        .with_forms(
            Tense::Imparfait,
            ["faisais", "faisais", "faisait", "faisions", "faisiez", "faisaient"],
        )
        .with_forms(
            Tense::Futur,
            ["ferai", "feras", "fera", "ferons", "ferez", "feront"],
        )
        .with_forms(
            Tense::Conditionnel,
            ["ferais", "ferais", "ferait", "ferions", "feriez", "feraient"],
        )
        .with_forms(
            Tense::Subjonctif,
            ["fasse", "fasses", "fasse", "fassions", "fassiez", "fassent"],
        )
        .with_past_participle("fait")
}

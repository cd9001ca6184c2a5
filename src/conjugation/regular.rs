//! Tablas de terminaciones para verbos regulares franceses
//!
//! Contiene las terminaciones por grupo y tiempo, el presente de los
//! auxiliares y el acceso a los irregulares. Solo datos, sin lógica de raíces.

use std::collections::HashMap;
use std::sync::OnceLock;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::irregular::{self, IrregularEntry};
use super::{Auxiliary, Tense, VerbGroup};

/// Seis terminaciones, una por persona
pub type Endings = [&'static str; 6];

/// Terminaciones del présent
pub const PRESENT_ER: Endings = ["e", "es", "e", "ons", "ez", "ent"];
pub const PRESENT_IR: Endings = ["is", "is", "it", "issons", "issez", "issent"];
pub const PRESENT_RE: Endings = ["s", "s", "", "ons", "ez", "ent"];

/// Terminaciones del imparfait
pub const IMPARFAIT_ER: Endings = ["ais", "ais", "ait", "ions", "iez", "aient"];
pub const IMPARFAIT_IR: Endings = ["issais", "issais", "issait", "issions", "issiez", "issaient"];
pub const IMPARFAIT_RE: Endings = ["ais", "ais", "ait", "ions", "iez", "aient"];

/// Terminaciones del futur (se añaden a la base de infinitivo)
pub const FUTUR: Endings = ["ai", "as", "a", "ons", "ez", "ont"];

/// Terminaciones del conditionnel (se añaden a la base de infinitivo)
pub const CONDITIONNEL: Endings = ["ais", "ais", "ait", "ions", "iez", "aient"];

/// Terminaciones del subjonctif présent
pub const SUBJONCTIF_ER: Endings = ["e", "es", "e", "ions", "iez", "ent"];
pub const SUBJONCTIF_IR: Endings = ["isse", "isses", "isse", "issions", "issiez", "issent"];
pub const SUBJONCTIF_RE: Endings = ["e", "es", "e", "ions", "iez", "ent"];

/// Terminación del participio pasado
pub const PARTICIPE_ER: &str = "é";
pub const PARTICIPE_IR: &str = "i";
pub const PARTICIPE_RE: &str = "u";

/// Presente de los auxiliares
pub const AVOIR_PRESENT: Endings = ["ai", "as", "a", "avons", "avez", "ont"];
pub const ETRE_PRESENT: Endings = ["suis", "es", "est", "sommes", "êtes", "sont"];

/// Terminaciones de un grupo: una tabla por tiempo simple y el sufijo del participio
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    endings: HashMap<Tense, Endings>,
    participle_suffix: Option<&'static str>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endings(mut self, tense: Tense, endings: Endings) -> Self {
        self.endings.insert(tense, endings);
        self
    }

    pub fn with_participle_suffix(mut self, suffix: &'static str) -> Self {
        self.participle_suffix = Some(suffix);
        self
    }
}

/// Tabla de reglas completa.
///
/// Inmutable una vez construida; para cambiarla se construye otra y se
/// sustituye entera.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    groups: HashMap<VerbGroup, RuleSet>,
    auxiliaries: HashMap<Auxiliary, Endings>,
    irregulars: HashMap<String, IrregularEntry>,
}

impl RuleTable {
    /// Tabla vacía, para construir tablas alternativas
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_rule_set(mut self, group: VerbGroup, rules: RuleSet) -> Self {
        self.groups.insert(group, rules);
        self
    }

    pub fn with_auxiliary(mut self, auxiliary: Auxiliary, present: Endings) -> Self {
        self.auxiliaries.insert(auxiliary, present);
        self
    }

    /// Registra un irregular bajo su clave sin diacríticos
    pub fn with_irregular(mut self, entry: IrregularEntry) -> Self {
        self.irregulars.insert(lookup_key(entry.infinitive), entry);
        self
    }

    /// Tabla estándar del conjugador.
    ///
    /// Se cachea en un `OnceLock`: se construye la primera vez y después
    /// solo se lee.
    pub fn standard() -> &'static RuleTable {
        static STANDARD: OnceLock<RuleTable> = OnceLock::new();
        STANDARD.get_or_init(build_standard_table)
    }

    /// Terminaciones de un tiempo simple para un grupo
    pub fn endings(&self, group: VerbGroup, tense: Tense) -> Option<&Endings> {
        self.groups.get(&group)?.endings.get(&tense)
    }

    pub fn past_participle_suffix(&self, group: VerbGroup) -> Option<&'static str> {
        self.groups.get(&group)?.participle_suffix
    }

    pub fn auxiliary_present(&self, auxiliary: Auxiliary) -> Option<&Endings> {
        self.auxiliaries.get(&auxiliary)
    }

    /// Busca un irregular; el verbo puede llevar o no sus tildes
    pub fn irregular(&self, verb: &str) -> Option<&IrregularEntry> {
        self.irregulars.get(&lookup_key(verb))
    }

    pub fn irregular_infinitives(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.irregulars.values().map(|entry| entry.infinitive)
    }
}

fn build_standard_table() -> RuleTable {
    let first = RuleSet::new()
        .with_endings(Tense::Present, PRESENT_ER)
        .with_endings(Tense::Imparfait, IMPARFAIT_ER)
        .with_endings(Tense::Futur, FUTUR)
        .with_endings(Tense::Conditionnel, CONDITIONNEL)
        .with_endings(Tense::Subjonctif, SUBJONCTIF_ER)
        .with_participle_suffix(PARTICIPE_ER);

    let second = RuleSet::new()
        .with_endings(Tense::Present, PRESENT_IR)
        .with_endings(Tense::Imparfait, IMPARFAIT_IR)
        .with_endings(Tense::Futur, FUTUR)
        .with_endings(Tense::Conditionnel, CONDITIONNEL)
        .with_endings(Tense::Subjonctif, SUBJONCTIF_IR)
        .with_participle_suffix(PARTICIPE_IR);

    let third = RuleSet::new()
        .with_endings(Tense::Present, PRESENT_RE)
        .with_endings(Tense::Imparfait, IMPARFAIT_RE)
        .with_endings(Tense::Futur, FUTUR)
        .with_endings(Tense::Conditionnel, CONDITIONNEL)
        .with_endings(Tense::Subjonctif, SUBJONCTIF_RE)
        .with_participle_suffix(PARTICIPE_RE);

    let mut table = RuleTable::empty()
        .with_rule_set(VerbGroup::First, first)
        .with_rule_set(VerbGroup::Second, second)
        .with_rule_set(VerbGroup::Third, third)
        .with_auxiliary(Auxiliary::Avoir, AVOIR_PRESENT)
        .with_auxiliary(Auxiliary::Etre, ETRE_PRESENT);

    for entry in irregular::standard_irregulars() {
        table = table.with_irregular(entry);
    }

    table
}

/// Clave de búsqueda: sin espacios alrededor, en minúsculas y sin diacríticos.
///
/// Se descompone en NFD y se descartan las marcas combinantes, así que da
/// igual si la tilde llega precompuesta ("ê") o como marca aparte ("e\u{302}").
pub fn lookup_key(verb: &str) -> String {
    verb.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Infinitivo normalizado para conjugar: sin espacios, en minúsculas y en NFC
pub fn normalize_infinitive(verb: &str) -> String {
    verb.trim().to_lowercase().nfc().collect()
}

/// Quita el diacrítico de una letra ("é" → "e", "ç" → "c")
pub fn fold_diacritic(c: char) -> char {
    c.nfd().next().unwrap_or(c)
}

//! Motor de conjugación: clasifica el verbo y construye las seis formas

use tracing::instrument;

use super::elision::resolve_pronoun;
use super::irregular::IrregularEntry;
use super::regular::{normalize_infinitive, RuleTable};
use super::stem_changing::{default_stem, resolve_stem};
use super::{Auxiliary, ConjugatedForm, Conjugation, PersonSlot, Tense, VerbClass, VerbGroup};
use crate::error::ConjugationError;

/// Conjugador sobre una tabla de reglas.
///
/// No guarda estado entre llamadas; puede compartirse entre hilos.
#[derive(Debug, Clone, Copy)]
pub struct Conjugator<'t> {
    table: &'t RuleTable,
}

impl Conjugator<'static> {
    /// Conjugador sobre la tabla estándar
    pub fn standard() -> Self {
        Self::new(RuleTable::standard())
    }
}

impl Default for Conjugator<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'t> Conjugator<'t> {
    pub fn new(table: &'t RuleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t RuleTable {
        self.table
    }

    /// Conjuga el verbo; cualquier error se registra y se devuelve `None`.
    ///
    /// Un hueco en la tabla de reglas es un error de datos: con
    /// `debug_assertions` provoca un pánico, en release se trata como un
    /// tiempo no soportado.
    pub fn conjugate(&self, verb: &str, tense: Tense) -> Option<Conjugation> {
        match self.try_conjugate(verb, tense) {
            Ok(conjugation) => Some(conjugation),
            Err(err) => {
                report(&err);
                None
            }
        }
    }

    /// Conjuga el verbo devolviendo el motivo exacto del fallo
    #[instrument(level = "debug", skip(self))]
    pub fn try_conjugate(
        &self,
        verb: &str,
        tense: Tense,
    ) -> Result<Conjugation, ConjugationError> {
        let infinitive = normalize_infinitive(verb);

        let class = VerbClass::classify(&infinitive, self.table)
            .ok_or_else(|| ConjugationError::UnrecognizedVerb(infinitive.clone()))?;

        match class {
            VerbClass::Irregular(entry) => {
                tracing::debug!(infinitive = entry.infinitive, "verbo irregular");
                self.conjugate_irregular(entry, tense)
            }
            VerbClass::Regular(group) => {
                tracing::debug!(?group, "verbo regular");
                self.conjugate_regular(&infinitive, group, tense)
            }
        }
    }

    fn conjugate_irregular(
        &self,
        entry: &IrregularEntry,
        tense: Tense,
    ) -> Result<Conjugation, ConjugationError> {
        let unsupported = || ConjugationError::UnsupportedTense {
            verb: entry.infinitive.to_string(),
            tense,
        };

        if tense.is_compound() {
            let participle = entry.past_participle().ok_or_else(unsupported)?;
            return self.compound(entry.infinitive, entry.auxiliary, participle, tense);
        }

        let forms = entry.forms(tense).ok_or_else(unsupported)?;
        Ok(Conjugation::new(PersonSlot::ALL.map(|slot| {
            let form = forms[slot.index()];
            ConjugatedForm {
                pronoun: resolve_pronoun(slot, form),
                stem: form.to_string(),
                ending: String::new(),
                surface_form: form.to_string(),
            }
        })))
    }

    fn conjugate_regular(
        &self,
        infinitive: &str,
        group: VerbGroup,
        tense: Tense,
    ) -> Result<Conjugation, ConjugationError> {
        if tense.is_compound() {
            let suffix = self.table.past_participle_suffix(group).ok_or_else(|| {
                ConjugationError::ConfigurationGap {
                    verb: infinitive.to_string(),
                    tense,
                    missing: format!("el sufijo del participio para {group:?}"),
                }
            })?;
            let participle = format!("{}{}", default_stem(infinitive, group), suffix);
            // Los regulares con être quedan fuera: siempre avoir
            return self.compound(infinitive, Auxiliary::Avoir, &participle, tense);
        }

        let endings = self.table.endings(group, tense).ok_or_else(|| {
            ConjugationError::ConfigurationGap {
                verb: infinitive.to_string(),
                tense,
                missing: format!("terminaciones para {group:?}"),
            }
        })?;

        Ok(Conjugation::new(PersonSlot::ALL.map(|slot| {
            let ending = endings[slot.index()];
            let stem = resolve_stem(infinitive, group, tense, slot, ending);
            let surface_form = format!("{stem}{ending}");
            ConjugatedForm {
                pronoun: resolve_pronoun(slot, &surface_form),
                stem,
                ending: ending.to_string(),
                surface_form,
            }
        })))
    }

    /// Auxiliar en presente + participio invariable
    fn compound(
        &self,
        verb: &str,
        auxiliary: Auxiliary,
        participle: &str,
        tense: Tense,
    ) -> Result<Conjugation, ConjugationError> {
        let auxiliary_forms = self.table.auxiliary_present(auxiliary).ok_or_else(|| {
            ConjugationError::ConfigurationGap {
                verb: verb.to_string(),
                tense,
                missing: format!("el presente de {}", auxiliary.infinitive()),
            }
        })?;

        Ok(Conjugation::new(PersonSlot::ALL.map(|slot| {
            let aux = auxiliary_forms[slot.index()];
            ConjugatedForm {
                // La elisión depende del auxiliar, no del participio
                pronoun: resolve_pronoun(slot, aux),
                stem: format!("{aux} "),
                ending: participle.to_string(),
                surface_form: format!("{aux} {participle}"),
            }
        })))
    }
}

fn report(err: &ConjugationError) {
    match err {
        ConjugationError::UnrecognizedVerb(verb) => {
            tracing::warn!(%verb, "verbo no reconocido");
        }
        ConjugationError::UnsupportedTense { verb, tense } => {
            tracing::warn!(%verb, %tense, "tiempo sin formas para este verbo");
        }
        ConjugationError::UnknownTense(tense) => {
            tracing::warn!(%tense, "tiempo verbal desconocido");
        }
        ConjugationError::ConfigurationGap { .. } => {
            tracing::error!("{err}");
            if cfg!(debug_assertions) {
                panic!("{err}");
            }
        }
    }
}

/// Conjuga con la tabla estándar a partir del identificador del tiempo
/// (`present`, `imparfait`, `futur`, `conditionnel`, `subjonctif`, `passe_compose`).
pub fn conjugate(verb: &str, tense_id: &str) -> Option<Conjugation> {
    match tense_id.parse::<Tense>() {
        Ok(tense) => Conjugator::standard().conjugate(verb, tense),
        Err(err) => {
            report(&err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conjugation::regular::{RuleSet, AVOIR_PRESENT, PRESENT_ER};

    fn surface(verb: &str, tense: Tense) -> Vec<String> {
        Conjugator::standard()
            .conjugate(verb, tense)
            .unwrap_or_else(|| panic!("{verb} debería conjugarse en {tense}"))
            .iter()
            .map(|f| f.surface_form.clone())
            .collect()
    }

    #[test]
    fn test_regular_present_by_group() {
        assert_eq!(
            surface("parler", Tense::Present),
            ["parle", "parles", "parle", "parlons", "parlez", "parlent"]
        );
        assert_eq!(
            surface("finir", Tense::Present),
            ["finis", "finis", "finit", "finissons", "finissez", "finissent"]
        );
        assert_eq!(
            surface("vendre", Tense::Present),
            ["vends", "vends", "vend", "vendons", "vendez", "vendent"]
        );
    }

    #[test]
    fn test_stem_and_ending_split() {
        let result = Conjugator::standard().conjugate("parler", Tense::Imparfait).unwrap();
        assert_eq!(result[3].stem, "parl");
        assert_eq!(result[3].ending, "ions");
        assert_eq!(result[3].surface_form, "parlions");
    }

    #[test]
    fn test_irregular_simple_has_empty_ending() {
        let result = Conjugator::standard().conjugate("faire", Tense::Present).unwrap();
        assert_eq!(result[4].surface_form, "faites");
        assert_eq!(result[4].stem, "faites");
        assert!(result[4].ending.is_empty());
    }

    #[test]
    fn test_compound_split() {
        let result = Conjugator::standard().conjugate("finir", Tense::PasseCompose).unwrap();
        assert_eq!(result[0].pronoun, "J\u{2019}");
        assert_eq!(result[0].stem, "ai ");
        assert_eq!(result[0].ending, "fini");
        assert_eq!(result[0].surface_form, "ai fini");
    }

    #[test]
    fn test_aller_uses_etre() {
        assert_eq!(
            surface("aller", Tense::PasseCompose),
            ["suis allé", "es allé", "est allé", "sommes allé", "êtes allé", "sont allé"]
        );
        let result = Conjugator::standard().conjugate("aller", Tense::PasseCompose).unwrap();
        assert_eq!(result[0].pronoun, "Je");
    }

    #[test]
    fn test_unrecognized_verb_error() {
        let err = Conjugator::standard()
            .try_conjugate("xyzzy", Tense::Present)
            .unwrap_err();
        assert_eq!(err, ConjugationError::UnrecognizedVerb("xyzzy".to_string()));
    }

    #[test]
    fn test_irregular_without_tense_is_unsupported() {
        let table = RuleTable::empty()
            .with_auxiliary(Auxiliary::Avoir, AVOIR_PRESENT)
            .with_irregular(
                IrregularEntry::new("dire", Auxiliary::Avoir)
                    .with_forms(Tense::Present, ["dis", "dis", "dit", "disons", "dites", "disent"]),
            );
        let conjugator = Conjugator::new(&table);

        assert!(conjugator.conjugate("dire", Tense::Present).is_some());
        assert_eq!(
            conjugator.try_conjugate("dire", Tense::Futur).unwrap_err(),
            ConjugationError::UnsupportedTense {
                verb: "dire".to_string(),
                tense: Tense::Futur,
            }
        );
        assert!(conjugator.conjugate("dire", Tense::PasseCompose).is_none());
    }

    #[test]
    fn test_missing_group_endings_is_configuration_gap() {
        let rules = RuleSet::new().with_endings(Tense::Present, PRESENT_ER);
        let table = RuleTable::empty().with_rule_set(VerbGroup::First, rules);
        let conjugator = Conjugator::new(&table);

        assert!(conjugator.try_conjugate("parler", Tense::Present).is_ok());
        let err = conjugator.try_conjugate("parler", Tense::Imparfait).unwrap_err();
        assert!(err.is_configuration_gap(), "{err}");
        let err = conjugator.try_conjugate("parler", Tense::PasseCompose).unwrap_err();
        assert!(err.is_configuration_gap(), "{err}");
    }

    #[test]
    fn test_missing_auxiliary_is_configuration_gap() {
        let table = RuleTable::empty()
            .with_rule_set(VerbGroup::First, RuleSet::new().with_participle_suffix("é"));
        let err = Conjugator::new(&table)
            .try_conjugate("parler", Tense::PasseCompose)
            .unwrap_err();
        assert!(err.is_configuration_gap(), "{err}");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "terminaciones")]
    fn test_configuration_gap_panics_in_debug() {
        let table = RuleTable::empty();
        let _ = Conjugator::new(&table).conjugate("parler", Tense::Present);
    }

    #[test]
    fn test_conjugate_by_tense_id() {
        assert_eq!(conjugate("aimer", "present").unwrap()[0].surface_form, "aime");
        assert!(conjugate("aimer", "aoriste").is_none());
    }
}

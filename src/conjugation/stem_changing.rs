//! Raíces con cambios ortográficos (verbos del primer grupo)
//!
//! Maneja los cambios que no dependen de una lista de irregulares:
//! - -ger / -cer: manger → mangeons, lancer → lançons
//! - -yer: payer → paie
//! - -eler / -eter con doble consonante: appeler → appelle, jeter → jette
//! - -eler / -eter con acento grave: acheter → achète
//! - -e_er: lever → lève
//! - -é_er: préférer → préfère (no en futur ni conditionnel)
//!
//! Futur y conditionnel reconstruyen después una base con forma de infinitivo
//! sobre la raíz ya modificada (achèter-, appeller-, vendr-).

use super::{PersonSlot, Tense, VerbGroup};

/// Verbos -eler / -eter que doblan la consonante en lugar de acentuar
pub const DOUBLING_VERBS: [&str; 7] = [
    "appeler",
    "rappeler",
    "jeter",
    "projeter",
    "rejeter",
    "épeler",
    "renouveler",
];

/// Calcula la raíz a la que se une `ending` para la persona y el tiempo dados.
///
/// Solo tiene sentido para verbos regulares; `infinitive` debe estar ya
/// normalizado y pertenecer a `group`.
pub fn resolve_stem(
    infinitive: &str,
    group: VerbGroup,
    tense: Tense,
    slot: PersonSlot,
    ending: &str,
) -> String {
    let mut stem = default_stem(infinitive, group).to_string();

    if group == VerbGroup::First {
        // En futur/conditionnel la terminación no se une a la raíz desnuda:
        // mangerai, no mangeerai
        if !tense.uses_future_stem() {
            soften_before_hard_vowel(&mut stem, infinitive, ending);
        }
        apply_boot_change(&mut stem, infinitive, tense, slot);
    }

    if tense.uses_future_stem() {
        stem.push_str(group.future_stem_suffix());
    }

    stem
}

/// Infinitivo sin la terminación del grupo
pub fn default_stem(infinitive: &str, group: VerbGroup) -> &str {
    infinitive
        .strip_suffix(group.infinitive_ending())
        .unwrap_or(infinitive)
}

/// -ger → ge, -cer → ç delante de a/o (mangeons, lançais)
fn soften_before_hard_vowel(stem: &mut String, infinitive: &str, ending: &str) {
    if !(ending.starts_with('a') || ending.starts_with('o')) {
        return;
    }

    if infinitive.ends_with("ger") {
        stem.push('e');
    } else if infinitive.ends_with("cer") && stem.ends_with('c') {
        stem.pop();
        stem.push('ç');
    }
}

/// Cambios de la "bota": personas je/tu/il/ils del présent, y todas las
/// personas del futur y del conditionnel
fn apply_boot_change(stem: &mut String, infinitive: &str, tense: Tense, slot: PersonSlot) {
    let boot_applies = (slot.is_boot() && tense == Tense::Present) || tense.uses_future_stem();

    if infinitive.ends_with("yer") {
        if boot_applies && stem.ends_with('y') {
            stem.pop();
            stem.push('i');
        }
    } else if infinitive.ends_with("eler") || infinitive.ends_with("eter") {
        if !boot_applies {
            return;
        }
        if is_doubling_verb(infinitive) {
            if let Some(last) = stem.chars().last() {
                stem.push(last);
            }
        } else if let Some(pos) = stem.rfind('e') {
            stem.replace_range(pos..pos + 1, "è");
        }
    } else {
        let mut chars: Vec<char> = stem.chars().collect();
        if chars.len() < 2 {
            return;
        }
        let idx = chars.len() - 2;
        match chars[idx] {
            'e' if boot_applies => chars[idx] = 'è',
            // préférer conserva la é en futur: préférerai
            'é' if slot.is_boot() && matches!(tense, Tense::Present | Tense::Subjonctif) => {
                chars[idx] = 'è'
            }
            _ => return,
        }
        *stem = chars.into_iter().collect();
    }
}

fn is_doubling_verb(infinitive: &str) -> bool {
    DOUBLING_VERBS.iter().any(|verb| infinitive.ends_with(verb))
}

//! Elisión del pronombre de primera persona ("Je" → "J’")

use super::regular::fold_diacritic;
use super::PersonSlot;

/// Apóstrofo tipográfico que cierra el pronombre elidido
pub const ELIDED_FIRST_SINGULAR_MARK: char = '\u{2019}';

/// Pronombre elidido de primera persona del singular
pub const ELIDED_FIRST_SINGULAR: &str = "J\u{2019}";

/// Vocales y h muda (aproximación: toda h se trata como muda)
const ELIDING_INITIALS: [char; 7] = ['a', 'e', 'i', 'o', 'u', 'y', 'h'];

/// Devuelve el pronombre que precede a `following_word`.
///
/// Solo la primera persona del singular se elide. Se mira la palabra que de
/// verdad sigue al pronombre: la forma ya con los cambios de raíz, o el
/// auxiliar en los tiempos compuestos.
pub fn resolve_pronoun(slot: PersonSlot, following_word: &str) -> &'static str {
    if slot == PersonSlot::FirstSingular && starts_with_eliding_sound(following_word) {
        ELIDED_FIRST_SINGULAR
    } else {
        slot.pronoun()
    }
}

fn starts_with_eliding_sound(word: &str) -> bool {
    word.chars()
        .next()
        .and_then(|c| c.to_lowercase().next())
        .map(fold_diacritic)
        .is_some_and(|c| ELIDING_INITIALS.contains(&c))
}

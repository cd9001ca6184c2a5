//! Presentación de conjugaciones: lista, tabla singular/plural y JSON

use comfy_table::Table;
use serde::Serialize;

use crate::conjugation::{Conjugation, PersonSlot, Tense};

/// Una línea por persona
pub fn render_list(conjugation: &Conjugation) -> String {
    conjugation
        .iter()
        .map(|form| form.phrase())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tabla de dos columnas (singular | plural)
pub fn render_chart(conjugation: &Conjugation) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Singulier", "Pluriel"]);

    for (singular, plural) in conjugation.singular().zip(conjugation.plural()) {
        table.add_row(vec![singular.phrase(), plural.phrase()]);
    }

    table.to_string()
}

/// Una sola persona, con la terminación separada y la explicación del tiempo
pub fn render_person(conjugation: &Conjugation, slot: PersonSlot, tense: Tense) -> String {
    let form = conjugation.get(slot);
    let mut out = form.phrase();
    if !form.ending.is_empty() {
        out.push_str(&format!("\n  {}[{}]", form.stem, form.ending));
    }
    out.push('\n');
    out.push_str(tense.description());
    out
}

/// Encabezado de un bloque: "aimer (Présent)"
pub fn heading(verb: &str, tense: Tense) -> String {
    format!("{} ({})", verb.trim(), tense.label())
}

#[derive(Debug, Serialize)]
struct TenseReport<'a> {
    tense: Tense,
    label: &'static str,
    forms: &'a Conjugation,
}

#[derive(Debug, Serialize)]
struct VerbReport<'a> {
    verb: &'a str,
    conjugations: Vec<TenseReport<'a>>,
}

/// JSON con todas las conjugaciones pedidas
pub fn render_json(
    verb: &str,
    conjugations: &[(Tense, Conjugation)],
) -> serde_json::Result<String> {
    let report = VerbReport {
        verb: verb.trim(),
        conjugations: conjugations
            .iter()
            .map(|(tense, forms)| TenseReport {
                tense: *tense,
                label: tense.label(),
                forms,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conjugation::Conjugator;

    fn conjugation(verb: &str, tense: Tense) -> Conjugation {
        Conjugator::standard().conjugate(verb, tense).unwrap()
    }

    #[test]
    fn test_render_list() {
        let out = render_list(&conjugation("aimer", Tense::Present));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "J\u{2019}aime");
        assert_eq!(lines[3], "Nous aimons");
        assert_eq!(lines[5], "Ils / Elles aiment");
    }

    #[test]
    fn test_render_chart_has_both_columns() {
        let out = render_chart(&conjugation("finir", Tense::Present));
        assert!(out.contains("Singulier"));
        assert!(out.contains("Pluriel"));
        assert!(out.contains("Je finis"));
        assert!(out.contains("Nous finissons"));
    }

    #[test]
    fn test_render_person() {
        let out = render_person(
            &conjugation("parler", Tense::Futur),
            PersonSlot::FirstPlural,
            Tense::Futur,
        );
        assert!(out.starts_with("Nous parlerons"));
        assert!(out.contains("parler[ons]"));
        assert!(out.contains(Tense::Futur.description()));
    }

    #[test]
    fn test_render_json() {
        let conj = conjugation("vendre", Tense::PasseCompose);
        let out = render_json("vendre", &[(Tense::PasseCompose, conj)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["verb"], "vendre");
        assert_eq!(value["conjugations"][0]["tense"], "passe_compose");
        assert_eq!(value["conjugations"][0]["forms"][2]["surface_form"], "a vendu");
        assert_eq!(value["conjugations"][0]["forms"][2]["ending"], "vendu");
    }
}

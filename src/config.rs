//! Configuración y argumentos CLI

use clap::{Parser, ValueEnum};

use crate::conjugation::{PersonSlot, Tense};

/// Formato de salida
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Una línea por persona ("J’aime")
    List,
    /// Tabla de dos columnas: singular y plural
    Chart,
    /// JSON con raíz, terminación y forma completa
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "conjugueur",
    version,
    about = "Conjugador de verbos franceses",
    after_help = concat!(
        "EJEMPLOS:\n",
        "    conjugueur aimer\n",
        "    conjugueur manger -t imparfait -t futur\n",
        "    conjugueur être --all --format chart\n",
        "    conjugueur acheter -t present -p 0",
    )
)]
pub struct Config {
    /// Verbo en infinitivo (con o sin tildes)
    pub verb: String,

    /// Tiempo: present, imparfait, futur, conditionnel, subjonctif, passe_compose
    #[arg(short = 't', long = "tense", value_parser = parse_tense)]
    pub tenses: Vec<Tense>,

    /// Conjugar en los seis tiempos
    #[arg(short, long, conflicts_with = "tenses")]
    pub all: bool,

    /// Formato de salida
    #[arg(short, long, value_enum, default_value_t = OutputFormat::List)]
    pub format: OutputFormat,

    /// Mostrar solo una persona (0 = je ... 5 = ils) con la explicación del tiempo
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub person: Option<u8>,

    /// Mensajes de depuración en stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Tiempos pedidos, sin repetidos; `present` si no se indicó ninguno
    pub fn selected_tenses(&self) -> Vec<Tense> {
        if self.all {
            return Tense::ALL.to_vec();
        }
        if self.tenses.is_empty() {
            return vec![Tense::Present];
        }

        let mut tenses = Vec::with_capacity(self.tenses.len());
        for tense in &self.tenses {
            if !tenses.contains(tense) {
                tenses.push(*tense);
            }
        }
        tenses
    }

    pub fn person_slot(&self) -> Option<PersonSlot> {
        self.person
            .and_then(|index| PersonSlot::from_index(usize::from(index)))
    }

    /// Filtro por defecto del logger cuando no hay `RUST_LOG`
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "conjugueur=debug"
        } else {
            "conjugueur=warn"
        }
    }
}

fn parse_tense(value: &str) -> Result<Tense, String> {
    value.parse::<Tense>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut full = vec!["conjugueur"];
        full.extend_from_slice(args);
        Config::from_args(full).expect("argumentos válidos")
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["aimer"]);
        assert_eq!(config.verb, "aimer");
        assert_eq!(config.selected_tenses(), vec![Tense::Present]);
        assert_eq!(config.format, OutputFormat::List);
        assert_eq!(config.person_slot(), None);
        assert!(!config.verbose);
    }

    #[test]
    fn test_repeated_tenses_keep_order_without_duplicates() {
        let config = parse(&["manger", "-t", "futur", "--tense", "imparfait", "-t", "futur"]);
        assert_eq!(config.selected_tenses(), vec![Tense::Futur, Tense::Imparfait]);
    }

    #[test]
    fn test_tense_aliases_accepted() {
        let config = parse(&["finir", "-t", "passé composé"]);
        assert_eq!(config.selected_tenses(), vec![Tense::PasseCompose]);
    }

    #[test]
    fn test_all_tenses() {
        let config = parse(&["être", "--all", "--format", "chart"]);
        assert_eq!(config.selected_tenses(), Tense::ALL.to_vec());
        assert_eq!(config.format, OutputFormat::Chart);
    }

    #[test]
    fn test_person() {
        let config = parse(&["acheter", "-p", "3"]);
        assert_eq!(config.person_slot(), Some(PersonSlot::FirstPlural));
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(Config::from_args(["conjugueur", "aimer", "-t", "aoriste"]).is_err());
        assert!(Config::from_args(["conjugueur", "aimer", "-p", "6"]).is_err());
        assert!(Config::from_args(["conjugueur", "aimer", "--all", "-t", "futur"]).is_err());
        assert!(Config::from_args(["conjugueur"]).is_err());
    }
}

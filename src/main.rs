use std::process;

use tracing_subscriber::EnvFilter;

use conjugueur::config::OutputFormat;
use conjugueur::render;
use conjugueur::{Config, Conjugation, Conjugator, Tense};

fn main() {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => e.exit(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let conjugator = Conjugator::standard();
    let mut results: Vec<(Tense, Conjugation)> = Vec::new();

    for tense in config.selected_tenses() {
        match conjugator.conjugate(&config.verb, tense) {
            Some(conjugation) => results.push((tense, conjugation)),
            None => {
                eprintln!(
                    "Error: no se pudo conjugar '{}' en {}.",
                    config.verb.trim(),
                    tense.label()
                );
                let mut irregulars: Vec<&str> =
                    conjugator.table().irregular_infinitives().collect();
                irregulars.sort_unstable();
                eprintln!(
                    "Prueba un verbo regular en -er, -ir o -re, o uno de: {}.",
                    irregulars.join(", ")
                );
                process::exit(1);
            }
        }
    }

    if config.format == OutputFormat::Json {
        match render::render_json(&config.verb, &results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error generando JSON: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let blocks: Vec<String> = results
        .iter()
        .map(|(tense, conjugation)| {
            let body = match (config.person_slot(), config.format) {
                (Some(slot), _) => render::render_person(conjugation, slot, *tense),
                (None, OutputFormat::Chart) => render::render_chart(conjugation),
                (None, _) => render::render_list(conjugation),
            };
            format!("{}\n{}", render::heading(&config.verb, *tense), body)
        })
        .collect();

    println!("{}", blocks.join("\n\n"));
}

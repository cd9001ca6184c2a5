//! Conjugueur - Biblioteca de conjugación de verbos franceses
//!
//! Produce las seis formas de un verbo en un tiempo a partir de su
//! infinitivo. Es una función pura: sin E/S ni estado entre llamadas.

pub mod config;
pub mod conjugation;
pub mod error;
pub mod render;

pub use config::Config;
pub use conjugation::engine::conjugate;
pub use conjugation::{
    Auxiliary, ConjugatedForm, Conjugation, Conjugator, PersonSlot, RuleTable, Tense, VerbGroup,
};
pub use error::ConjugationError;

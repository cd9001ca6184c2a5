//! Errores del conjugador
//!
//! Para quien llama, todos equivalen a "sin resultado"; se distinguen para
//! poder registrarlos y probarlos por separado.

use thiserror::Error;

use crate::conjugation::Tense;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConjugationError {
    /// No termina en -er/-ir/-re y no es un irregular conocido
    #[error("verbo no reconocido: '{0}'")]
    UnrecognizedVerb(String),

    /// Verbo válido sin formas para el tiempo pedido
    #[error("el verbo '{verb}' no tiene formas para el tiempo '{tense}'")]
    UnsupportedTense { verb: String, tense: Tense },

    /// Falta en la tabla de reglas algo que debería estar (error de datos)
    #[error("la tabla de reglas no tiene {missing} (verbo '{verb}', tiempo '{tense}')")]
    ConfigurationGap {
        verb: String,
        tense: Tense,
        missing: String,
    },

    /// Identificador de tiempo desconocido
    #[error("tiempo verbal desconocido: '{0}'")]
    UnknownTense(String),
}

impl ConjugationError {
    pub fn is_configuration_gap(&self) -> bool {
        matches!(self, ConjugationError::ConfigurationGap { .. })
    }
}

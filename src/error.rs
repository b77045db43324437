//! Errores de la aplicación
//!
//! Las consultas de contenido nunca fallan (devuelven valores centinela);
//! estos errores solo aparecen en los bordes: argumentos, configuración y el
//! backend de conversación.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} requiere un valor")]
    MissingValue(String),

    #[error("Opción desconocida: {0}")]
    UnknownOption(String),

    #[error("Comando desconocido: {0}")]
    UnknownCommand(String),

    #[error("Falta el argumento {0}")]
    MissingArgument(&'static str),

    /// Nivel MCER fuera de A1..C2
    #[error("Nivel MCER no válido: {0} (use A1, A2, B1, B2, C1 o C2)")]
    InvalidLevel(String),

    #[error("Valor no válido para {key}: {value}")]
    InvalidSetting { key: String, value: String },

    /// Fallo de transporte o respuesta no exitosa del servicio de IA
    #[error("Error del servicio de conversación: {0}")]
    Backend(String),

    #[error("Respuesta del servicio no válida: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

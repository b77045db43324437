//! Inicialización del log (tracing + tracing-subscriber)

use tracing_subscriber::EnvFilter;

/// Instala un suscriptor `fmt` hacia stderr
///
/// `RUST_LOG` tiene prioridad; si no está definido se usa `level`.
/// Llamarlo más de una vez no tiene efecto.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Nivel efectivo a partir de `--verbose` y del nivel configurado
pub fn effective_level(verbose: bool, configured: &str) -> &str {
    if verbose {
        "debug"
    } else {
        configured
    }
}

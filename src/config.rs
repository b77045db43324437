//! Configuración y argumentos CLI

use crate::error::{Error, Result};
use crate::french::models::{CefrLevel, Formality};

/// Acción solicitada en la línea de comandos
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Análisis de género de un sustantivo y lecciones de artículos
    Gender {
        word: String,
        partitive: bool,
        contractions: bool,
        agreement: bool,
    },
    /// Lecciones y análisis de pronunciación
    Pronunciation {
        text: Option<String>,
        nasal: bool,
        liaison: Option<String>,
        minimal_pairs: bool,
    },
    Conjugate {
        verb: String,
        tense: String,
        subject: Option<String>,
        reflexive: bool,
        subjunctive: bool,
        passe_compose: Option<String>,
    },
    /// Conversación interactiva con el compañero de IA
    Chat {
        level: CefrLevel,
        formality: Formality,
    },
    Scenario {
        kind: String,
    },
    Version,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    /// Salida JSON en lugar de texto
    pub json: bool,
    /// Activa el nivel de log `debug`
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: Command::Help,
            json: false,
            verbose: false,
        }
    }
}

impl Config {
    pub fn from_args(args: Vec<String>) -> Result<Self> {
        let mut config = Config::default();
        let mut rest = Vec::new();

        // Primero las opciones globales, en cualquier posición
        for arg in args.into_iter().skip(1) {
            match arg.as_str() {
                "--json" => config.json = true,
                "-v" | "--verbose" => config.verbose = true,
                "-h" | "--help" => {
                    config.command = Command::Help;
                    return Ok(config);
                }
                _ => rest.push(arg),
            }
        }

        let mut rest = rest.into_iter();
        let Some(command) = rest.next() else {
            return Ok(config);
        };

        config.command = match command.as_str() {
            "gender" => Self::parse_gender(rest)?,
            "pronunciation" => Self::parse_pronunciation(rest)?,
            "conjugate" => Self::parse_conjugate(rest)?,
            "chat" => Self::parse_chat(rest)?,
            "scenario" => Self::parse_scenario(rest)?,
            "version" => Command::Version,
            "help" => Command::Help,
            other => return Err(Error::UnknownCommand(other.to_string())),
        };

        Ok(config)
    }

    fn parse_gender(mut args: impl Iterator<Item = String>) -> Result<Command> {
        let mut word = None;
        let mut partitive = false;
        let mut contractions = false;
        let mut agreement = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-p" | "--partitive" => partitive = true,
                "-c" | "--contractions" => contractions = true,
                "-a" | "--agreement" => agreement = true,
                _ => word = Some(Self::positional(arg, word.is_some())?),
            }
        }

        Ok(Command::Gender {
            word: word.ok_or(Error::MissingArgument("<PALABRA>"))?,
            partitive,
            contractions,
            agreement,
        })
    }

    fn parse_pronunciation(mut args: impl Iterator<Item = String>) -> Result<Command> {
        let mut text = None;
        let mut nasal = false;
        let mut liaison = None;
        let mut minimal_pairs = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-t" | "--text" => text = Some(Self::value(&mut args, "--text")?),
                "-n" | "--nasal" => nasal = true,
                "-l" | "--liaison" => liaison = Some(Self::value(&mut args, "--liaison")?),
                "-m" | "--minimal-pairs" => minimal_pairs = true,
                _ => return Err(Error::UnknownOption(arg)),
            }
        }

        Ok(Command::Pronunciation {
            text,
            nasal,
            liaison,
            minimal_pairs,
        })
    }

    fn parse_conjugate(mut args: impl Iterator<Item = String>) -> Result<Command> {
        let mut verb = None;
        let mut tense = "présent".to_string();
        let mut subject = None;
        let mut reflexive = false;
        let mut subjunctive = false;
        let mut passe_compose = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-t" | "--tense" => tense = Self::value(&mut args, "--tense")?,
                "-s" | "--subject" => subject = Some(Self::value(&mut args, "--subject")?),
                "-r" | "--reflexive" => reflexive = true,
                "-j" | "--subjunctive" => subjunctive = true,
                "-p" | "--passe-compose" => {
                    passe_compose = Some(Self::value(&mut args, "--passe-compose")?)
                }
                _ => verb = Some(Self::positional(arg, verb.is_some())?),
            }
        }

        Ok(Command::Conjugate {
            verb: verb.ok_or(Error::MissingArgument("<VERBO>"))?,
            tense,
            subject,
            reflexive,
            subjunctive,
            passe_compose,
        })
    }

    fn parse_chat(mut args: impl Iterator<Item = String>) -> Result<Command> {
        let mut level = CefrLevel::A1;
        let mut formality = Formality::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-l" | "--level" => level = Self::value(&mut args, "--level")?.parse()?,
                "-f" | "--formality" => {
                    formality = Formality::from_str_lossy(&Self::value(&mut args, "--formality")?)
                }
                _ => return Err(Error::UnknownOption(arg)),
            }
        }

        Ok(Command::Chat { level, formality })
    }

    fn parse_scenario(mut args: impl Iterator<Item = String>) -> Result<Command> {
        let kind = match args.next() {
            Some(arg) => Self::positional(arg, false)?,
            None => "café".to_string(),
        };
        if let Some(extra) = args.next() {
            return Err(Error::UnknownOption(extra));
        }
        Ok(Command::Scenario { kind })
    }

    fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
        args.next().ok_or_else(|| Error::MissingValue(flag.to_string()))
    }

    fn positional(arg: String, already_set: bool) -> Result<String> {
        if arg.starts_with('-') || already_set {
            return Err(Error::UnknownOption(arg));
        }
        Ok(arg)
    }

    pub fn print_help() {
        println!("{}", Self::help_text());
    }

    pub fn help_text() -> &'static str {
        r#"Francais - Motor de contenidos para aprender francés

USO:
    francais [OPCIONES] <COMANDO> [ARGUMENTOS]

COMANDOS:
    gender <PALABRA>            Género probable de un sustantivo
        -p, --partitive         Lección de partitivos
        -c, --contractions      Contracciones de artículos
        -a, --agreement         Concordancia de adjetivos
    pronunciation               Lecciones de pronunciación
        -t, --text <TEXTO>      Analiza las dificultades de un texto
        -n, --nasal             Vocales nasales
        -l, --liaison <FRASE>   Práctica de liaison
        -m, --minimal-pairs     Pares mínimos
    conjugate <VERBO>           Conjuga un verbo
        -t, --tense <TIEMPO>    Tiempo (default: présent)
        -s, --subject <SUJETO>  Solo la forma de un sujeto
        -r, --reflexive         Conjugación pronominal
        -j, --subjunctive       Práctica del subjuntivo
        -p, --passe-compose <SUJETO>  Forma el passé composé
    chat                        Conversación con el compañero de IA
        -l, --level <NIVEL>     A1, A2, B1, B2, C1, C2 (default: A1)
        -f, --formality <REG>   formal | informal (default: formal)
    scenario [café|marché]      Escenario de conversación guiada
    version                     Muestra la versión
    help                        Muestra esta ayuda

OPCIONES:
    -h, --help                  Muestra esta ayuda
    -v, --verbose               Log de depuración
    --json                      Salida en JSON

ENTORNO:
    OPENAI_API_KEY              Clave para el compañero de conversación
    EARLYFRENCH_OPENAI_MODEL    Modelo (default: gpt-4-turbo-preview)
    EARLYFRENCH_LOG_LEVEL       Nivel de log (default: warn)

EJEMPLOS:
    francais gender voiture
    francais conjugate aller -t présent -s je
    francais conjugate parler -p je
    francais --json pronunciation -t "Bonjour""#
    }
}

/// Parámetros de entorno del servicio de conversación y del log
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_temperature: f32,
    pub openai_max_tokens: u32,
    pub openai_base_url: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: "gpt-4-turbo-preview".to_string(),
            openai_temperature: 0.7,
            openai_max_tokens: 500,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            request_timeout_secs: 30,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lee los parámetros con una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        settings.openai_api_key = get("OPENAI_API_KEY");
        if let Some(model) = get("EARLYFRENCH_OPENAI_MODEL") {
            settings.openai_model = model;
        }
        if let Some(value) = get("EARLYFRENCH_OPENAI_TEMPERATURE") {
            settings.openai_temperature = parse_setting("EARLYFRENCH_OPENAI_TEMPERATURE", &value)?;
        }
        if let Some(value) = get("EARLYFRENCH_OPENAI_MAX_TOKENS") {
            settings.openai_max_tokens = parse_setting("EARLYFRENCH_OPENAI_MAX_TOKENS", &value)?;
        }
        if let Some(url) = get("EARLYFRENCH_OPENAI_BASE_URL") {
            settings.openai_base_url = url;
        }
        if let Some(value) = get("EARLYFRENCH_TIMEOUT_SECS") {
            settings.request_timeout_secs = parse_setting("EARLYFRENCH_TIMEOUT_SECS", &value)?;
        }
        if let Some(level) = get("EARLYFRENCH_LOG_LEVEL") {
            settings.log_level = level.trim().to_lowercase();
        }

        Ok(settings)
    }
}

fn parse_setting<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    })
}

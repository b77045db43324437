use std::io::{self, BufRead, Write};
use std::process;

use earlyfrench::{
    logging, Command, Config, ConversationPartner, ConversationSession, Settings, Tutor,
};

fn main() {
    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            Config::print_help();
            process::exit(1);
        }
    };

    if config.command == Command::Help {
        Config::print_help();
        return;
    }

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error de configuración: {}", e);
            process::exit(1);
        }
    };

    logging::init(logging::effective_level(config.verbose, &settings.log_level));

    let tutor = Tutor::new();
    match tutor.execute(&config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    if let Command::Chat { level, formality } = config.command {
        let partner = ConversationPartner::from_settings(settings);
        let mut session = ConversationSession::new(level).with_formality(formality);

        if let Err(e) = run_chat(&partner, &mut session, config.json) {
            eprintln!("Error de entrada/salida: {}", e);
            process::exit(1);
        }
    }
}

/// Bucle interactivo: una línea por turno hasta `exit`, `quit`, `q` o EOF
fn run_chat(
    partner: &ConversationPartner,
    session: &mut ConversationSession,
    json: bool,
) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("Vous: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input.to_lowercase().as_str(), "exit" | "quit" | "q") {
            break;
        }

        let response = partner.chat(session, input);

        if json {
            match serde_json::to_string(&response) {
                Ok(s) => println!("{}", s),
                Err(e) => eprintln!("Error: {}", e),
            }
            continue;
        }

        println!("Partenaire: {}", response.french);
        if !response.english.is_empty() {
            println!("  ({})", response.english);
        }
        for correction in &response.corrections {
            println!("  ✎ {}", correction);
        }
        for word in &response.vocabulary {
            println!("  + {}", word);
        }
        if !response.follow_up.is_empty() {
            println!("  → {}", response.follow_up);
        }
    }

    println!("Au revoir!");
    Ok(())
}

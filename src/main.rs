//! gl-suggest: suggestion bridge for a completion engine.
//!
//! Reads one JSON request from stdin, writes `{"suggestions": [...]}` to stdout.
//! The engine collects everything beforehand: this binary never runs `gl`
//! and never lists directories.
//!
//! ```text
//! {"generators": ["remote-refs", "branches"],
//!  "output": {"remote-refs": "origin\n", "branches": "* main\n"},
//!  "entries": [{"name": "a.rs", "kind": "file"}]}
//! ```
//!
//! Flags:
//!   --list         print each generator and what to collect for it
//!   --dump-config  print the merged configuration as TOML
//!   --debug        log at debug level

use std::io::Read;

use serde::{Deserialize, Serialize};

use gl_suggest::config::Config;
use gl_suggest::generators::{Collected, GeneratorRegistry, GeneratorSource};
use gl_suggest::{Result, Suggestion, logging, parse};

#[derive(Deserialize)]
struct Request {
    generators: Vec<String>,
    #[serde(flatten)]
    collected: Collected,
}

#[derive(Serialize)]
struct Response<'a> {
    suggestions: &'a [Suggestion],
}

const USAGE: &str = "usage: gl-suggest [--list | --dump-config] [--debug] < request.json";

fn list(registry: &GeneratorRegistry) {
    for (name, generator) in registry.iter() {
        match generator.source() {
            GeneratorSource::Template => println!("{name}\ttemplate:filepaths"),
            GeneratorSource::Script(argv) => println!("{name}\tscript:{}", parse::display(argv)),
        }
    }
}

fn serve(registry: &GeneratorRegistry) -> Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let request: Request = serde_json::from_str(&input)?;

    let suggestions = registry.suggest_all(&request.generators, &request.collected)?;
    logging::log_request(&request.generators, suggestions.len());

    let response = Response {
        suggestions: &suggestions,
    };
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

fn main() {
    let mut debug = false;
    let mut mode_list = false;
    let mut mode_dump = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--debug" => debug = true,
            "--list" => mode_list = true,
            "--dump-config" => mode_dump = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            other => {
                eprintln!("gl-suggest: unknown argument: {other}\n{USAGE}");
                std::process::exit(2);
            }
        }
    }

    logging::init(debug);
    let config = Config::load();

    if mode_dump {
        match toml::to_string_pretty(&config) {
            Ok(s) => print!("{s}"),
            Err(e) => {
                eprintln!("gl-suggest: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let registry = match GeneratorRegistry::from_config(&config) {
        Ok(r) => r,
        Err(e) => {
            log::error!("{e}");
            eprintln!("gl-suggest: {e}");
            std::process::exit(1);
        }
    };

    if mode_list {
        list(&registry);
        return;
    }

    if let Err(e) = serve(&registry) {
        log::error!("{e}");
        eprintln!("gl-suggest: {e}");
        std::process::exit(1);
    }
}

use clap::Parser;
use wasm_bindgen::prelude::*;

mod api;
mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Parses arguments given in the location hash, e.g. `#-vv&--seed=7&--categories=4`.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        let args = hash.split(['#', '&']).filter(|arg| !arg.is_empty());
        Self::try_parse_from(std::iter::once("trivia").chain(args))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args.game);

    let root = document()
        .get_element_by_id("trivia")
        .expect("Could not find id=\"trivia\" element");

    log::debug!("App started");
    yew::Renderer::<game::BoardView>::with_root_and_props(root, args.game).render();
}

use cineshelf_player::config::Config;
use cineshelf_player::state::State;
use cineshelf_player::theme::CineshelfTheme;
use cineshelf_player::{update, views};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("cineshelf_player", LevelFilter::Debug)
        .filter_module("cineshelf_model", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = Config::load();

    // An optional deep link on the command line takes precedence over the
    // saved location for the one-time startup parse.
    let initial_location = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.last_location.clone());

    iced::application("Cineshelf", update::update, views::view)
        .settings(iced::Settings {
            id: Some("cineshelf-player".to_string()),
            antialiasing: true,
            ..Default::default()
        })
        .window(iced::window::Settings {
            size: iced::Size::new(1280.0, 720.0),
            resizable: true,
            decorations: true,
            ..Default::default()
        })
        .theme(|_| CineshelfTheme::theme())
        .run_with(move || State::new(config.clone(), &initial_location))
}

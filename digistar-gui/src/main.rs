#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process, str::FromStr};

#[cfg(target_os = "linux")]
use iced::window::settings::PlatformSpecific;
use iced::{Settings, Size};
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

use digistar_ui::{component::text, font, theme};

use digistar_gui::{
    config::{self, Config, ConfigError},
    dir::ClubDirectory,
    gui::Gui,
    services::portal::client::DEFAULT_API_URL,
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(ClubDirectory),
    ApiUrl(String),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: digistar-club [OPTIONS]

Options:
    --datadir <PATH>    Path of the application datadir
    --api-url <URL>     Base URL of the membership portal API
    -v, --version       Display digistar-gui version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    for (i, arg) in args.iter().enumerate() {
        if arg == "--datadir" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::DatadirPath(ClubDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else if arg == "--api-url" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::ApiUrl(a.clone()));
            } else {
                return Err("missing arg to --api-url".into());
            }
        } else if arg.starts_with("--") {
            return Err(format!("unknown argument '{}'", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let args = parse_args(std::env::args().collect())?;
    let mut datadir = None;
    let mut api_url_arg = None;
    for arg in args {
        match arg {
            Arg::DatadirPath(d) => datadir = Some(d),
            Arg::ApiUrl(url) => api_url_arg = Some(url),
        }
    }

    let datadir = match datadir {
        Some(datadir) => datadir,
        None => ClubDirectory::new_default()?,
    };
    if !datadir.exists() {
        datadir.init()?;
    }

    let config = match Config::from_file(&datadir.path().join(config::DEFAULT_FILE_NAME)) {
        Ok(config) => config,
        Err(ConfigError::NotFound) => Config::default(),
        Err(e) => {
            return Err(format!("Failed to read configuration file: {}", e).into());
        }
    };

    let log_level = if let Ok(level) = std::env::var("LOG_LEVEL") {
        LevelFilter::from_str(&level)?
    } else {
        config.log_level()?
    };

    // Command line beats environment beats configuration file.
    let api_url = api_url_arg
        .or_else(|| std::env::var("DIGISTAR_API_URL").ok())
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    setup_panic_hook();

    let settings = Settings {
        id: Some("DigistarClub".to_string()),
        antialiasing: false,

        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        fonts: Vec::new(),
    };

    #[allow(unused_mut)]
    let mut window_settings = iced::window::Settings {
        min_size: Some(Size {
            width: 900.0,
            height: 600.0,
        }),
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = PlatformSpecific {
            application_id: "DigistarClub".to_string(),
            ..Default::default()
        };
    }

    if let Err(e) = iced::application(Gui::title, Gui::update, Gui::view)
        .theme(|_| theme::Theme::default())
        .subscription(Gui::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || Gui::new((datadir, api_url, log_level)))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or("'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

use iced::{Subscription, Task};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

use digistar_ui::widget::Element;

use crate::{
    dir::ClubDirectory,
    launcher::{self, Launcher},
    logger::setup_logger,
    register::{self, Register},
    reset::{self, ResetPassword},
    services::portal::client::PortalClient,
    VERSION,
};

pub struct Gui {
    state: State,
    api_url: String,
}

enum State {
    Launcher(Launcher),
    Register(Box<Register>),
    Reset(Box<ResetPassword>),
}

#[derive(Debug)]
pub enum Message {
    CtrlC,
    Launch(Box<launcher::Message>),
    Register(Box<register::Message>),
    Reset(Box<reset::Message>),
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

impl Gui {
    pub fn title(&self) -> String {
        match self.state {
            State::Launcher(_) => format!("Digistar Club v{}", VERSION),
            State::Register(_) => format!("Digistar Club v{} - Create an account", VERSION),
            State::Reset(_) => format!("Digistar Club v{} - Reset your password", VERSION),
        }
    }

    pub fn new(
        (datadir, api_url, log_level): (ClubDirectory, String, LevelFilter),
    ) -> (Gui, Task<Message>) {
        if let Err(e) = setup_logger(log_level, datadir) {
            eprintln!("Failed to set up the logger: {}", e);
        }
        info!("Portal API url: {}", api_url);
        let (launcher, task) = Launcher::new();
        (
            Self {
                state: State::Launcher(launcher),
                api_url,
            },
            Task::batch(vec![
                task.map(|msg| Message::Launch(Box::new(msg))),
                Task::perform(ctrl_c(), |_| Message::CtrlC),
            ]),
        )
    }

    fn client(&self) -> PortalClient {
        PortalClient::new(self.api_url.clone())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match (&mut self.state, message) {
            (_, Message::CtrlC) => iced::window::get_latest().and_then(iced::window::close),
            (State::Launcher(_), Message::Launch(msg)) => match *msg {
                launcher::Message::View(launcher::ViewMessage::CreateAccount) => {
                    let (register, task) = Register::new(self.client());
                    self.state = State::Register(Box::new(register));
                    task.map(|msg| Message::Register(Box::new(msg)))
                }
                launcher::Message::View(launcher::ViewMessage::ResetPassword) => {
                    let (reset, task) = ResetPassword::new(self.client());
                    self.state = State::Reset(Box::new(reset));
                    task.map(|msg| Message::Reset(Box::new(msg)))
                }
            },
            (State::Register(v), Message::Register(msg)) => {
                if let register::Message::View(register::ViewMessage::BackToLauncher) = *msg {
                    let (launcher, task) = Launcher::new();
                    self.state = State::Launcher(launcher);
                    task.map(|msg| Message::Launch(Box::new(msg)))
                } else {
                    v.update(*msg).map(|msg| Message::Register(Box::new(msg)))
                }
            }
            (State::Reset(v), Message::Reset(msg)) => {
                if let reset::Message::View(reset::ViewMessage::BackToLauncher) = *msg {
                    let (launcher, task) = Launcher::new();
                    self.state = State::Launcher(launcher);
                    task.map(|msg| Message::Launch(Box::new(msg)))
                } else {
                    v.update(*msg).map(|msg| Message::Reset(Box::new(msg)))
                }
            }
            _ => Task::none(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match &self.state {
            State::Launcher(v) => v.subscription().map(|msg| Message::Launch(Box::new(msg))),
            State::Register(v) => v.subscription().map(|msg| Message::Register(Box::new(msg))),
            State::Reset(v) => v.subscription().map(|msg| Message::Reset(Box::new(msg))),
        }
    }

    pub fn view(&self) -> Element<Message> {
        match &self.state {
            State::Launcher(v) => v.view().map(|msg| Message::Launch(Box::new(msg))),
            State::Register(v) => v.view().map(|msg| Message::Register(Box::new(msg))),
            State::Reset(v) => v.view().map(|msg| Message::Reset(Box::new(msg))),
        }
    }
}

//! Prompt-driven loop over the mounted screen.

use anyhow::Result;
use inquire::{InquireError, Select, Text};
use skycast_core::{
    App, Screen,
    screen::{input::PLACEHOLDER, output::GO_BACK_LABEL},
};

use crate::render;

const QUIT_LABEL: &str = "Quit";

/// Run until the user quits or cancels a prompt.
pub async fn run(app: &mut App) -> Result<()> {
    loop {
        match app.screen_mut() {
            Screen::CityInput(form) => {
                print!("{}", render::city_input(form));

                let city_prompt = Text::new("City:").with_placeholder(PLACEHOLDER);
                let Some(entered) = prompt(city_prompt.prompt())? else {
                    return Ok(());
                };

                form.set_entered_city(entered);
                if let Some(nav) = form.submit() {
                    app.navigate(nav);
                }
            }
            Screen::Weather(screen) => {
                println!("{}", render::weather(screen.city(), screen.state()));
                screen.settle().await;
                println!("{}", render::weather(screen.city(), screen.state()));

                let next = Select::new("What next?", vec![GO_BACK_LABEL, QUIT_LABEL]);
                match prompt(next.prompt())? {
                    Some(GO_BACK_LABEL) => {
                        let nav = screen.go_back();
                        app.navigate(nav);
                    }
                    _ => return Ok(()),
                }
            }
        }
    }
}

/// Treat Esc and Ctrl-C as a request to leave the session.
fn prompt<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

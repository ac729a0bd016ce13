pub mod app;
pub mod ui;

use std::{error::Error, io};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use app::{App, InputMode, ProfileField, Screen, View};
use ui::ui;

pub fn run_tui(demo: bool) -> Result<(), Box<dyn Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(demo);

    // Run loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match app.screen {
                Screen::Onboarding => {
                    // Ctrl-C quits; plain characters belong to the form.
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c')
                    {
                        return Ok(());
                    }
                    match key.code {
                        KeyCode::Enter => app.onboard_enter(),
                        KeyCode::Esc => {
                            // Esc on the first step leaves the app.
                            if app.onboard.step == 0 {
                                return Ok(());
                            }
                            app.onboard_back();
                        }
                        KeyCode::Char(c) => {
                            app.input_buffer.push(c);
                        }
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        _ => {}
                    }
                }
                Screen::Main => match app.input_mode {
                    InputMode::Normal => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Tab => app.next_view(),
                        KeyCode::Down | KeyCode::Char('j') => app.next(),
                        KeyCode::Up | KeyCode::Char('k') => app.previous(),
                        KeyCode::Char(' ') => {
                            if app.view == View::Dashboard {
                                app.toggle_selected()
                            }
                        }
                        KeyCode::Char('a') => {
                            if app.view == View::Dashboard {
                                app.start_create()
                            }
                        }
                        KeyCode::Char('n') => {
                            if app.view == View::Profile {
                                app.start_profile_edit(ProfileField::Name)
                            }
                        }
                        KeyCode::Char('e') => {
                            if app.view == View::Profile {
                                app.start_profile_edit(ProfileField::Experience)
                            }
                        }
                        KeyCode::Char('o') => {
                            if app.view == View::Profile {
                                app.start_profile_edit(ProfileField::Job)
                            }
                        }
                        KeyCode::Char('h') => {
                            if app.view == View::Profile {
                                app.start_profile_edit(ProfileField::Hours)
                            }
                        }
                        _ => {}
                    },
                    InputMode::Creating | InputMode::Editing => match key.code {
                        KeyCode::Enter => app.handle_input(),
                        KeyCode::Esc => app.cancel_input(),
                        KeyCode::Char(c) => {
                            app.input_buffer.push(c);
                        }
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        _ => {}
                    },
                },
            }
        }
    }
}

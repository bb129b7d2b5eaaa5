use std::error::Error;
use std::io::BufRead;

use todo_board::ViewController;
use todo_board::terminal::{parse_line, Command, TerminalSurface};
use todo_board::traits::Surface;


fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut surface = TerminalSurface::new(std::io::stdout());
    surface.print_help();

    let mut controller = ViewController::new(surface);
    controller.start();

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_line(&line, controller.view()) {
            Command::Quit => break,
            Command::Invalid(reason) => controller.surface_mut().notify(&reason),
            Command::Events(events) => {
                for event in events {
                    controller.handle(event);
                }
            },
        }
    }

    log::info!("Leaving with {} task(s)", controller.store().len());
    Ok(())
}

//! Interactive session - reads commands from stdin and redraws the screen.
//!
//! Commands that send a request run as their own task and ask for a redraw
//! when their response has been folded in. Nothing waits for a previous
//! request, so a fast sequence of commands can have several in flight.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::commands::{self, Command};
use crate::controller::PostsController;
use crate::render::ScreenView;

const PROMPT_HINT: &str = "Type `help` for commands, `quit` to leave.";

/// Run the screen until stdin closes or the user quits.
pub async fn run(controller: PostsController) -> anyhow::Result<()> {
    let (redraw_tx, mut redraw_rx) = mpsc::channel::<()>(32);

    println!("{PROMPT_HINT}");
    draw(&controller).await;
    spawn_request(&controller, &redraw_tx, |c| async move {
        let _ = c.refresh().await;
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match commands::parse(&line) {
                    Ok(None) => {}
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => dispatch(&controller, &redraw_tx, command).await,
                    Err(err) => println!("{err}"),
                }
            }
            Some(()) = redraw_rx.recv() => draw(&controller).await,
        }
    }

    tracing::info!("Session closed");
    Ok(())
}

async fn draw(controller: &PostsController) {
    let screen = controller.snapshot().await;
    println!("{}", ScreenView(&screen));
}

/// Run one request-sending action in the background and redraw when done.
fn spawn_request<F, Fut>(controller: &PostsController, redraw: &mpsc::Sender<()>, action: F)
where
    F: FnOnce(PostsController) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let controller = controller.clone();
    let redraw = redraw.clone();
    tokio::spawn(async move {
        action(controller).await;
        let _ = redraw.send(()).await;
    });
}

async fn dispatch(controller: &PostsController, redraw: &mpsc::Sender<()>, command: Command) {
    match command {
        // Failures are already logged by the controller and leave the
        // screen as it was.
        Command::Filter { text } => {
            let text = commands::joined(&text);
            spawn_request(controller, redraw, |c| async move {
                let _ = c.set_filter(text).await;
            });
        }
        Command::Refresh => spawn_request(controller, redraw, |c| async move {
            let _ = c.refresh().await;
        }),
        Command::Submit => spawn_request(controller, redraw, |c| async move {
            let _ = c.submit().await;
        }),
        Command::SubmitTitle => spawn_request(controller, redraw, |c| async move {
            let _ = c.submit_title_patch().await;
        }),
        Command::Delete { id } => spawn_request(controller, redraw, move |c| async move {
            let _ = c.delete(id).await;
        }),

        Command::Title { text } => {
            controller.set_title(commands::joined(&text)).await;
            draw(controller).await;
        }
        Command::Body { text } => {
            controller.set_body(commands::joined(&text)).await;
            draw(controller).await;
        }
        Command::NewTitle { text } => {
            controller.set_patch_title(commands::joined(&text)).await;
            draw(controller).await;
        }
        Command::Edit { id } => match controller.begin_edit(id).await {
            Ok(()) => draw(controller).await,
            Err(err) => println!("{err}"),
        },
        Command::Patch { id } => match controller.begin_patch(id).await {
            Ok(()) => draw(controller).await,
            Err(err) => println!("{err}"),
        },
        Command::CancelEdit => {
            controller.cancel_edit().await;
            draw(controller).await;
        }
        Command::CancelPatch => {
            controller.cancel_patch().await;
            draw(controller).await;
        }
        Command::Show => draw(controller).await,
        Command::Quit => {}
    }
}

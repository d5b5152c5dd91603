use crate::config::Config;
use crate::error::AppError;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::signup::Route;
use crate::state::State;
use crate::ui::Theme;
use crate::wallet::{SaccoWallet, WalletProvider};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::sync::Arc;
use tokio::sync::Mutex;
use tui_logger::{init_logger, set_default_level};

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;
type RouteReceiver = std::sync::mpsc::Receiver<Route>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        init_logger(LevelFilter::Debug).map_err(|e| AppError::Logger(e.to_string()))?;
        set_default_level(LevelFilter::Info);

        info!("Starting application...");
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', falling back to default. Available: {}",
                config.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });
        let (net_tx, net_rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let (route_tx, route_rx) = std::sync::mpsc::channel::<Route>();
        let state = State::new(
            Some(net_tx),
            Arc::new(route_tx),
            config.redirect_delay(),
            theme,
        );
        let app = App {
            state: Arc::new(Mutex::new(state)),
            config,
        };
        app.start_network(net_rx);
        app.start_ui(route_rx).await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread that initializes the wallet and then serves
    /// registration requests.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        let config = self.config.clone();
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("{}", AppError::RuntimeCreation(e.to_string()));
                    return;
                }
            };
            runtime.block_on(async {
                let mut provider = WalletProvider::new();
                provider
                    .initialize(|| {
                        SaccoWallet::connect(&config.wallet_url, config.api_key.as_deref())
                    })
                    .await;
                cloned_state
                    .lock()
                    .await
                    .set_wallet_status(provider.status());

                let mut network_event_handler =
                    NetworkEventHandler::new(&cloned_state, &provider, config.register_timeout());
                while let Ok(network_event) = net_receiver.recv() {
                    match network_event_handler.handle(network_event).await {
                        Ok(_) => (),
                        Err(e) => error!("Failed to handle network event: {}", e),
                    }
                }
            })
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&self, route_receiver: RouteReceiver) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run_ui_loop(&mut terminal, &route_receiver).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_ui_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        route_receiver: &RouteReceiver,
    ) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            for route in route_receiver.try_iter() {
                state.navigate(route);
            }
            if let Ok(size) = terminal.size() {
                state.set_terminal_size(size);
            };
            terminal
                .draw(|frame| crate::ui::render(frame, &state))
                .map_err(|e| AppError::Terminal(e.to_string()))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
